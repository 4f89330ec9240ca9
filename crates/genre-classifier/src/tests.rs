use crate::*;
use crate::calibrator::calibrate;
use crate::fallback::{FallbackRule, PatternFallback, FALLBACK_RULES};
use crate::matching::{assemble, count_whole_word, mask_whole_words, matched_phrases};
use crate::overrides::OverrideEngine;
use crate::recommend::{RecommendationGraph, RECOMMENDATION_TABLE};
use crate::scorer::AdjustmentFlags;
use crate::taxonomy::{IndicatorSpec, KeywordSpec, Taxonomy, KEYWORD_TABLE, STRONG_INDICATORS};
use crate::vocabulary::Vocabulary;
use genre_core::config::{CalibrationConfig, FallbackConfig, OverrideConfig};
use genre_core::GenreError;

fn classifier() -> Classifier {
    Classifier::new(default_classifier_config()).unwrap()
}

fn board(scores: &[(Category, f64)]) -> ScoreBoard {
    let mut b = ScoreBoard::new();
    for (c, s) in scores {
        b.set(*c, *s);
    }
    b
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ========== Matching ==========

#[test]
fn test_count_whole_word() {
    assert_eq!(count_whole_word("cook a cookbook, then cook", "cook"), 2);
    assert_eq!(count_whole_word("recipes", "recipe"), 0);
    assert_eq!(count_whole_word("the self-help guide", "self-help"), 1);
    assert_eq!(count_whole_word("the poet's song", "poet"), 1);
}

#[test]
fn test_count_whole_word_edges() {
    assert_eq!(count_whole_word("magic", "magic"), 1);
    assert_eq!(count_whole_word("", "magic"), 0);
    assert_eq!(count_whole_word("magic", ""), 0);
    assert_eq!(count_whole_word("café cook", "cook"), 1);
    assert_eq!(count_whole_word("time travel tales", "time travel"), 1);
}

#[test]
fn test_matched_phrases_order() {
    let hits = matched_phrases("kitchen recipes and a cookbook", &["cookbook", "recipe", "recipes", "kitchen"]);
    assert_eq!(hits, vec!["cookbook", "recipes", "kitchen"]);
}

#[test]
fn test_assemble_lowercases() {
    assert_eq!(assemble("  Dune ", " Desert PLANET "), "dune desert planet");
}

#[test]
fn test_mask_whole_words() {
    let negatives = vec!["time travel".to_string(), "cook".to_string()];
    let masked = mask_whole_words("time travel cookbook, cook", &negatives);
    assert_eq!(masked.len(), "time travel cookbook, cook".len());
    assert_eq!(count_whole_word(&masked, "travel"), 0);
    assert_eq!(count_whole_word(&masked, "cookbook"), 1);
    assert_eq!(count_whole_word(&masked, "cook"), 0);
}

// ========== Taxonomy ==========

#[test]
fn test_taxonomy_complete() {
    let t = Taxonomy::build().unwrap();
    for c in Category::ALL {
        let entry = t.entry(c);
        assert_eq!(entry.category, c);
        assert!(!entry.keywords.primary.is_empty(), "{c} has no primary keywords");
        assert!(!entry.indicators.is_empty(), "{c} has no indicators");
    }
    assert_eq!(KEYWORD_TABLE.len(), Category::COUNT);
    assert_eq!(STRONG_INDICATORS.len(), Category::COUNT);
}

#[test]
fn test_taxonomy_phrases_normalized() {
    let t = Taxonomy::build().unwrap();
    for entry in t.entries() {
        let k = &entry.keywords;
        for p in k.primary.iter().chain(&k.secondary).chain(&k.negative).chain(&entry.indicators) {
            assert!(!p.is_empty());
            assert_eq!(p.trim(), p);
            assert_eq!(&p.to_lowercase(), p);
        }
    }
}

#[test]
fn test_taxonomy_name_words() {
    let t = Taxonomy::build().unwrap();
    assert_eq!(t.entry(Category::SelfHelp).name, "self-help");
    assert_eq!(t.entry(Category::SelfHelp).name_words, vec!["self", "help"]);
    assert_eq!(t.entry(Category::ScienceFiction).name_words, vec!["science", "fiction"]);
}

#[test]
fn test_taxonomy_missing_category() {
    let err = Taxonomy::from_tables(&KEYWORD_TABLE[1..], STRONG_INDICATORS).unwrap_err();
    assert!(matches!(err, GenreError::InvalidTaxonomy(ref m) if m.contains("Fiction")));
}

#[test]
fn test_taxonomy_duplicate_category() {
    let mut table = KEYWORD_TABLE.to_vec();
    table.push(KEYWORD_TABLE[0]);
    assert!(Taxonomy::from_tables(&table, STRONG_INDICATORS).is_err());
}

#[test]
fn test_taxonomy_untrimmed_phrase() {
    let mut table = KEYWORD_TABLE.to_vec();
    table[3] = KeywordSpec {
        category: table[3].category,
        primary: &[" spaceship"],
        secondary: &[],
        negative: &[],
    };
    assert!(Taxonomy::from_tables(&table, STRONG_INDICATORS).is_err());
}

#[test]
fn test_taxonomy_empty_indicator() {
    let indicators = [IndicatorSpec { category: Category::Art, phrases: &[""] }];
    assert!(Taxonomy::from_tables(KEYWORD_TABLE, &indicators).is_err());
}

// ========== Overrides ==========

#[test]
fn test_override_technology() {
    let c = classifier();
    let text = assemble("SQL and Databases: A Practical Guide", "Learn queries, joins, and indexes");
    let r = c.overrides().try_override(&text).unwrap();
    assert_eq!(r.category, Category::Technology);
    assert_eq!(r.analysis_method, AnalysisMethod::KeywordOverride);
    assert!(approx(r.confidence, 0.9));
    assert_eq!(r.all_scores.len(), 1);
    assert_eq!(r.all_scores[&Category::Technology], 180.0);
}

#[test]
fn test_override_business() {
    let c = classifier();
    let text = assemble("The Millionaire Fastlane", "wealth and financial freedom");
    let r = c.overrides().try_override(&text).unwrap();
    assert_eq!(r.category, Category::Business);
    assert!(r.confidence >= 0.85);
}

#[test]
fn test_override_business_blocked_by_technology() {
    let vocab = Vocabulary::build().unwrap();
    let engine = OverrideEngine::standard(&vocab, &Default::default());
    let business = &engine.rules()[1];
    assert_eq!(business.name, "business");
    assert_eq!(business.evaluate("passive income for entrepreneurs who build databases"), None);
    assert_eq!(business.evaluate("passive income for entrepreneurs"), Some(Category::Business));
}

#[test]
fn test_override_business_needs_two_distinct_phrases() {
    let vocab = Vocabulary::build().unwrap();
    let engine = OverrideEngine::standard(&vocab, &Default::default());
    let business = &engine.rules()[1];
    assert_eq!(business.distinct_hits("startup after startup after startup"), 1);
    assert_eq!(business.evaluate("startup after startup after startup"), None);
    assert_eq!(business.evaluate("a startup founder chasing financial freedom"), Some(Category::Business));
}

#[test]
fn test_override_generic_words_do_not_fire() {
    let c = classifier();
    for text in [
        "a novel of wealth, love and tragedy",
        "investing in yourself",
        "strange habits",
        "a psychological study",
    ] {
        assert!(c.overrides().try_override(text).is_none(), "{text}");
    }
}

#[test]
fn test_override_blocked_by_fiction_markers() {
    let c = classifier();
    let text = "a suspense novel about a billionaire entrepreneur with a mindset for personal growth";
    assert!(c.overrides().try_override(text).is_none());
    // The technology rule has no fiction guard.
    let r = c.overrides().try_override("a thriller about a postgresql admin").unwrap();
    assert_eq!(r.category, Category::Technology);
}

#[test]
fn test_override_min_hits_configurable() {
    let vocab = Vocabulary::build().unwrap();
    let config = OverrideConfig { business_min_hits: 1, ..Default::default() };
    let engine = OverrideEngine::standard(&vocab, &config);
    assert_eq!(engine.rules()[1].evaluate("notes for entrepreneurs"), Some(Category::Business));
}

#[test]
fn test_override_technology_wins_over_business() {
    let c = classifier();
    let r = c.overrides().try_override("startup founders learning sql").unwrap();
    assert_eq!(r.category, Category::Technology);
}

#[test]
fn test_override_mindset_psychology() {
    let c = classifier();
    let r = c.overrides().try_override("the laws of human nature and emotional intelligence").unwrap();
    assert_eq!(r.category, Category::Psychology);
    assert_eq!(r.all_scores[&Category::Psychology], 160.0);
}

#[test]
fn test_override_mindset_self_help() {
    let c = classifier();
    let text = assemble("Atomic Habits", "a personal development system built on a growth mindset");
    let r = c.overrides().try_override(&text).unwrap();
    assert_eq!(r.category, Category::SelfHelp);
}

#[test]
fn test_override_none() {
    let c = classifier();
    assert!(c.overrides().try_override("the hobbit there and back again").is_none());
    assert!(c.overrides().try_override("").is_none());
}

#[test]
fn test_override_rule_order() {
    let c = classifier();
    let names: Vec<&str> = c.overrides().rules().iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["technology", "business", "mindset"]);
}

// ========== Scorer ==========

#[test]
fn test_score_cooking_title() {
    let c = classifier();
    let b = c.score("How to Cook Italian Food", "recipes for pasta and risotto");
    // 3 primary (45) + 3 secondary (24) + title indicator (30)
    assert_eq!(b.get(Category::Cooking), 99.0);
    assert_eq!(b.top().0, Category::Cooking);
    assert_eq!(b.get(Category::Fiction), 0.0);
}

#[test]
fn test_score_name_bonuses() {
    let c = classifier();
    let b = c.score("Poetry", "");
    // primary (15) + name in title (50) + name word (5) + indicator (30)
    assert_eq!(b.get(Category::Poetry), 100.0);
}

#[test]
fn test_score_name_in_description() {
    let c = classifier();
    let b = c.score("Collected Works", "a poetry anthology");
    // primary (15) + name in description (25) + name word (5)
    assert_eq!(b.get(Category::Poetry), 45.0);
}

#[test]
fn test_score_negative_keywords_reduce() {
    let c = classifier();
    let without = c.score("A Mystery", "detective murder clues");
    let with = c.score("A Mystery", "detective murder clues recipe programming");
    assert!(with.get(Category::Mystery) < without.get(Category::Mystery));
}

#[test]
fn test_negative_phrase_hides_embedded_keyword() {
    let c = classifier();
    let plain = c.score("Untitled", "a journey of discovery");
    let with = c.score("Untitled", "a journey of discovery and time travel");
    assert!(with.get(Category::Travel) <= plain.get(Category::Travel));
    let with = c.score("Untitled", "curriculum ideas. machine learning");
    let plain = c.score("Untitled", "curriculum ideas");
    assert!(with.get(Category::Education) <= plain.get(Category::Education));
}

#[test]
fn test_score_never_negative() {
    let c = classifier();
    let b = c.score("Guide", "textbook handbook manual how to guide");
    for (_, s) in b.iter() {
        assert!(s >= 0.0);
    }
    assert_eq!(b.get(Category::Fiction), 0.0);
}

#[test]
fn test_score_empty_input() {
    let c = classifier();
    assert!(c.score("", "").is_empty());
}

#[test]
fn test_adjustment_technology_flag() {
    let c = classifier();
    let mut b = board(&[(Category::Travel, 100.0)]);
    c.scorer().apply_adjustments(&mut b, AdjustmentFlags { technology: true, ..Default::default() });
    assert_eq!(b.get(Category::Technology), 60.0);
    assert_eq!(b.get(Category::Travel), 20.0);
}

#[test]
fn test_adjustment_business_with_technology() {
    let c = classifier();
    let mut b = ScoreBoard::new();
    let flags = AdjustmentFlags { technology: true, business: true, ..Default::default() };
    c.scorer().apply_adjustments(&mut b, flags);
    assert_eq!(b.get(Category::Business), 60.0);
    assert_eq!(b.get(Category::Technology), 40.0);
}

#[test]
fn test_adjustment_mindset_guide() {
    let c = classifier();
    let mut b = board(&[(Category::Travel, 50.0)]);
    let flags = AdjustmentFlags { mindset: true, guide_style: true, ..Default::default() };
    c.scorer().apply_adjustments(&mut b, flags);
    assert_eq!(b.get(Category::Psychology), 55.0);
    assert_eq!(b.get(Category::SelfHelp), 25.0);
    assert_eq!(b.get(Category::Travel), 0.0);
}

#[test]
fn test_adjustment_mindset_without_guide() {
    let c = classifier();
    let mut b = ScoreBoard::new();
    c.scorer().apply_adjustments(&mut b, AdjustmentFlags { mindset: true, ..Default::default() });
    assert_eq!(b.get(Category::SelfHelp), 0.0);
}

#[test]
fn test_adjustment_flags_detect() {
    let vocab = Vocabulary::build().unwrap();
    let f = AdjustmentFlags::detect(&vocab, "a practical guide to money and your mind");
    assert!(f.business);
    assert!(f.mindset);
    assert!(f.guide_style);
    assert!(!f.technology);
}

#[test]
fn test_mindset_suppresses_travel_in_scoring() {
    let c = classifier();
    let b = c.score("Journey of the Mind", "an adventure in thinking");
    // journey + adventure would give Travel 30; the mindset flag removes it.
    assert_eq!(b.get(Category::Travel), 0.0);
    assert!(b.get(Category::Psychology) > 0.0);
}

#[test]
fn test_fiction_markers_skip_business_and_mindset_adjustments() {
    let c = classifier();
    let mut b = ScoreBoard::new();
    let flags = AdjustmentFlags { business: true, mindset: true, fiction: true, ..Default::default() };
    c.scorer().apply_adjustments(&mut b, flags);
    assert_eq!(b.get(Category::Business), 0.0);
    assert_eq!(b.get(Category::Psychology), 0.0);
}

#[test]
fn test_psychological_thriller_scores_as_thriller() {
    let c = classifier();
    let b = c.score("The Silent Patient", "a psychological thriller about a detective on the run");
    assert_eq!(b.top().0, Category::Thriller);
    assert!(b.get(Category::Psychology) < b.get(Category::Thriller));
}

// ========== Calibrator ==========

#[test]
fn test_calibrate_empty_board() {
    let (c, conf) = calibrate(&ScoreBoard::new(), &CalibrationConfig::default());
    assert_eq!(c, Category::Fiction);
    assert_eq!(conf, 0.1);
}

#[test]
fn test_calibrate_clear_winner() {
    let (c, conf) = calibrate(&board(&[(Category::Cooking, 100.0)]), &CalibrationConfig::default());
    assert_eq!(c, Category::Cooking);
    // 0.5 base, +0.25 gap, +0.10 strength
    assert!(approx(conf, 0.85));
}

#[test]
fn test_calibrate_weak_close_scores() {
    let b = board(&[(Category::Art, 30.0), (Category::Music, 25.0)]);
    let (c, conf) = calibrate(&b, &CalibrationConfig::default());
    assert_eq!(c, Category::Art);
    assert_eq!(conf, 0.1);
}

#[test]
fn test_calibrate_near_tie_penalty() {
    let b = board(&[(Category::History, 200.0), (Category::Biography, 150.0)]);
    let (c, conf) = calibrate(&b, &CalibrationConfig::default());
    assert_eq!(c, Category::History);
    // 0.8 base, capped at 0.98, minus 0.15 for the near tie
    assert!(approx(conf, 0.83));
}

#[test]
fn test_calibrate_medium_gap() {
    let b = board(&[(Category::Health, 60.0), (Category::Cooking, 35.0)]);
    let (_, conf) = calibrate(&b, &CalibrationConfig::default());
    // 0.3 base, +0.15 gap, +0.05 strength, 35 < 36 so no tie penalty
    assert!(approx(conf, 0.5));
}

#[test]
fn test_calibrate_tie_break_declaration_order() {
    let b = board(&[(Category::Travel, 40.0), (Category::Mystery, 40.0)]);
    let (c, _) = calibrate(&b, &CalibrationConfig::default());
    assert_eq!(c, Category::Mystery);
}

#[test]
fn test_calibrate_bounds() {
    let config = CalibrationConfig::default();
    for top in [1.0, 9.0, 20.0, 51.0, 81.0, 121.0, 400.0, 10_000.0] {
        for ratio in [0.0, 0.3, 0.61, 0.95, 1.0] {
            let b = board(&[(Category::Science, top), (Category::Philosophy, top * ratio), (Category::Art, top * ratio / 2.0)]);
            let (_, conf) = calibrate(&b, &config);
            assert!((0.1..=0.98).contains(&conf), "top={top} ratio={ratio} conf={conf}");
        }
    }
}

#[test]
fn test_calibrate_uses_configured_tiers() {
    let config = CalibrationConfig { magnitude_tiers: Vec::new(), ..Default::default() };
    let (_, conf) = calibrate(&board(&[(Category::Cooking, 100.0)]), &config);
    // 0.5 base, +0.25 gap, no strength bonus
    assert!(approx(conf, 0.75));

    let config = CalibrationConfig { wide_gap: 200.0, medium_gap: 150.0, ..Default::default() };
    let (_, conf) = calibrate(&board(&[(Category::Cooking, 100.0)]), &config);
    // 0.5 base, gap 100 is neither wide nor narrow, +0.10 strength
    assert!(approx(conf, 0.6));
}

// ========== Fallback ==========

fn fallback_config() -> FallbackConfig {
    FallbackConfig::default()
}

#[test]
fn test_fallback_cooking_excludes_guide() {
    let config = fallback_config();
    let fb = PatternFallback::new(FALLBACK_RULES, &config);
    let m = fb.fallback("How to Cook Italian Food", "recipes for pasta and risotto").unwrap();
    assert_eq!(m.category, Category::Cooking);
    assert_eq!(m.rule, "cookbook");
    // two phrases matched: base 0.7 + 0.1
    assert!(approx(m.confidence, 0.8));
}

#[test]
fn test_fallback_bake() {
    let config = fallback_config();
    let fb = PatternFallback::new(FALLBACK_RULES, &config);
    let m = fb.fallback("How to Bake Bread", "").unwrap();
    assert_eq!(m.category, Category::Cooking);
    assert!(approx(m.confidence, 0.7));
}

#[test]
fn test_fallback_guide_self_help() {
    let config = fallback_config();
    let fb = PatternFallback::new(FALLBACK_RULES, &config);
    let m = fb.fallback("Tips for Life", "").unwrap();
    assert_eq!(m.category, Category::SelfHelp);
    assert_eq!(m.rule, "guide");
}

#[test]
fn test_fallback_guide_excluded_for_programming() {
    let config = fallback_config();
    let fb = PatternFallback::new(FALLBACK_RULES, &config);
    let m = fb.fallback("A Guide to Coding", "").unwrap();
    assert_eq!(m.category, Category::Technology);
}

#[test]
fn test_fallback_first_match_wins() {
    let config = fallback_config();
    let fb = PatternFallback::new(FALLBACK_RULES, &config);
    let m = fb.fallback("The Philosophy of Business", "").unwrap();
    assert_eq!(m.category, Category::Philosophy);
    // base 0.7 + 0.15 for the category name in the title
    assert!(approx(m.confidence, 0.85));
}

#[test]
fn test_fallback_database_interview() {
    let config = fallback_config();
    let fb = PatternFallback::new(FALLBACK_RULES, &config);
    let m = fb.fallback("Database Interview Questions", "").unwrap();
    assert_eq!(m.category, Category::Technology);
    assert_eq!(m.rule, "database_interview");
    assert!(approx(m.confidence, 0.8));
}

#[test]
fn test_fallback_confidence_capped() {
    let config = fallback_config();
    let fb = PatternFallback::new(FALLBACK_RULES, &config);
    let m = fb.fallback("Cooking: The Cookbook", "recipes recipe kitchen meals baking").unwrap();
    assert_eq!(m.category, Category::Cooking);
    assert!(approx(m.confidence, 0.98));
}

#[test]
fn test_fallback_no_match() {
    let config = fallback_config();
    let fb = PatternFallback::new(FALLBACK_RULES, &config);
    assert!(fb.fallback("Untitled Notes", "").is_none());
    assert!(fb.fallback("", "").is_none());
}

#[test]
fn test_fallback_rule_requires_every_group() {
    let rule = FallbackRule {
        name: "both",
        category: Category::Technology,
        require: &[&["database"], &["interview"]],
        exclude: &[],
    };
    assert_eq!(rule.evaluate("database design"), None);
    assert_eq!(rule.evaluate("database interview"), Some(2));
}

#[test]
fn test_fallback_rules_cover_many_categories() {
    let mut categories: Vec<Category> = FALLBACK_RULES.iter().map(|r| r.category).collect();
    categories.sort();
    categories.dedup();
    assert!(categories.len() >= 20);
}

// ========== Recommendations ==========

#[test]
fn test_recommendations_single() {
    let c = classifier();
    assert_eq!(
        c.category_recommendations(&[Category::Cooking]),
        vec![Category::Health, Category::Travel, Category::Art, Category::Children]
    );
}

#[test]
fn test_recommendations_union_dedup_truncate() {
    let c = classifier();
    let r = c.category_recommendations(&[Category::Fiction, Category::Mystery]);
    assert_eq!(
        r,
        vec![
            Category::Romance,
            Category::HistoricalFiction,
            Category::Fantasy,
            Category::ScienceFiction,
            Category::Thriller,
            Category::Drama,
            Category::Poetry,
            Category::TrueCrime,
        ]
    );
}

#[test]
fn test_recommendations_closure() {
    let c = classifier();
    let graph = c.recommendation_graph();
    for cat in Category::ALL {
        let r = c.category_recommendations(&[cat]);
        assert!(r.len() <= 8);
        assert!(r.iter().all(|x| graph.related(cat).contains(x)));
        let mut dedup = r.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), r.len());
    }
}

#[test]
fn test_recommendations_empty_selection() {
    let c = classifier();
    assert!(c.category_recommendations(&[]).is_empty());
}

#[test]
fn test_recommendations_limit() {
    let graph = RecommendationGraph::build(3).unwrap();
    assert_eq!(graph.recommendations_for(&[Category::Fiction]).len(), 3);
}

#[test]
fn test_recommendation_table_missing_entry() {
    assert!(RecommendationGraph::from_table(&RECOMMENDATION_TABLE[1..], 8).is_err());
}

#[test]
fn test_recommendation_table_self_reference() {
    const ART_ONLY: &[Category] = &[Category::Art];
    let table = [(Category::Art, ART_ONLY)];
    assert!(RecommendationGraph::from_table(&table, 8).is_err());
}

#[test]
fn test_popular_categories() {
    let popular = popular_categories();
    assert_eq!(popular[0], Category::Fiction);
    assert!(popular.contains(&Category::Technology));
    assert_eq!(popular, classifier().popular_categories());
}

// ========== Pipeline ==========

#[test]
fn test_pipeline_fallback_used_when_unsure() {
    let c = classifier();
    let r = c.detect_category("Tips for Life", "", None);
    assert_eq!(r.category, Category::SelfHelp);
    assert_eq!(r.analysis_method, AnalysisMethod::AdvancedPattern);
    assert!(approx(r.confidence, 0.7));
    assert_eq!(r.all_scores.len(), Category::COUNT);
}

#[test]
fn test_pipeline_document_text() {
    let c = classifier();
    let doc = "A collection of poems about the sea.\n\nThese poems and verses celebrate the poet's love of the ocean.";
    let r = c.detect_category("Collected Notes", "", Some(doc));
    assert_eq!(r.category, Category::Poetry);
    assert_eq!(r.analysis_method, AnalysisMethod::PdfAnalysis);
    assert!(r.confidence >= 0.5);
}

#[test]
fn test_pipeline_blank_document_ignored() {
    let c = classifier();
    let r = c.detect_category("Untitled Notes", "", Some("   \n  "));
    assert_eq!(r.analysis_method, AnalysisMethod::TitleDescription);
}

#[test]
fn test_pipeline_batch_order() {
    let c = classifier();
    let inputs = vec![
        BookInput::new("The Millionaire Fastlane", "wealth and financial freedom"),
        BookInput::new("Untitled Notes", ""),
        BookInput::new("SQL and Databases: A Practical Guide", "Learn queries, joins, and indexes"),
    ];
    let out = c.classify_batch(&inputs);
    let cats: Vec<Category> = out.iter().map(|r| r.category).collect();
    assert_eq!(cats, vec![Category::Business, Category::Fiction, Category::Technology]);
}

#[test]
fn test_classifier_rejects_invalid_config() {
    let mut config = default_classifier_config();
    config.fallback.threshold = 2.0;
    assert!(matches!(Classifier::new(config), Err(GenreError::InvalidConfig(_))));
}

#[test]
fn test_shared_classifier_builds() {
    assert!(CLASSIFIER.is_ok());
}
