//! Weighted keyword scorer with post-hoc cross-category adjustments.

use crate::matching::{assemble, contains_whole_word, count_whole_word, mask_whole_words};
use crate::taxonomy::{CategoryEntry, Taxonomy};
use crate::vocabulary::Vocabulary;
use genre_core::config::{AdjustmentConfig, KeywordWeights};
use genre_core::{Category, ScoreBoard};

/// Global flags derived once from the whole text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjustmentFlags {
    pub technology: bool,
    pub business: bool,
    pub mindset: bool,
    pub guide_style: bool,
    /// Narrative-fiction markers present; the business and mindset
    /// corrections are skipped.
    pub fiction: bool,
}

impl AdjustmentFlags {
    pub fn detect(vocab: &Vocabulary, text: &str) -> Self {
        Self {
            technology: vocab.technology_flag.is_match(text),
            business: vocab.business_flag.is_match(text),
            mindset: vocab.mindset_flag.is_match(text),
            guide_style: vocab.guide_style.is_match(text),
            fiction: vocab.fiction_markers.is_match(text),
        }
    }
}

pub struct WeightedScorer<'a> {
    taxonomy: &'a Taxonomy,
    vocab: &'a Vocabulary,
    weights: &'a KeywordWeights,
    adjustments: &'a AdjustmentConfig,
}

impl<'a> WeightedScorer<'a> {
    pub fn new(
        taxonomy: &'a Taxonomy,
        vocab: &'a Vocabulary,
        weights: &'a KeywordWeights,
        adjustments: &'a AdjustmentConfig,
    ) -> Self {
        Self { taxonomy, vocab, weights, adjustments }
    }

    /// Score every category for a title and description.
    pub fn score(&self, title: &str, description: &str) -> ScoreBoard {
        let title_lc = title.trim().to_lowercase();
        let description_lc = description.trim().to_lowercase();
        let text = assemble(title, description);

        let mut board = ScoreBoard::new();
        for entry in self.taxonomy.entries() {
            board.set(entry.category, self.score_entry(entry, &title_lc, &description_lc, &text));
        }

        let flags = AdjustmentFlags::detect(self.vocab, &text);
        self.apply_adjustments(&mut board, flags);
        board
    }

    /// Keyword pass for one category, clamped at zero. Positive terms are
    /// counted with the category's negative phrases masked out, so "time
    /// travel" never counts as "travel".
    pub fn score_entry(&self, entry: &CategoryEntry, title: &str, description: &str, text: &str) -> f64 {
        let w = self.weights;
        let negatives = &entry.keywords.negative;
        let title = mask_whole_words(title, negatives);
        let description = mask_whole_words(description, negatives);
        let masked = mask_whole_words(text, negatives);
        let count = |haystack: &str, phrases: &[String]| -> f64 {
            phrases.iter().map(|p| count_whole_word(haystack, p)).sum::<usize>() as f64
        };

        let mut score = count(&masked, &entry.keywords.primary) * w.primary
            + count(&masked, &entry.keywords.secondary) * w.secondary
            - count(text, negatives) * w.negative;

        if contains_whole_word(&title, &entry.name) {
            score += w.name_in_title;
        }
        if contains_whole_word(&description, &entry.name) {
            score += w.name_in_description;
        }
        for word in entry.name_words.iter().filter(|word| word.chars().count() > w.name_word_min_len) {
            if contains_whole_word(&masked, word) {
                score += w.name_word;
            }
        }
        if entry.indicators.iter().any(|p| contains_whole_word(&title, p)) {
            score += w.strong_indicator_in_title;
        }

        score.max(0.0)
    }

    /// Cross-category corrections. Must run after the keyword pass.
    pub fn apply_adjustments(&self, board: &mut ScoreBoard, flags: AdjustmentFlags) {
        let a = self.adjustments;
        if flags.technology {
            board.add(Category::Technology, a.technology_boost);
            board.suppress(Category::Travel, a.technology_travel_penalty);
        }
        if flags.business && !flags.fiction {
            board.add(Category::Business, a.business_boost);
            if flags.technology {
                board.add(Category::Technology, -a.business_technology_penalty);
            }
        }
        if flags.mindset && !flags.fiction {
            board.add(Category::Psychology, a.psychology_boost);
            if flags.guide_style {
                board.add(Category::SelfHelp, a.psychology_self_help_boost);
            }
            board.suppress(Category::Travel, a.psychology_travel_penalty);
        }
        tracing::debug!(?flags, "applied cross-category adjustments");
    }
}
