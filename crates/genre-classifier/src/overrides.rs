//! Override rules: high-confidence short circuits evaluated before scoring.

use crate::vocabulary::Vocabulary;
use genre_core::config::OverrideConfig;
use genre_core::{AnalysisMethod, Category, ClassificationResult};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// What an override rule classifies as.
#[derive(Debug, Clone)]
pub enum OverrideOutcome {
    Fixed(Category),
    /// `then` when `when` matches the text, `otherwise` when it does not.
    Split { when: Regex, then: Category, otherwise: Category },
}

impl OverrideOutcome {
    fn resolve(&self, text: &str) -> Category {
        match self {
            OverrideOutcome::Fixed(c) => *c,
            OverrideOutcome::Split { when, then, otherwise } => {
                if when.is_match(text) { *then } else { *otherwise }
            }
        }
    }
}

/// One override rule record.
#[derive(Debug, Clone)]
pub struct OverrideRule {
    pub name: &'static str,
    pub trigger: Regex,
    /// Distinct trigger phrases required before the rule fires.
    pub min_hits: usize,
    /// The rule is skipped when any of these match.
    pub blocked_by: Vec<Regex>,
    pub outcome: OverrideOutcome,
    pub confidence: f64,
    pub score: f64,
}

impl OverrideRule {
    /// Category this rule yields for `text`, if it fires.
    pub fn evaluate(&self, text: &str) -> Option<Category> {
        if self.distinct_hits(text) < self.min_hits {
            return None;
        }
        if self.blocked_by.iter().any(|b| b.is_match(text)) {
            return None;
        }
        Some(self.outcome.resolve(text))
    }

    /// Number of different trigger phrases present in `text`.
    pub fn distinct_hits(&self, text: &str) -> usize {
        self.trigger
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Ordered override rules; the first rule that fires wins.
#[derive(Debug, Clone)]
pub struct OverrideEngine {
    rules: Vec<OverrideRule>,
}

impl OverrideEngine {
    pub fn new(rules: Vec<OverrideRule>) -> Self {
        Self { rules }
    }

    /// Technology, then business, then psychology/self-help. Technology
    /// fires on any single hit; the other two need `min_hits` distinct
    /// phrases and stand down for technology text or narrative fiction.
    pub fn standard(vocab: &Vocabulary, config: &OverrideConfig) -> Self {
        Self::new(vec![
            OverrideRule {
                name: "technology",
                trigger: vocab.strong_technology.clone(),
                min_hits: 1,
                blocked_by: Vec::new(),
                outcome: OverrideOutcome::Fixed(Category::Technology),
                confidence: config.technology_confidence,
                score: config.technology_score,
            },
            OverrideRule {
                name: "business",
                trigger: vocab.strong_business.clone(),
                min_hits: config.business_min_hits,
                blocked_by: vec![vocab.strong_technology.clone(), vocab.fiction_markers.clone()],
                outcome: OverrideOutcome::Fixed(Category::Business),
                confidence: config.business_confidence,
                score: config.business_score,
            },
            OverrideRule {
                name: "mindset",
                trigger: vocab.strong_mindset.clone(),
                min_hits: config.mindset_min_hits,
                blocked_by: vec![vocab.strong_technology.clone(), vocab.fiction_markers.clone()],
                outcome: OverrideOutcome::Split {
                    when: vocab.mind_science.clone(),
                    then: Category::Psychology,
                    otherwise: Category::SelfHelp,
                },
                confidence: config.mindset_confidence,
                score: config.mindset_score,
            },
        ])
    }

    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }

    /// Run the rules over the assembled lowercase text.
    pub fn try_override(&self, text: &str) -> Option<ClassificationResult> {
        self.rules.iter().find_map(|rule| {
            let category = rule.evaluate(text)?;
            tracing::debug!(rule = rule.name, %category, "override rule fired");
            let mut all_scores = BTreeMap::new();
            all_scores.insert(category, rule.score);
            Some(ClassificationResult::new(
                category,
                rule.confidence.clamp(
                    ClassificationResult::MIN_CONFIDENCE,
                    ClassificationResult::MAX_CONFIDENCE,
                ),
                all_scores,
                AnalysisMethod::KeywordOverride,
            ))
        })
    }
}
