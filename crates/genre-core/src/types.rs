use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// How a classification result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    TitleDescription,
    PdfAnalysis,
    AdvancedPattern,
    KeywordOverride,
    Manual,
    Error,
}

impl AnalysisMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMethod::TitleDescription => "title_description",
            AnalysisMethod::PdfAnalysis => "pdf_analysis",
            AnalysisMethod::AdvancedPattern => "advanced_pattern",
            AnalysisMethod::KeywordOverride => "keyword_override",
            AnalysisMethod::Manual => "manual",
            AnalysisMethod::Error => "error",
        }
    }
}

impl fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A book to classify.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub document_text: Option<String>,
}

impl BookInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            document_text: None,
        }
    }

    pub fn with_document_text(mut self, text: impl Into<String>) -> Self {
        self.document_text = Some(text.into());
        self
    }

    /// Description, or the empty string when absent.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Accumulated score per category. Scores never go below zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBoard {
    scores: [f64; Category::COUNT],
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self { scores: [0.0; Category::COUNT] }
    }

    pub fn get(&self, category: Category) -> f64 {
        self.scores[category.index()]
    }

    /// Set a score, clamping at zero.
    pub fn set(&mut self, category: Category, score: f64) {
        self.scores[category.index()] = score.max(0.0);
    }

    /// Add a (possibly negative) delta, clamping at zero.
    pub fn add(&mut self, category: Category, delta: f64) {
        let current = self.get(category);
        self.set(category, current + delta);
    }

    /// Subtract at most `limit` from a category's score.
    pub fn suppress(&mut self, category: Category, limit: f64) {
        let current = self.get(category);
        self.set(category, current - current.min(limit));
    }

    /// Categories sorted by score descending; ties keep declaration order.
    pub fn ranked(&self) -> Vec<(Category, f64)> {
        let mut ranked: Vec<(Category, f64)> =
            Category::ALL.iter().map(|c| (*c, self.get(*c))).collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }

    /// Highest scoring category and its score.
    pub fn top(&self) -> (Category, f64) {
        self.ranked()[0]
    }

    pub fn is_empty(&self) -> bool {
        self.scores.iter().all(|s| *s == 0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    pub fn to_map(&self) -> BTreeMap<Category, f64> {
        self.iter().collect()
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of classifying one book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: Category,
    pub confidence: f64,
    pub all_scores: BTreeMap<Category, f64>,
    pub analysis_method: AnalysisMethod,
}

impl ClassificationResult {
    pub const MIN_CONFIDENCE: f64 = 0.1;
    pub const MAX_CONFIDENCE: f64 = 0.98;

    pub fn new(
        category: Category,
        confidence: f64,
        all_scores: BTreeMap<Category, f64>,
        analysis_method: AnalysisMethod,
    ) -> Self {
        Self { category, confidence, all_scores, analysis_method }
    }

    /// The result reported when classification could not run at all.
    pub fn degraded() -> Self {
        Self::new(
            Category::Fiction,
            Self::MIN_CONFIDENCE,
            BTreeMap::new(),
            AnalysisMethod::Error,
        )
    }

    /// A category chosen by the user rather than detected.
    pub fn manual(category: Category) -> Self {
        let mut all_scores = BTreeMap::new();
        all_scores.insert(category, 100.0);
        Self::new(category, Self::MAX_CONFIDENCE, all_scores, AnalysisMethod::Manual)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
