//! Book category classifier: override rules, weighted keyword scoring,
//! confidence calibration and a phrase-pattern fallback over a fixed
//! taxonomy of 31 categories.

pub mod calibrator;
pub mod classifier;
pub mod config;
pub mod fallback;
pub mod matching;
pub mod overrides;
pub mod recommend;
pub mod scorer;
pub mod taxonomy;
pub mod vocabulary;

pub use calibrator::calibrate;
pub use classifier::Classifier;
pub use config::{default_classifier_config, CLASSIFIER};
pub use genre_core::{AnalysisMethod, BookInput, Category, ClassificationResult, ClassifierConfig, ScoreBoard};
pub use recommend::POPULAR_CATEGORIES;

/// Classify a book with the shared classifier.
///
/// Never fails: if the shared classifier could not be built, the error is
/// logged and a `Fiction` / 0.1 / `error` result is returned.
pub fn detect_category(
    title: &str,
    description: &str,
    document_text: Option<&str>,
) -> ClassificationResult {
    match &*CLASSIFIER {
        Ok(classifier) => classifier.detect_category(title, description, document_text),
        Err(e) => {
            tracing::error!(error = %e, title, "classifier unavailable, returning degraded result");
            ClassificationResult::degraded()
        }
    }
}

/// Curated categories for onboarding screens.
pub fn popular_categories() -> Vec<Category> {
    POPULAR_CATEGORIES.to_vec()
}

/// Up to eight categories related to the user's selection.
pub fn category_recommendations(selected: &[Category]) -> Vec<Category> {
    match &*CLASSIFIER {
        Ok(classifier) => classifier.category_recommendations(selected),
        Err(e) => {
            tracing::error!(error = %e, "classifier unavailable, no recommendations");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests;
