//! The classification pipeline: override -> score -> calibrate -> fallback.

use crate::calibrator::calibrate;
use crate::fallback::{PatternFallback, FALLBACK_RULES};
use crate::matching::assemble;
use crate::overrides::OverrideEngine;
use crate::recommend::{RecommendationGraph, POPULAR_CATEGORIES};
use crate::scorer::WeightedScorer;
use crate::taxonomy::Taxonomy;
use crate::vocabulary::Vocabulary;
use genre_core::{
    AnalysisMethod, BookInput, Category, ClassificationResult, ClassifierConfig, Result, ScoreBoard,
};
use genre_document::normalize_excerpt;

/// A fully built classifier. Immutable after construction; share freely
/// across threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
    taxonomy: Taxonomy,
    vocab: Vocabulary,
    overrides: OverrideEngine,
    graph: RecommendationGraph,
}

impl Classifier {
    /// Validate `config` and build all tables.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        let taxonomy = Taxonomy::build()?;
        let vocab = Vocabulary::build()?;
        let overrides = OverrideEngine::standard(&vocab, &config.overrides);
        let graph = RecommendationGraph::build(config.max_recommendations)?;
        tracing::debug!(phrases = taxonomy.phrase_count(), "classifier built");
        Ok(Self { config, taxonomy, vocab, overrides, graph })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn overrides(&self) -> &OverrideEngine {
        &self.overrides
    }

    pub fn scorer(&self) -> WeightedScorer<'_> {
        WeightedScorer::new(&self.taxonomy, &self.vocab, &self.config.weights, &self.config.adjustments)
    }

    pub fn pattern_fallback(&self) -> PatternFallback<'_> {
        PatternFallback::new(FALLBACK_RULES, &self.config.fallback)
    }

    /// Score a title and description without overrides or fallback.
    pub fn score(&self, title: &str, description: &str) -> ScoreBoard {
        self.scorer().score(title, description)
    }

    /// Classify one book.
    pub fn detect_category(
        &self,
        title: &str,
        description: &str,
        document_text: Option<&str>,
    ) -> ClassificationResult {
        let excerpt = document_text
            .and_then(|t| normalize_excerpt(t, self.config.document_excerpt_chars));
        let description = match &excerpt {
            Some(e) if description.trim().is_empty() => e.clone(),
            Some(e) => format!("{} {}", description.trim(), e),
            None => description.to_string(),
        };
        let method = if excerpt.is_some() {
            AnalysisMethod::PdfAnalysis
        } else {
            AnalysisMethod::TitleDescription
        };

        let text = assemble(title, &description);
        if let Some(result) = self.overrides.try_override(&text) {
            return result;
        }

        let board = self.score(title, &description);
        let (category, confidence) = calibrate(&board, &self.config.calibration);
        tracing::debug!(%category, confidence, method = %method, "scored");

        if confidence < self.config.fallback.threshold {
            if let Some(m) = self.pattern_fallback().fallback(title, &description) {
                return ClassificationResult::new(
                    m.category,
                    m.confidence,
                    board.to_map(),
                    AnalysisMethod::AdvancedPattern,
                );
            }
        }

        ClassificationResult::new(category, confidence, board.to_map(), method)
    }

    /// Classify a [`BookInput`].
    pub fn classify(&self, input: &BookInput) -> ClassificationResult {
        self.detect_category(&input.title, input.description_or_empty(), input.document_text.as_deref())
    }

    /// Classify each input independently, preserving order.
    pub fn classify_batch(&self, inputs: &[BookInput]) -> Vec<ClassificationResult> {
        inputs.iter().map(|i| self.classify(i)).collect()
    }

    pub fn popular_categories(&self) -> Vec<Category> {
        POPULAR_CATEGORIES.to_vec()
    }

    pub fn category_recommendations(&self, selected: &[Category]) -> Vec<Category> {
        self.graph.recommendations_for(selected)
    }

    pub fn recommendation_graph(&self) -> &RecommendationGraph {
        &self.graph
    }
}
