//! Default classifier configuration and the shared instance built from it.

use crate::classifier::Classifier;
use genre_core::{ClassifierConfig, Result};
use std::sync::LazyLock;

/// Default classifier configuration.
pub fn default_classifier_config() -> ClassifierConfig {
    ClassifierConfig::default()
}

/// The shared classifier, built once from the defaults and the compiled-in
/// taxonomy. Holds the build error if the tables are malformed.
pub static CLASSIFIER: LazyLock<Result<Classifier>> =
    LazyLock::new(|| Classifier::new(default_classifier_config()));
