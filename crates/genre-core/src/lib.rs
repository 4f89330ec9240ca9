//! Core types shared by the book category classifier crates.

pub mod category;
pub mod config;
pub mod error;
pub mod types;

pub use category::Category;
pub use config::ClassifierConfig;
pub use error::{GenreError, Result};
pub use types::{AnalysisMethod, BookInput, ClassificationResult, ScoreBoard};
