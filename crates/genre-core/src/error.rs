use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenreError {
    #[error("Invalid taxonomy: {0}")]
    InvalidTaxonomy(String),
    #[error("Unknown category: {label}")]
    UnknownCategory { label: String },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Invalid pattern for rule {rule}: {message}")]
    InvalidPattern { rule: String, message: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GenreError>;
