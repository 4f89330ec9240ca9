//! Plain text source.

use anyhow::{Context, Result};
use crate::traits::DocumentTextSource;

/// Treats the document as UTF-8 text.
pub struct PlainTextSource;

impl PlainTextSource {
    pub fn new() -> Self { Self }
}

impl DocumentTextSource for PlainTextSource {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes).context("document is not valid UTF-8")?;
        Ok(text.to_string())
    }

    fn supported_extensions(&self) -> Vec<String> {
        vec![".txt".into(), ".text".into()]
    }
}

impl Default for PlainTextSource {
    fn default() -> Self { Self::new() }
}
