use anyhow::Result;

/// Something that can turn a document into plain text, e.g. a PDF extractor.
///
/// Retry and timeout policy belong to the implementor; the classifier only
/// ever sees the returned text.
pub trait DocumentTextSource: Send + Sync {
    /// Extract text from in-memory document bytes.
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;

    /// Extract text from a file path.
    fn extract_file(&self, path: &str) -> Result<String> {
        let bytes = std::fs::read(path)?;
        self.extract_text(&bytes)
    }

    /// Supported file extensions, with the leading dot.
    fn supported_extensions(&self) -> Vec<String>;

    /// Check if a file can be extracted.
    fn can_extract(&self, path: &str) -> bool {
        let ext = std::path::Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let ext_with_dot = format!(".{}", ext);
        self.supported_extensions().contains(&ext_with_dot)
    }
}
