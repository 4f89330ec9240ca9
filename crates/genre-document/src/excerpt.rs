//! Normalization of extracted document text.

use crate::traits::DocumentTextSource;

/// Collapse whitespace, drop control characters and keep at most
/// `max_chars` characters. Blank input yields `None`.
pub fn normalize_excerpt(text: &str, max_chars: usize) -> Option<String> {
    let cleaned: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() || max_chars == 0 {
        return None;
    }
    let excerpt = match collapsed.char_indices().nth(max_chars) {
        Some((end, _)) => collapsed[..end].trim_end().to_string(),
        None => collapsed,
    };
    Some(excerpt)
}

/// Run a source over `bytes` and normalize the result. Extraction failures
/// are logged and treated as "no document text".
pub fn excerpt_from_source(
    source: &dyn DocumentTextSource,
    bytes: &[u8],
    max_chars: usize,
) -> Option<String> {
    match source.extract_text(bytes) {
        Ok(text) => normalize_excerpt(&text, max_chars),
        Err(e) => {
            tracing::warn!(error = %e, "document text extraction failed, classifying without it");
            None
        }
    }
}
