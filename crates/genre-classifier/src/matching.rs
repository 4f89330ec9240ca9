//! Case-insensitive whole-word phrase matching.
//!
//! Callers lowercase the haystack once; phrases in the taxonomy are already
//! lowercase. A match counts only when the characters on either side of it
//! are not alphanumeric, so `"cook"` does not match inside `"cookbook"`.

fn is_boundary(c: Option<char>) -> bool {
    c.map_or(true, |c| !c.is_alphanumeric())
}

/// Number of whole-word occurrences of `phrase` in `haystack`.
pub fn count_whole_word(haystack: &str, phrase: &str) -> usize {
    if phrase.is_empty() {
        return 0;
    }
    haystack
        .match_indices(phrase)
        .filter(|(start, _)| {
            let before = haystack[..*start].chars().next_back();
            let after = haystack[start + phrase.len()..].chars().next();
            is_boundary(before) && is_boundary(after)
        })
        .count()
}

pub fn contains_whole_word(haystack: &str, phrase: &str) -> bool {
    count_whole_word(haystack, phrase) > 0
}

/// `haystack` with every whole-word occurrence of `phrases` blanked out
/// with spaces. Byte offsets are preserved.
pub fn mask_whole_words(haystack: &str, phrases: &[String]) -> String {
    let mut masked = haystack.to_string();
    for phrase in phrases.iter().filter(|p| !p.is_empty()) {
        let spans: Vec<usize> = masked
            .match_indices(phrase.as_str())
            .filter(|(start, _)| {
                let before = masked[..*start].chars().next_back();
                let after = masked[start + phrase.len()..].chars().next();
                is_boundary(before) && is_boundary(after)
            })
            .map(|(start, _)| start)
            .collect();
        for start in spans {
            masked.replace_range(start..start + phrase.len(), &" ".repeat(phrase.len()));
        }
    }
    masked
}

/// Phrases from `phrases` present in `haystack`, in table order.
pub fn matched_phrases<'a>(haystack: &str, phrases: &[&'a str]) -> Vec<&'a str> {
    phrases
        .iter()
        .copied()
        .filter(|p| contains_whole_word(haystack, p))
        .collect()
}

/// Lowercased `title + " " + description`.
pub fn assemble(title: &str, description: &str) -> String {
    format!("{} {}", title.trim(), description.trim()).to_lowercase()
}
