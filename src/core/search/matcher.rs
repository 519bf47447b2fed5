//! Case-insensitive substring matching.
//!
//! Folding is done one char at a time so folded text always has the same
//! number of chars as the original: a char whose lowercase form is a
//! single char is replaced by it, anything else is kept. Offsets found in
//! folded text therefore index the original text directly.

/// Fold a string for case-insensitive comparison
pub fn fold_case(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Char index of the first occurrence of `needle` in `haystack`
///
/// Both arguments must already be folded. An empty needle never matches.
pub fn find_first(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .find(needle)
        .map(|byte| haystack[..byte].chars().count())
}

/// Byte offset of a char index (the string's length when out of range)
pub(crate) fn char_to_byte(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

/// A trimmed, folded search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Query as typed, trimmed
    pub text: String,

    /// Folded form used for matching
    pub folded: String,
}

impl Query {
    /// Parse user input; `None` when nothing is left after trimming
    pub fn parse(input: &str) -> Option<Self> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            folded: fold_case(text),
        })
    }

    /// Length in chars
    pub fn char_len(&self) -> usize {
        self.folded.chars().count()
    }

    /// First match in a page's body text
    pub fn first_match(&self, body_text: &str) -> Option<usize> {
        find_first(&fold_case(body_text), &self.folded)
    }
}
