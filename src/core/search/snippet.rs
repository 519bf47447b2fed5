//! Highlighted excerpts around the first match.
//!
//! The excerpt window is measured in chars around the match. Whitespace
//! inside the window is collapsed before the query is located again, so
//! the highlight follows the collapsed text. All page text is escaped;
//! only the `<mark>` tags are emitted raw.

use once_cell::sync::Lazy;
use regex::Regex;

use super::matcher::{char_to_byte, find_first, fold_case, Query};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Ellipsis marking a clipped edge of the window
pub const ELLIPSIS: &str = "…";

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Builds excerpts with a fixed amount of context on each side
#[derive(Debug, Clone, Copy)]
pub struct SnippetBuilder {
    context_chars: usize,
}

impl SnippetBuilder {
    pub fn new(context_chars: usize) -> Self {
        Self { context_chars }
    }

    pub fn context_chars(&self) -> usize {
        self.context_chars
    }

    /// Char bounds of the excerpt window, clamped to the text
    pub fn window(&self, total_chars: usize, match_index: usize, query_chars: usize) -> (usize, usize) {
        let start = match_index.saturating_sub(self.context_chars).min(total_chars);
        let end = match_index
            .saturating_add(query_chars)
            .saturating_add(self.context_chars)
            .min(total_chars);
        (start, end)
    }

    /// Build the escaped, highlighted excerpt for a match
    pub fn build(&self, text: &str, query: &Query, match_index: usize) -> String {
        let total = text.chars().count();
        let (start, end) = self.window(total, match_index, query.char_len());

        let prefix = if start > 0 { ELLIPSIS } else { "" };
        let suffix = if end < total { ELLIPSIS } else { "" };

        let slice = &text[char_to_byte(text, start)..char_to_byte(text, end)];
        let collapsed = WHITESPACE_RUN.replace_all(slice, " ");

        // Folding keeps char counts, so a char index in the folded window
        // is also a char index in the collapsed window.
        let Some(found) = find_first(&fold_case(&collapsed), &query.folded) else {
            return format!("{prefix}{}{suffix}", escape_html(&collapsed));
        };

        let mark_start = char_to_byte(&collapsed, found);
        let mark_end = char_to_byte(&collapsed, found + query.char_len());

        format!(
            "{prefix}{}<mark>{}</mark>{}{suffix}",
            escape_html(&collapsed[..mark_start]),
            escape_html(&collapsed[mark_start..mark_end]),
            escape_html(&collapsed[mark_end..]),
        )
    }
}

impl Default for SnippetBuilder {
    fn default() -> Self {
        Self::new(80)
    }
}
