//! Core data types for sitefind.
//!
//! This module defines the per-search records produced by the search
//! pipeline and the rendered result items handed to consumers.

use serde::{Deserialize, Serialize};

/// One matched page, captured during a single search
///
/// Snapshots are built once per search and never mutated or cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Catalog path of the page (relative to the site root)
    pub path: String,

    /// Page title, or the last path segment when the page has none
    pub title: String,

    /// Searchable text of the page body
    pub body_text: String,

    /// Char offset of the first case-insensitive match in `body_text`
    pub first_match_index: usize,
}

/// Ranked, capped list of matched pages
pub type ResultSet = Vec<DocumentSnapshot>;

/// Result Set plus statistics for one search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Query as typed, trimmed
    pub query: String,

    /// Ranked matches
    pub results: ResultSet,

    /// Pages fetched and scanned successfully
    pub documents_scanned: usize,

    /// Pages skipped because their fetch failed
    pub documents_failed: usize,

    /// Wall time of the search in milliseconds
    pub duration_ms: u64,
}

impl SearchOutcome {
    /// Outcome of a query that was empty after trimming
    pub fn empty(query: &str) -> Self {
        Self {
            query: query.trim().to_string(),
            results: Vec::new(),
            documents_scanned: 0,
            documents_failed: 0,
            duration_ms: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A rendered result entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// 1-based rank in the Result Set
    pub rank: usize,

    /// Catalog path
    pub path: String,

    /// Link target, resolved through the base prefix
    pub href: String,

    /// Link label
    pub title: String,

    /// Escaped excerpt with the match wrapped in `<mark>`
    pub snippet_html: String,

    /// Char offset of the first match
    pub first_match_index: usize,
}
