//! Ranking by first-match position.

use crate::core::types::{DocumentSnapshot, ResultSet};

/// Order matches by first-match offset and apply the result cap
///
/// The sort is stable, so pages matching at the same offset keep the
/// order they were collected in (fetch-completion order).
pub fn rank(mut matches: Vec<DocumentSnapshot>, max_results: usize) -> ResultSet {
    matches.sort_by_key(|doc| doc.first_match_index);
    matches.truncate(max_results);
    matches
}
