//! Keyword search over catalog pages.
//!
//! Plain case-insensitive substring search, ranked by the position of
//! the first match.

mod matcher;
mod pipeline;
mod ranker;
mod snippet;

pub use matcher::{find_first, fold_case, Query};
pub use pipeline::{PipelineOptions, SearchPipeline};
pub use ranker::rank;
pub use snippet::{escape_html, SnippetBuilder, ELLIPSIS};
