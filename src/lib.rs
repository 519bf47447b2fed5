//! sitefind - keyword search for static sites
//!
//! Fetches every page in a fixed catalog, scans the rendered text for a
//! case-insensitive substring, and returns links ranked by where the
//! first match appears, each with a highlighted snippet. There is no
//! index: every search re-fetches and re-parses every page.
//!
//! # Architecture
//!
//! - **core**: Domain logic (front-end agnostic)
//!   - config, error, types, xdg
//!   - site, catalog (what to search and from where)
//!   - fetch, extract (getting page text)
//!   - search (matcher, ranker, snippets, pipeline)
//!   - controller, render (search sessions and widget markup)
//!   - maintenance (page repairs)
//!
//! - **cli**: Command-line adapter (depends on core)

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, SiteFindError};
pub use core::search::SearchPipeline;
pub use core::services::Services;
pub use core::types::*;
