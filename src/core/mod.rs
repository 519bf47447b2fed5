//! Core domain logic (front-end agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Per-search records
//! - **xdg**: Config directory resolution
//! - **site**: Page location, base prefix, page context
//! - **catalog**: The list of pages to search
//! - **fetch**: Page sources (HTTP and local directory)
//! - **extract**: Title and body text extraction
//! - **search**: Matching, ranking, snippets, pipeline
//! - **controller**: Overlapping searches and the supersede policy
//! - **render**: Widget markup from an explicit UI state
//! - **maintenance**: In-place repairs for site pages
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod maintenance;
pub mod render;
pub mod search;
pub mod services;
pub mod site;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SiteFindError};
pub use services::Services;
