//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod catalog;
pub mod completions;
pub mod config;
pub mod maintenance;
pub mod repl;
pub mod search;

// Re-export argument types for use in mod.rs
pub use catalog::CatalogArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use maintenance::RewriteArgs;
pub use repl::ReplArgs;
pub use search::SearchArgs;
