//! Error types and error handling for sitefind.
//!
//! The search pipeline itself never fails: per-document fetch and parse
//! problems are recovered where they happen. These errors cover the
//! surfaces around it (configuration, catalogs, site addresses, and the
//! maintenance tools).

use thiserror::Error;

/// Result type alias for sitefind operations
pub type Result<T> = std::result::Result<T, SiteFindError>;

/// Main error type for sitefind
#[derive(Error, Debug)]
pub enum SiteFindError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid site: {0}")]
    InvalidSite(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Fetch failed for '{address}': {reason}")]
    FetchFailed { address: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SiteFindError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, SiteFindError::InvalidPath(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SiteFindError::ConfigError(_)
                | SiteFindError::InvalidQuery(_)
                | SiteFindError::InvalidCatalog(_)
                | SiteFindError::InvalidSite(_)
        )
    }

    /// Shorthand for a per-document fetch failure
    pub fn fetch_failed(address: impl Into<String>, reason: impl ToString) -> Self {
        SiteFindError::FetchFailed {
            address: address.into(),
            reason: reason.to_string(),
        }
    }
}
