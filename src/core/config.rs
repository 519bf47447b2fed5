//! Configuration management for sitefind.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, SiteFindError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Where the site lives and which pages it has
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// URL of the page the search runs from (HTTP sites)
    #[serde(default)]
    pub base_url: Option<String>,

    /// Local directory holding a built copy of the site
    #[serde(default)]
    pub root_dir: Option<PathBuf>,

    /// Page the search runs from, relative to `root_dir`
    #[serde(default = "default_page")]
    pub page: String,

    /// Path marker identifying pages that live one folder below the site root
    #[serde(default = "default_subfolder_marker")]
    pub subfolder_marker: String,

    /// Inline catalog of page paths, relative to the site root
    #[serde(default)]
    pub catalog: Vec<String>,

    /// File listing catalog paths, one per line
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Result cap applied after ranking
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Characters of context kept on each side of a match
    #[serde(default = "default_context_chars")]
    pub context_chars: usize,

    /// Maximum query string length (chars)
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Fetch configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Maximum in-flight fetches; 0 fetches the whole catalog at once
    #[serde(default)]
    pub max_concurrent: usize,

    /// Per-request timeout in seconds; unset leaves the transport default
    #[serde(default)]
    pub timeout_sec: Option<u64>,
}

// Default value functions
fn default_page() -> String {
    "index.html".to_string()
}

fn default_subfolder_marker() -> String {
    "/Task%20".to_string()
}

fn default_max_results() -> usize {
    20
}

fn default_context_chars() -> usize {
    80
}

fn default_max_query_length() -> usize {
    500
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            root_dir: None,
            page: default_page(),
            subfolder_marker: default_subfolder_marker(),
            catalog: Vec::new(),
            catalog_file: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            context_chars: default_context_chars(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SiteFindError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. SITEFIND_CONFIG env var
    /// 2. XDG config file (~/.config/sitefind/config.toml)
    /// 3. ./sitefind.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("SITEFIND_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("sitefind.toml").exists() {
                Self::from_file("sitefind.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Site configuration; a site source from the environment replaces the file's
        if let Ok(url) = env::var("SITEFIND_BASE_URL") {
            self.site.base_url = Some(url);
            self.site.root_dir = None;
        }
        if let Ok(dir) = env::var("SITEFIND_ROOT_DIR") {
            self.site.root_dir = Some(PathBuf::from(dir));
            self.site.base_url = None;
        }
        if let Ok(page) = env::var("SITEFIND_PAGE") {
            self.site.page = page;
        }
        if let Ok(file) = env::var("SITEFIND_CATALOG_FILE") {
            self.site.catalog_file = Some(PathBuf::from(file));
        }

        // Search configuration
        if let Ok(max_results) = env::var("SITEFIND_MAX_RESULTS") {
            if let Ok(n) = max_results.parse() {
                self.search.max_results = n;
            }
        }
        if let Ok(context) = env::var("SITEFIND_CONTEXT_CHARS") {
            if let Ok(n) = context.parse() {
                self.search.context_chars = n;
            }
        }
        if let Ok(max_query_len) = env::var("SITEFIND_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }

        // Fetch configuration
        if let Ok(max_concurrent) = env::var("SITEFIND_MAX_CONCURRENT") {
            if let Ok(n) = max_concurrent.parse() {
                self.fetch.max_concurrent = n;
            }
        }
        if let Ok(timeout) = env::var("SITEFIND_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.fetch.timeout_sec = Some(t);
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(SiteFindError::ConfigError(
                "Max results must be non-zero".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(SiteFindError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.fetch.timeout_sec == Some(0) {
            return Err(SiteFindError::ConfigError(
                "Fetch timeout must be non-zero when set".to_string(),
            ));
        }

        if self.site.base_url.is_some() && self.site.root_dir.is_some() {
            return Err(SiteFindError::ConfigError(
                "site.base_url and site.root_dir are mutually exclusive".to_string(),
            ));
        }

        if let Some(url) = &self.site.base_url {
            reqwest::Url::parse(url).map_err(|e| {
                SiteFindError::ConfigError(format!("Invalid base_url '{url}': {e}"))
            })?;
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Base URL: {:?}", self.site.base_url);
        tracing::debug!("  Root dir: {:?}", self.site.root_dir);
        tracing::debug!("  Page: {}", self.site.page);
        tracing::debug!("  Subfolder marker: {}", self.site.subfolder_marker);
        tracing::debug!("  Inline catalog: {} entries", self.site.catalog.len());
        tracing::debug!("  Catalog file: {:?}", self.site.catalog_file);
        tracing::debug!("  Max results: {}", self.search.max_results);
        tracing::debug!("  Context: {} chars", self.search.context_chars);
        tracing::debug!("  Max query length: {}", self.search.max_query_length);
        tracing::debug!("  Max concurrent fetches: {}", self.fetch.max_concurrent);
        tracing::debug!("  Fetch timeout: {:?}", self.fetch.timeout_sec);
    }
}
