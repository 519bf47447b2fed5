//! Site addressing: where the search runs from and how catalog paths
//! turn into addresses.
//!
//! A page one folder below the site root sees every catalog path through
//! a `../` prefix, exactly as a relative link on that page would.

use crate::core::config::SiteConfig;
use crate::core::error::{Result, SiteFindError};
use reqwest::Url;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Percent-encode whitespace in a catalog path
///
/// Only whitespace is encoded (as `%20`); everything else, including
/// existing escapes, is left alone.
pub fn encode_path(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch.is_whitespace() {
            encoded.push_str("%20");
        } else {
            encoded.push(ch);
        }
    }
    encoded
}

/// Last segment of a catalog path
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Relative prefix applied to catalog paths for fetches and links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BasePrefix(String);

impl BasePrefix {
    const PARENT: &'static str = "../";

    /// No prefix: the page sits at the site root
    pub fn none() -> Self {
        Self(String::new())
    }

    /// One level up
    pub fn parent() -> Self {
        Self(Self::PARENT.to_string())
    }

    /// Detect the prefix from the current page's (encoded) path
    pub fn detect(page_path: &str, subfolder_marker: &str) -> Self {
        if !subfolder_marker.is_empty() && page_path.contains(subfolder_marker) {
            Self::parent()
        } else {
            Self::none()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Address of a catalog path as seen from the current page
    pub fn resolve(&self, catalog_path: &str) -> String {
        format!("{}{}", self.0, encode_path(catalog_path))
    }
}

impl fmt::Display for BasePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the search runs on the home page or a sub-page
///
/// Only affects presentation (placement and the page-context CSS class).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageContext {
    Home,
    NonHome,
}

impl PageContext {
    pub fn detect(page_path: &str) -> Self {
        let is_home = page_path.is_empty()
            || page_path == "/"
            || page_path == "index.html"
            || page_path.ends_with("/index.html");
        if is_home {
            PageContext::Home
        } else {
            PageContext::NonHome
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            PageContext::Home => "is-home",
            PageContext::NonHome => "is-non-home",
        }
    }
}

/// The page a search is launched from
#[derive(Debug, Clone)]
pub enum SiteLocation {
    /// A page served over HTTP
    Http { page_url: Url },

    /// A page inside a local copy of the site
    Directory { root: PathBuf, page: String },
}

impl SiteLocation {
    /// Build the location from the `[site]` config section
    pub fn from_config(site: &SiteConfig) -> Result<Self> {
        match (&site.base_url, &site.root_dir) {
            (Some(url), None) => {
                let page_url = Url::parse(url).map_err(|e| {
                    SiteFindError::InvalidSite(format!("Invalid base URL '{url}': {e}"))
                })?;
                Ok(SiteLocation::Http { page_url })
            }
            (None, Some(root)) => {
                if !root.is_dir() {
                    return Err(SiteFindError::InvalidPath(format!(
                        "Site directory not found: {}",
                        root.display()
                    )));
                }
                Ok(SiteLocation::Directory {
                    root: root.clone(),
                    page: site.page.clone(),
                })
            }
            (Some(_), Some(_)) => Err(SiteFindError::InvalidSite(
                "Use either a base URL or a site directory, not both".to_string(),
            )),
            (None, None) => Err(SiteFindError::InvalidSite(
                "No site configured: pass --url or --root".to_string(),
            )),
        }
    }

    /// Encoded path of the current page, as a browser would report it
    pub fn page_path(&self) -> String {
        match self {
            SiteLocation::Http { page_url } => page_url.path().to_string(),
            SiteLocation::Directory { page, .. } => {
                format!("/{}", encode_path(page.trim_start_matches('/')))
            }
        }
    }

    pub fn base_prefix(&self, subfolder_marker: &str) -> BasePrefix {
        BasePrefix::detect(&self.page_path(), subfolder_marker)
    }

    pub fn page_context(&self) -> PageContext {
        PageContext::detect(&self.page_path())
    }
}
