//! The catalog: the fixed, ordered list of pages a search covers.
//!
//! Catalog paths are relative to the site root and use `/` separators.
//! A catalog can be given inline, read from a file (one path per line),
//! or discovered by walking a local copy of the site.

use glob::Pattern;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::core::config::SiteConfig;
use crate::core::error::{Result, SiteFindError};

/// File name patterns treated as pages during discovery
pub const PAGE_PATTERNS: [&str; 2] = ["*.html", "*.htm"];

/// Ordered list of page paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<String>,
}

impl Catalog {
    /// Build a catalog from paths; blank entries are dropped
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Parse catalog file contents
    ///
    /// One path per line. Blank lines and lines starting with `#` are
    /// ignored.
    pub fn parse(contents: &str) -> Self {
        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Read a catalog file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            SiteFindError::InvalidCatalog(format!(
                "Failed to read catalog file {}: {e}",
                path.display()
            ))
        })?;
        Ok(Self::parse(&contents))
    }

    /// Discover every page under a site directory, sorted by path
    ///
    /// Hidden directories are skipped. Unreadable entries are logged and
    /// skipped.
    pub fn discover(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(SiteFindError::InvalidPath(format!(
                "Site directory not found: {}",
                root.display()
            )));
        }

        let patterns = PAGE_PATTERNS
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    SiteFindError::ConfigError(format!("Invalid page pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut entries = Vec::new();
        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_hidden(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let name = entry.file_name().to_string_lossy();
                    if !patterns.iter().any(|p| p.matches(&name.to_lowercase())) {
                        continue;
                    }
                    if let Ok(relative) = entry.path().strip_prefix(root) {
                        let parts: Vec<String> = relative
                            .components()
                            .map(|c| c.as_os_str().to_string_lossy().into_owned())
                            .collect();
                        entries.push(parts.join("/"));
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                }
            }
        }

        entries.sort();
        tracing::debug!("Discovered {} pages under {:?}", entries.len(), root);
        Ok(Self { entries })
    }

    /// Resolve the catalog named by the `[site]` config section
    ///
    /// Inline entries win over a catalog file; a local site directory is
    /// walked when neither is given.
    pub fn from_config(site: &SiteConfig) -> Result<Self> {
        let catalog = if !site.catalog.is_empty() {
            Self::new(&site.catalog)
        } else if let Some(file) = &site.catalog_file {
            Self::from_file(file)?
        } else if let Some(root) = &site.root_dir {
            Self::discover(root)?
        } else {
            return Err(SiteFindError::InvalidCatalog(
                "No catalog configured: set site.catalog, site.catalog_file, or a site directory"
                    .to_string(),
            ));
        };

        if catalog.is_empty() {
            return Err(SiteFindError::InvalidCatalog(
                "Catalog has no entries".to_string(),
            ));
        }
        Ok(catalog)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_hidden(entry: &DirEntry, root: &Path) -> bool {
    if entry.path() == root {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
