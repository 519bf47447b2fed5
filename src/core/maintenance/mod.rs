//! In-place repairs for the site's HTML files.
//!
//! Each repair is a `Rewrite`: a pure text transformation that reports
//! whether it changed anything. `SiteRewriter` walks every `.html` file
//! under a site directory, applies one rewrite and writes changed files
//! back (unless it is a dry run).

mod arrows;
mod index_button;

pub use arrows::ArrowRepair;
pub use index_button::IndexButtonRemoval;

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{Result, SiteFindError};

/// A text transformation applied to one page
pub trait Rewrite {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Whether the rewrite should touch this file at all
    fn applies_to(&self, _path: &Path) -> bool {
        true
    }

    /// New content, or `None` when nothing changes
    fn rewrite(&self, content: &str) -> Option<String>;
}

/// Outcome of a rewrite pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct RewriteStats {
    pub files_scanned: usize,
    pub files_changed: usize,
    /// Changed files, relative to the site root
    pub changed_paths: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Applies rewrites to every page under a site directory
pub struct SiteRewriter {
    root: PathBuf,
    dry_run: bool,
}

impl SiteRewriter {
    pub fn new(root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            dry_run,
        }
    }

    /// Apply a rewrite to all pages
    ///
    /// Files that are not valid UTF-8 are skipped. Write failures abort
    /// the pass.
    pub fn run(&self, rewrite: &dyn Rewrite) -> Result<RewriteStats> {
        if !self.root.is_dir() {
            return Err(SiteFindError::InvalidPath(format!(
                "Site directory not found: {}",
                self.root.display()
            )));
        }

        let mut stats = RewriteStats {
            dry_run: self.dry_run,
            ..RewriteStats::default()
        };

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e, &self.root))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !is_html(path) || !rewrite.applies_to(path) {
                continue;
            }

            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                    tracing::debug!("Skipping non-UTF-8 file: {:?}", path);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            stats.files_scanned += 1;

            let Some(updated) = rewrite.rewrite(&content) else {
                continue;
            };

            if !self.dry_run {
                fs::write(path, updated)?;
            }
            tracing::info!("{}: updated {:?}", rewrite.name(), path);

            stats.files_changed += 1;
            stats
                .changed_paths
                .push(path.strip_prefix(&self.root).unwrap_or(path).to_path_buf());
        }

        Ok(stats)
    }
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html"))
        .unwrap_or(false)
}

fn is_hidden(entry: &DirEntry, root: &Path) -> bool {
    entry.path() != root
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}
