//! Removal of the "Index Map" button from every page except the home page.
//!
//! The button block is commented out rather than deleted, so the markup
//! stays in the file.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::Path;

use super::Rewrite;

static BUTTON_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<div[^>]*>\s*<a[^>]*class="index-map-btn"[^>]*>.*?</a>\s*</div>"#).unwrap()
});

/// Page that keeps its button
const HOME_PAGE: &str = "index.html";

/// Comments out `<div><a class="index-map-btn">…</a></div>` blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexButtonRemoval;

impl Rewrite for IndexButtonRemoval {
    fn name(&self) -> &'static str {
        "strip-index-button"
    }

    fn applies_to(&self, path: &Path) -> bool {
        path.file_name().and_then(|n| n.to_str()) != Some(HOME_PAGE)
    }

    fn rewrite(&self, content: &str) -> Option<String> {
        let mut changed = false;
        let updated = BUTTON_BLOCK.replace_all(content, |caps: &Captures| {
            let block = &caps[0];
            let start = caps.get(0).map_or(0, |m| m.start());
            if content[..start].trim_end().ends_with("<!--") {
                block.to_string()
            } else {
                changed = true;
                format!("<!-- {block} -->")
            }
        });

        changed.then(|| updated.into_owned())
    }
}
