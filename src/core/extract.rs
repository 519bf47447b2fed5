//! Text extraction from fetched pages.
//!
//! Pages are parsed with a forgiving HTML5 parser, so malformed markup
//! never fails. The title falls back to the catalog path's last segment
//! and the body falls back to the raw text.

use once_cell::sync::Lazy;
use scraper::{Html, Node, Selector};

use crate::core::site::last_segment;

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

static BODY: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

/// Elements whose text never renders
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Title and searchable text of one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub title: String,
    pub body_text: String,
}

/// Extract the title and body text from raw page content
pub fn extract(raw: &str, catalog_path: &str) -> ExtractedPage {
    let document = Html::parse_document(raw);

    let title = document
        .select(&TITLE)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| last_segment(catalog_path).to_string());

    let body_text = match document.select(&BODY).next() {
        Some(body) => {
            let mut text = String::new();
            for node in body.descendants() {
                if let Node::Text(chunk) = node.value() {
                    let hidden = node.ancestors().any(|a| match a.value() {
                        Node::Element(el) => HIDDEN_ELEMENTS.contains(&el.name()),
                        _ => false,
                    });
                    if !hidden {
                        text.push_str(chunk);
                    }
                }
            }
            text
        }
        None => raw.to_string(),
    };

    ExtractedPage { title, body_text }
}
