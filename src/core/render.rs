//! HTML rendering for the search widget.
//!
//! Rendering is driven by an explicit `UiState` record: the caller owns
//! it, search transitions update it, and `render_widget` turns it into
//! markup. Nothing here looks elements up by id.

use serde::Serialize;

use crate::core::search::escape_html;
use crate::core::site::PageContext;
use crate::core::types::ResultItem;

/// Status text while a search is in flight
pub const SEARCHING: &str = "Searching…";

/// Message shown when a search matches nothing
pub const NO_MATCHES: &str = "No matching content found.";

/// Where the widget is in its search cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    /// Nothing searched yet, or the query was cleared
    Idle,
    /// Fetches are in flight
    Searching,
    /// Results are on screen
    Rendered,
    /// The last search matched nothing
    Empty,
}

/// Everything the widget displays
#[derive(Debug, Clone, Serialize)]
pub struct UiState {
    pub phase: SearchPhase,
    /// Query shown in the input box
    pub query: String,
    /// Status region text
    pub status: String,
    /// Contents of the results region
    pub results_html: String,
}

impl UiState {
    pub fn idle() -> Self {
        Self {
            phase: SearchPhase::Idle,
            query: String::new(),
            status: String::new(),
            results_html: String::new(),
        }
    }

    /// Empty query: clear results and status
    pub fn clear(&mut self, query: &str) {
        self.phase = SearchPhase::Idle;
        self.query = query.to_string();
        self.status.clear();
        self.results_html.clear();
    }

    /// A search started: old results go, status shows progress
    pub fn begin(&mut self, query: &str) {
        self.phase = SearchPhase::Searching;
        self.query = query.to_string();
        self.status = SEARCHING.to_string();
        self.results_html.clear();
    }

    /// A search finished: show its results or the empty state
    pub fn show(&mut self, items: &[ResultItem]) {
        self.status.clear();
        if items.is_empty() {
            self.phase = SearchPhase::Empty;
            self.results_html = format!("<div class=\"muted\">{NO_MATCHES}</div>");
        } else {
            self.phase = SearchPhase::Rendered;
            self.results_html = render_results(items);
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Markup for a list of results
pub fn render_results(items: &[ResultItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "<div class=\"search-result\"><a href=\"{}\">{}</a>\
                 <div class=\"search-snippet\">{}</div></div>",
                escape_html(&item.href),
                escape_html(&item.title),
                item.snippet_html
            )
        })
        .collect()
}

/// Markup for the whole widget: input, button, status and results
pub fn render_widget(ui: &UiState, context: PageContext) -> String {
    format!(
        "<div id=\"search-container\" class=\"{class}\">\
         <input id=\"search-input\" type=\"text\" placeholder=\"Enter keyword…\" value=\"{query}\">\
         <button id=\"search-btn\">Search</button>\
         <span id=\"search-status\" class=\"muted\" role=\"status\" aria-live=\"polite\">{status}</span>\
         </div>\
         <div id=\"search-results\" class=\"{class}\" aria-live=\"polite\">{results}</div>",
        class = context.css_class(),
        query = escape_html(&ui.query),
        status = escape_html(&ui.status),
        results = ui.results_html,
    )
}
