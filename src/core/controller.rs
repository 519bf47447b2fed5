//! Search sessions with a supersede policy.
//!
//! Searches may overlap: a new query can be submitted while an older one
//! is still fetching. Every submission takes a ticket from a monotonic
//! counter, and a finished search is only rendered if its ticket is still
//! the latest. In-flight fetches of a superseded search are not
//! cancelled; their outcome is dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::render::UiState;
use crate::core::search::{Query, SearchPipeline};
use crate::core::types::SearchOutcome;

/// Handle for one submitted search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    sequence: u64,
    query: String,
}

impl SearchTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Drives searches through the pipeline and into a `UiState`
pub struct SearchController {
    pipeline: Arc<SearchPipeline>,
    latest: AtomicU64,
}

impl SearchController {
    pub fn new(pipeline: Arc<SearchPipeline>) -> Self {
        Self {
            pipeline,
            latest: AtomicU64::new(0),
        }
    }

    pub fn pipeline(&self) -> &Arc<SearchPipeline> {
        &self.pipeline
    }

    /// Submit a query
    ///
    /// Always supersedes earlier searches. An empty query clears the UI
    /// and returns `None`; otherwise the UI switches to the searching
    /// state and a ticket is returned.
    pub fn begin(&self, input: &str, ui: &mut UiState) -> Option<SearchTicket> {
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(query) = Query::parse(input) else {
            ui.clear(input.trim());
            return None;
        };

        ui.begin(&query.text);
        Some(SearchTicket {
            sequence,
            query: query.text,
        })
    }

    /// Run the search behind a ticket
    pub async fn execute(&self, ticket: &SearchTicket) -> SearchOutcome {
        self.pipeline.search(&ticket.query).await
    }

    /// Whether a ticket is still the newest submission
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.sequence
    }

    /// Render a finished search unless it has been superseded
    ///
    /// Returns `true` when the UI was updated.
    pub fn finish(&self, ticket: &SearchTicket, outcome: &SearchOutcome, ui: &mut UiState) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                "Dropping superseded search #{} for '{}'",
                ticket.sequence,
                ticket.query
            );
            return false;
        }

        ui.show(&self.pipeline.items(outcome));
        true
    }

    /// Submit, run and render one search
    ///
    /// Returns the outcome when it was rendered.
    pub async fn search(&self, input: &str, ui: &mut UiState) -> Option<SearchOutcome> {
        let ticket = self.begin(input, ui)?;
        let outcome = self.execute(&ticket).await;
        self.finish(&ticket, &outcome, ui).then_some(outcome)
    }
}
