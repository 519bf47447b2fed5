//! Search pipeline orchestration.
//!
//! Coordinates one search end to end:
//! 1. Fetch every catalog page concurrently
//! 2. Extract title and body text
//! 3. Find the first match of the query
//! 4. Rank matches and apply the result cap
//!
//! Pages that fail to fetch are skipped. A search never fails; an empty
//! Result Set is a normal outcome.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::core::catalog::Catalog;
use crate::core::config::Config;
use crate::core::extract::extract;
use crate::core::fetch::DocumentSource;
use crate::core::site::BasePrefix;
use crate::core::types::{DocumentSnapshot, ResultItem, SearchOutcome};

use super::matcher::Query;
use super::ranker::rank;
use super::snippet::SnippetBuilder;

/// Tunables for a pipeline
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// Result cap
    pub max_results: usize,

    /// Snippet context on each side of a match (chars)
    pub context_chars: usize,

    /// In-flight fetch limit; 0 means unbounded
    pub max_concurrent: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_results: 20,
            context_chars: 80,
            max_concurrent: 0,
        }
    }
}

impl From<&Config> for PipelineOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_results: config.search.max_results,
            context_chars: config.search.context_chars,
            max_concurrent: config.fetch.max_concurrent,
        }
    }
}

/// What happened to one catalog page
enum PageScan {
    Matched(DocumentSnapshot),
    NoMatch,
    Failed,
}

/// Fetch-scan-rank pipeline over a fixed catalog
pub struct SearchPipeline {
    catalog: Catalog,
    prefix: BasePrefix,
    source: Arc<dyn DocumentSource>,
    options: PipelineOptions,
    snippets: SnippetBuilder,
}

impl SearchPipeline {
    /// Create a pipeline
    ///
    /// # Arguments
    ///
    /// * `catalog` - Pages to search
    /// * `prefix` - Prefix applied to catalog paths for fetches and links
    /// * `source` - Where page content comes from
    /// * `options` - Result cap, snippet context, fetch concurrency
    pub fn new(
        catalog: Catalog,
        prefix: BasePrefix,
        source: Arc<dyn DocumentSource>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            catalog,
            prefix,
            source,
            snippets: SnippetBuilder::new(options.context_chars),
            options,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn prefix(&self) -> &BasePrefix {
        &self.prefix
    }

    /// Run one search
    ///
    /// An input that is empty after trimming returns an empty outcome
    /// without fetching anything.
    pub async fn search(&self, input: &str) -> SearchOutcome {
        let Some(query) = Query::parse(input) else {
            tracing::debug!("Empty query, skipping search");
            return SearchOutcome::empty(input);
        };

        let start = Instant::now();
        let limiter = (self.options.max_concurrent > 0)
            .then(|| Arc::new(Semaphore::new(self.options.max_concurrent)));

        let mut tasks = JoinSet::new();
        for path in self.catalog.iter() {
            let path = path.to_string();
            let address = self.prefix.resolve(&path);
            let source = Arc::clone(&self.source);
            let query = query.clone();
            let limiter = limiter.clone();

            tasks.spawn(async move {
                let _permit = match limiter {
                    Some(limiter) => limiter.acquire_owned().await.ok(),
                    None => None,
                };
                scan_page(source.as_ref(), path, &address, &query).await
            });
        }

        // Drained in completion order, which ranking keeps for ties
        let mut matches = Vec::new();
        let mut documents_scanned = 0;
        let mut documents_failed = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(PageScan::Matched(snapshot)) => {
                    documents_scanned += 1;
                    matches.push(snapshot);
                }
                Ok(PageScan::NoMatch) => documents_scanned += 1,
                Ok(PageScan::Failed) => documents_failed += 1,
                Err(e) => {
                    tracing::warn!("Page scan task failed: {}", e);
                    documents_failed += 1;
                }
            }
        }

        let matched = matches.len();
        let results = rank(matches, self.options.max_results);
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Search for '{}': {} of {} pages matched ({} failed) in {}ms",
            query.text,
            matched,
            self.catalog.len(),
            documents_failed,
            duration_ms
        );

        SearchOutcome {
            query: query.text,
            results,
            documents_scanned,
            documents_failed,
            duration_ms,
        }
    }

    /// Rendered entries for an outcome: links and highlighted snippets
    pub fn items(&self, outcome: &SearchOutcome) -> Vec<ResultItem> {
        let Some(query) = Query::parse(&outcome.query) else {
            return Vec::new();
        };

        outcome
            .results
            .iter()
            .enumerate()
            .map(|(i, doc)| ResultItem {
                rank: i + 1,
                path: doc.path.clone(),
                href: self.prefix.resolve(&doc.path),
                title: doc.title.clone(),
                snippet_html: self
                    .snippets
                    .build(&doc.body_text, &query, doc.first_match_index),
                first_match_index: doc.first_match_index,
            })
            .collect()
    }
}

/// Fetch, extract and match a single page
async fn scan_page(
    source: &dyn DocumentSource,
    path: String,
    address: &str,
    query: &Query,
) -> PageScan {
    let raw = match source.fetch(address).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!("Skipping {}: {}", path, e);
            return PageScan::Failed;
        }
    };

    let page = extract(&raw, &path);
    match query.first_match(&page.body_text) {
        Some(first_match_index) => PageScan::Matched(DocumentSnapshot {
            path,
            title: page.title,
            body_text: page.body_text,
            first_match_index,
        }),
        None => PageScan::NoMatch,
    }
}
