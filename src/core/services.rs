//! Unified service container for sitefind
//!
//! Wires configuration, catalog, page source and pipeline together so
//! every command works from the same set of services.

use crate::core::catalog::Catalog;
use crate::core::config::Config;
use crate::core::controller::SearchController;
use crate::core::error::{Result, SiteFindError};
use crate::core::fetch::{source_for, DocumentSource};
use crate::core::search::{PipelineOptions, SearchPipeline};
use crate::core::site::{BasePrefix, PageContext, SiteLocation};
use crate::core::types::SearchOutcome;
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Search pipeline over the configured catalog
    pub pipeline: Arc<SearchPipeline>,

    /// Controller for overlapping interactive searches
    pub controller: Arc<SearchController>,

    /// Home page or sub-page
    pub page_context: PageContext,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    ///
    /// Resolves the site location, the catalog and the page source.
    pub fn new(config: Config) -> Result<Self> {
        let location = SiteLocation::from_config(&config.site)?;
        let catalog = Catalog::from_config(&config.site)?;
        let source = source_for(&location, &config.fetch)?;

        tracing::debug!(
            "Searching {} pages from {}",
            catalog.len(),
            location.page_path()
        );

        Ok(Self::with_source(
            config,
            catalog,
            &location.page_path(),
            source,
        ))
    }

    /// Create services around an explicit page source
    ///
    /// `page_path` is the encoded path of the page the search runs from.
    pub fn with_source(
        config: Config,
        catalog: Catalog,
        page_path: &str,
        source: Arc<dyn DocumentSource>,
    ) -> Self {
        let prefix = BasePrefix::detect(page_path, &config.site.subfolder_marker);
        let pipeline = Arc::new(SearchPipeline::new(
            catalog,
            prefix,
            source,
            PipelineOptions::from(&config),
        ));

        Self {
            controller: Arc::new(SearchController::new(Arc::clone(&pipeline))),
            pipeline,
            page_context: PageContext::detect(page_path),
            config: Arc::new(config),
        }
    }

    /// Reject queries longer than `search.max_query_length` chars
    pub fn check_query(&self, input: &str) -> Result<()> {
        let length = input.trim().chars().count();
        if length > self.config.search.max_query_length {
            return Err(SiteFindError::InvalidQuery(format!(
                "Query is {} chars, the limit is {}",
                length, self.config.search.max_query_length
            )));
        }
        Ok(())
    }

    /// Run one search, rejecting over-long queries
    pub async fn search(&self, input: &str) -> Result<SearchOutcome> {
        self.check_query(input)?;
        Ok(self.pipeline.search(input).await)
    }
}
