//! Page fetching.
//!
//! A `DocumentSource` returns the raw content behind an address. Addresses
//! are relative to the page the search runs from (they carry the base
//! prefix), so each source resolves them the way a browser resolves a
//! relative link on that page.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::core::config::FetchConfig;
use crate::core::error::{Result, SiteFindError};
use crate::core::site::SiteLocation;

/// Something that can fetch page content by address
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the raw content at `address`
    ///
    /// Any failure (transport error, non-success status, missing file)
    /// is returned as `SiteFindError::FetchFailed`.
    async fn fetch(&self, address: &str) -> Result<String>;
}

/// Fetches pages over HTTP, relative to a page URL
pub struct HttpSource {
    client: Client,
    page_url: Url,
}

impl HttpSource {
    /// Create a source for pages linked from `page_url`
    ///
    /// No retries. Without a timeout the transport defaults apply.
    pub fn new(page_url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SiteFindError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, page_url })
    }

    /// Absolute URL for an address
    pub fn resolve(&self, address: &str) -> Result<Url> {
        self.page_url
            .join(address)
            .map_err(|e| SiteFindError::fetch_failed(address, format!("bad address: {e}")))
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, address: &str) -> Result<String> {
        let url = self.resolve(address)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SiteFindError::fetch_failed(address, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiteFindError::fetch_failed(
                address,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| SiteFindError::fetch_failed(address, e))
    }
}

/// Reads pages from a local copy of the site
pub struct DirectorySource {
    root: PathBuf,
    page_dir: Vec<String>,
}

impl DirectorySource {
    /// Create a source for pages linked from `page` (relative to `root`)
    pub fn new(root: impl Into<PathBuf>, page: &str) -> Self {
        let decoded = decode(page);
        let mut segments: Vec<String> = decoded
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .map(str::to_string)
            .collect();
        // Drop the file name; links resolve against the page's folder
        segments.pop();

        Self {
            root: root.into(),
            page_dir: segments,
        }
    }

    /// File path for an address, refusing anything outside the root
    pub fn resolve(&self, address: &str) -> Result<PathBuf> {
        let decoded = decode(address);
        let mut segments = if decoded.starts_with('/') {
            Vec::new()
        } else {
            self.page_dir.clone()
        };

        for segment in decoded.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if segments.pop().is_none() {
                        return Err(SiteFindError::fetch_failed(
                            address,
                            "address escapes the site root",
                        ));
                    }
                }
                other => segments.push(other.to_string()),
            }
        }

        Ok(segments
            .iter()
            .fold(self.root.clone(), |path, segment| path.join(segment)))
    }
}

#[async_trait]
impl DocumentSource for DirectorySource {
    async fn fetch(&self, address: &str) -> Result<String> {
        let path = self.resolve(address)?;
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| SiteFindError::fetch_failed(address, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn decode(address: &str) -> String {
    urlencoding::decode(address)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| address.to_string())
}

/// Build the source that serves a site location
pub fn source_for(location: &SiteLocation, fetch: &FetchConfig) -> Result<Arc<dyn DocumentSource>> {
    match location {
        SiteLocation::Http { page_url } => {
            let timeout = fetch.timeout_sec.map(Duration::from_secs);
            Ok(Arc::new(HttpSource::new(page_url.clone(), timeout)?))
        }
        SiteLocation::Directory { root, page } => Ok(Arc::new(DirectorySource::new(root, page))),
    }
}
