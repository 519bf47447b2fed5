// Test helper functions

use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use sitefind::core::catalog::Catalog;
use sitefind::core::config::Config;
use sitefind::core::fetch::DocumentSource;
use sitefind::core::search::{PipelineOptions, SearchPipeline};
use sitefind::core::services::Services;
use sitefind::core::site::{encode_path, BasePrefix};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Create services over a local site, searching from `page`
#[allow(dead_code)] // Used in integration tests
pub fn create_site_services(root: &Path, page: &str) -> Services {
    let mut config = Config::default();
    config.site.root_dir = Some(root.to_path_buf());
    config.site.page = page.to_string();

    Services::new(config).expect("Failed to create services")
}

/// Build a pipeline over an arbitrary source
#[allow(dead_code)] // Used in integration tests
pub fn pipeline_for(
    catalog: &[&str],
    prefix: BasePrefix,
    source: Arc<dyn DocumentSource>,
    options: PipelineOptions,
) -> SearchPipeline {
    SearchPipeline::new(Catalog::new(catalog.iter()), prefix, source, options)
}

/// Serve pages over HTTP on a random local port
///
/// Paths are site-relative and get percent-encoded the way a browser would
/// request them. Anything else is a 404. Returns the base URL.
#[allow(dead_code)] // Used in integration tests
pub async fn serve_pages<P: AsRef<str>, H: AsRef<str>>(pages: &[(P, H)]) -> String {
    let pages: Arc<HashMap<String, String>> = Arc::new(
        pages
            .iter()
            .map(|(path, html)| {
                (
                    format!("/{}", encode_path(path.as_ref())),
                    html.as_ref().to_string(),
                )
            })
            .collect(),
    );

    let app = Router::new().fallback(move |uri: Uri| {
        let pages = Arc::clone(&pages);
        async move {
            match pages.get(uri.path()) {
                Some(html) => (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                    html.clone(),
                )
                    .into_response(),
                None => StatusCode::NOT_FOUND.into_response(),
            }
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{addr}")
}
