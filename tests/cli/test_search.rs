//! Tests for the search CLI command
//!
//! Tests the search command handler with various scenarios:
//! - Valid queries with results
//! - Empty results and empty queries
//! - Over-long queries
//! - Output format variations

use crate::common::{create_site_services, TestSite};
use sitefind::cli::commands::search::{execute, SearchArgs, SearchResponseOutput};
use sitefind::cli::{OutputFormat, SiteArgs};
use sitefind::core::config::Config;
use sitefind::core::services::Services;
use sitefind::SearchOutcome;

fn args(query: &str) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        site: SiteArgs::default(),
        files_only: false,
    }
}

#[tokio::test]
async fn test_search_human() {
    let site = TestSite::course();
    let services = create_site_services(site.path(), "Task 1 Modules/module 1.html");

    let result = execute(args("ppe"), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_search_json_and_html() {
    let site = TestSite::course();
    let services = create_site_services(site.path(), "index.html");

    for format in [OutputFormat::Json, OutputFormat::Html] {
        let result = execute(args("gown"), &services, format).await;
        assert!(result.is_ok(), "{format:?} search failed: {:?}", result.err());
    }
}

#[tokio::test]
async fn test_search_files_only_no_results() {
    let site = TestSite::course();
    let services = create_site_services(site.path(), "index.html");

    let mut search = args("zzz-not-present");
    search.files_only = true;
    let result = execute(search, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_search_empty_query_is_not_an_error() {
    let site = TestSite::course();
    let services = create_site_services(site.path(), "index.html");

    for format in [OutputFormat::Human, OutputFormat::Json, OutputFormat::Html] {
        assert!(execute(args("   "), &services, format).await.is_ok());
    }
}

#[tokio::test]
async fn test_search_over_long_query_fails() {
    let site = TestSite::course();
    let mut config = Config::default();
    config.site.root_dir = Some(site.path().to_path_buf());
    config.search.max_query_length = 5;
    let services = Services::new(config).unwrap();

    let result = execute(args("protective"), &services, OutputFormat::Human).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Invalid query"));
}

#[test]
fn test_response_output_fields() {
    let outcome = SearchOutcome {
        documents_scanned: 3,
        documents_failed: 1,
        duration_ms: 12,
        ..SearchOutcome::empty(" ppe ")
    };

    let response = SearchResponseOutput::new(&outcome, Vec::new());
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["query"], "ppe");
    assert_eq!(json["total_results"], 0);
    assert_eq!(json["documents_scanned"], 3);
    assert_eq!(json["documents_failed"], 1);
    assert!(json["searched_at"].is_string());
}

#[test]
fn test_site_args_override_config() {
    let mut config = Config::default();
    config.site.base_url = Some("https://example.org/index.html".to_string());
    config.site.catalog = vec!["a.html".to_string()];

    let site = SiteArgs {
        root: Some("./site".into()),
        page: Some("Task 1 Modules/a.html".to_string()),
        catalog: Some("pages.txt".into()),
        limit: Some(5),
        max_concurrent: Some(4),
        timeout: Some(10),
        ..SiteArgs::default()
    };
    site.apply(&mut config);

    assert_eq!(config.site.base_url, None);
    assert_eq!(config.site.root_dir, Some("./site".into()));
    assert_eq!(config.site.page, "Task 1 Modules/a.html");
    assert!(config.site.catalog.is_empty());
    assert_eq!(config.site.catalog_file, Some("pages.txt".into()));
    assert_eq!(config.search.max_results, 5);
    assert_eq!(config.fetch.max_concurrent, 4);
    assert_eq!(config.fetch.timeout_sec, Some(10));
}
