//! Tests for the repl CLI command
//!
//! Feeds scripted input through the line loop:
//! - A query followed by an empty line ends cleared
//! - `:q` stops reading
//! - Over-long lines are refused without starting a search

use crate::common::{create_site_services, TestSite};
use sitefind::cli::commands::repl::run;
use sitefind::cli::OutputFormat;
use sitefind::core::config::Config;
use sitefind::core::render::SearchPhase;
use sitefind::core::services::Services;
use tokio::io::BufReader;

#[tokio::test]
async fn test_repl_renders_last_query() {
    let site = TestSite::course();
    let services = create_site_services(site.path(), "index.html");

    let input = BufReader::new(&b"ppe\n"[..]);
    let summary = run(input, false, &services, OutputFormat::Human).await.unwrap();

    assert_eq!(summary.started, 1);
    assert_eq!(summary.rejected, 0);
    assert_eq!(summary.ui.phase, SearchPhase::Rendered);
    assert_eq!(summary.ui.query, "ppe");
    assert!(summary.ui.results_html.contains("Module 1"));
}

#[tokio::test]
async fn test_repl_empty_line_clears_and_quit_stops() {
    let site = TestSite::course();
    let services = create_site_services(site.path(), "index.html");

    let input = BufReader::new(&b"ppe\n\n:q\ngown\n"[..]);
    let summary = run(input, false, &services, OutputFormat::Json).await.unwrap();

    // "gown" comes after :q and is never searched
    assert_eq!(summary.started, 1);
    assert_eq!(summary.ui.phase, SearchPhase::Idle);
    assert!(summary.ui.query.is_empty());
    assert!(summary.ui.results_html.is_empty());
}

#[tokio::test]
async fn test_repl_rejects_over_long_query() {
    let site = TestSite::course();
    let mut config = Config::default();
    config.site.root_dir = Some(site.path().to_path_buf());
    config.search.max_query_length = 5;
    let services = Services::new(config).unwrap();

    let input = BufReader::new(&b"protective\nppe\n"[..]);
    let summary = run(input, true, &services, OutputFormat::Html).await.unwrap();

    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.started, 1);
    assert_eq!(summary.ui.query, "ppe");
}

#[tokio::test]
async fn test_repl_end_of_input_with_nothing_typed() {
    let site = TestSite::course();
    let services = create_site_services(site.path(), "index.html");

    let input = BufReader::new(&b""[..]);
    let summary = run(input, false, &services, OutputFormat::Human).await.unwrap();

    assert_eq!(summary.started, 0);
    assert_eq!(summary.ui.phase, SearchPhase::Idle);
}
