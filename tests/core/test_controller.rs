//! Tests for overlapping searches through the controller

use crate::common::{page, pipeline_for, MapSource};
use sitefind::core::controller::SearchController;
use sitefind::core::render::{SearchPhase, UiState, NO_MATCHES, SEARCHING};
use sitefind::core::search::PipelineOptions;
use sitefind::core::site::BasePrefix;
use std::sync::Arc;
use std::time::Duration;

fn controller() -> SearchController {
    let source = Arc::new(
        MapSource::new(&[
            ("slow.html", &page("Slow", "alpha content")),
            ("fast.html", &page("Fast", "beta content")),
        ])
        .with_delay("slow.html", Duration::from_millis(150)),
    );
    let pipeline = pipeline_for(
        &["slow.html", "fast.html"],
        BasePrefix::none(),
        source,
        PipelineOptions::default(),
    );
    SearchController::new(Arc::new(pipeline))
}

#[tokio::test]
async fn test_newer_search_supersedes_older() {
    let controller = controller();
    let mut ui = UiState::idle();

    let older = controller.begin("alpha", &mut ui).unwrap();
    let newer = controller.begin("beta", &mut ui).unwrap();
    assert_eq!(ui.phase, SearchPhase::Searching);
    assert_eq!(ui.status, SEARCHING);
    assert!(newer.sequence() > older.sequence());

    let (older_outcome, newer_outcome) =
        tokio::join!(controller.execute(&older), controller.execute(&newer));

    // The newer search finishes first and renders
    assert!(controller.finish(&newer, &newer_outcome, &mut ui));
    assert_eq!(ui.phase, SearchPhase::Rendered);
    assert!(ui.results_html.contains("fast.html"));

    // The older one completes later and is dropped
    assert_eq!(older_outcome.results.len(), 1);
    assert!(!controller.finish(&older, &older_outcome, &mut ui));
    assert!(!ui.results_html.contains("slow.html"));
    assert_eq!(ui.query, "beta");
}

#[tokio::test]
async fn test_empty_query_clears_and_supersedes() {
    let controller = controller();
    let mut ui = UiState::idle();

    let ticket = controller.begin("alpha", &mut ui).unwrap();
    assert!(controller.begin("   ", &mut ui).is_none());
    assert_eq!(ui.phase, SearchPhase::Idle);
    assert!(ui.status.is_empty());

    let outcome = controller.execute(&ticket).await;
    assert!(!controller.is_current(&ticket));
    assert!(!controller.finish(&ticket, &outcome, &mut ui));
    assert!(ui.results_html.is_empty());
}

#[tokio::test]
async fn test_search_renders_results_and_empty_state() {
    let controller = controller();
    let mut ui = UiState::idle();

    let outcome = controller.search("content", &mut ui).await.unwrap();
    assert_eq!(outcome.results.len(), 2);
    assert_eq!(ui.phase, SearchPhase::Rendered);
    assert!(ui.status.is_empty());

    let outcome = controller.search("gamma", &mut ui).await.unwrap();
    assert!(outcome.is_empty());
    assert_eq!(ui.phase, SearchPhase::Empty);
    assert!(ui.results_html.contains(NO_MATCHES));

    assert!(controller.search("", &mut ui).await.is_none());
    assert_eq!(ui.phase, SearchPhase::Idle);
    assert!(ui.results_html.is_empty());
}
