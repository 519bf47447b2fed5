//! Search command - search every catalog page for a keyword

use crate::cli::output::{self, colors};
use crate::cli::{OutputFormat, SiteArgs};
use crate::core::render::{render_widget, UiState};
use crate::core::services::Services;
use crate::core::types::{ResultItem, SearchOutcome};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Keyword or phrase (case-insensitive substring)
    pub query: String,

    #[command(flatten)]
    pub site: SiteArgs,

    /// Only show page links (no snippets)
    #[arg(long)]
    pub files_only: bool,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: usize,
    pub documents_scanned: usize,
    pub documents_failed: usize,
    pub duration_ms: u64,
    pub searched_at: DateTime<Utc>,
    pub results: Vec<ResultItem>,
}

impl SearchResponseOutput {
    pub fn new(outcome: &SearchOutcome, items: Vec<ResultItem>) -> Self {
        Self {
            query: outcome.query.clone(),
            total_results: items.len(),
            documents_scanned: outcome.documents_scanned,
            documents_failed: outcome.documents_failed,
            duration_ms: outcome.duration_ms,
            searched_at: Utc::now(),
            results: items,
        }
    }
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    services.check_query(&args.query)?;

    let mut ui = UiState::idle();
    let outcome = match services.controller.search(&args.query, &mut ui).await {
        Some(outcome) => outcome,
        None => {
            if format == OutputFormat::Human {
                output::print_warning("Empty query, nothing to search");
                return Ok(());
            }
            SearchOutcome::empty(&args.query)
        }
    };
    let items = services.pipeline.items(&outcome);

    match format {
        OutputFormat::Human => print_human(&outcome, &items, args.files_only),
        OutputFormat::Json => {
            let response = SearchResponseOutput::new(&outcome, items);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Html => {
            println!("{}", render_widget(&ui, services.page_context));
        }
    }

    Ok(())
}

/// Print one search outcome for a terminal
pub fn print_human(outcome: &SearchOutcome, items: &[ResultItem], files_only: bool) {
    if items.is_empty() {
        println!("No results found for '{}'", colors::label(&outcome.query));
    } else if files_only {
        for item in items {
            println!("{}", colors::file_path(&item.href));
        }
    } else {
        println!(
            "Found {} result(s) for '{}' in {}:\n",
            colors::number(&items.len().to_string()),
            colors::label(&outcome.query),
            output::format_millis_colored(outcome.duration_ms)
        );

        for item in items {
            println!(
                "[{}] {} {}",
                colors::rank(&item.rank.to_string()),
                colors::title(&item.title),
                colors::file_path(&item.href)
            );
            println!("    {}", output::snippet_to_terminal(&item.snippet_html));
            println!();
        }
    }

    if outcome.documents_failed > 0 {
        output::print_warning(&format!(
            "{} of {} pages could not be fetched",
            outcome.documents_failed,
            outcome.documents_failed + outcome.documents_scanned
        ));
    }
}
