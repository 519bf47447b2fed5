//! Repl command - interactive searching from stdin
//!
//! Each line starts a search without waiting for the previous one. A
//! search that finishes after a newer line was entered is dropped, so only
//! the latest query's results are printed. An empty line clears.

use crate::cli::commands::search::{print_human, SearchResponseOutput};
use crate::cli::output;
use crate::cli::{OutputFormat, SiteArgs};
use crate::core::render::{render_widget, UiState};
use crate::core::services::Services;
use clap::Args;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

/// Arguments for the repl command
#[derive(Args, Debug)]
pub struct ReplArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Only show page links (no snippets)
    #[arg(long)]
    pub files_only: bool,
}

/// What a repl session did, once every search has settled
#[derive(Debug, Clone)]
pub struct ReplSummary {
    /// Searches started (empty lines and rejected queries excluded)
    pub started: usize,
    /// Lines refused by query validation
    pub rejected: usize,
    /// Widget state after the last line
    pub ui: UiState,
}

fn lock(ui: &Mutex<UiState>) -> MutexGuard<'_, UiState> {
    ui.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Execute the repl command
pub async fn execute(
    args: ReplArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if format == OutputFormat::Human {
        output::print_header(&format!(
            "Searching {} pages. One keyword per line, :q or Ctrl-D to quit.",
            services.pipeline.catalog().len()
        ));
    }

    let summary = run(
        BufReader::new(tokio::io::stdin()),
        args.files_only,
        services,
        format,
    )
    .await?;
    tracing::debug!(
        "Repl finished: {} searches, {} rejected",
        summary.started,
        summary.rejected
    );

    Ok(())
}

/// Search each line of `reader` until it ends or a `:q` line
pub async fn run<R: AsyncBufRead + Unpin>(
    reader: R,
    files_only: bool,
    services: &Services,
    format: OutputFormat,
) -> Result<ReplSummary, Box<dyn std::error::Error>> {
    let ui = Arc::new(Mutex::new(UiState::idle()));
    let mut tasks = JoinSet::new();
    let mut lines = reader.lines();
    let mut started = 0;
    let mut rejected = 0;

    while let Some(line) = lines.next_line().await? {
        if matches!(line.trim(), ":q" | ":quit") {
            break;
        }
        if let Err(e) = services.check_query(&line) {
            output::print_error(&e.message());
            rejected += 1;
            continue;
        }

        let ticket = services.controller.begin(&line, &mut lock(&ui));
        let Some(ticket) = ticket else {
            continue;
        };
        started += 1;

        let services = services.clone();
        let ui = Arc::clone(&ui);
        tasks.spawn(async move {
            let outcome = services.controller.execute(&ticket).await;

            let mut state = lock(&ui);
            if !services.controller.finish(&ticket, &outcome, &mut state) {
                return;
            }

            match format {
                OutputFormat::Human => {
                    print_human(&outcome, &services.pipeline.items(&outcome), files_only)
                }
                OutputFormat::Json => {
                    let response =
                        SearchResponseOutput::new(&outcome, services.pipeline.items(&outcome));
                    match serde_json::to_string(&response) {
                        Ok(json) => println!("{json}"),
                        Err(e) => tracing::warn!("Failed to serialize search result: {}", e),
                    }
                }
                OutputFormat::Html => {
                    println!("{}", render_widget(&state, services.page_context));
                }
            }
        });

        // Reap finished searches so a long session does not pile them up
        while tasks.try_join_next().is_some() {}
    }

    // Let in-flight searches finish; superseded ones print nothing
    while tasks.join_next().await.is_some() {}

    let ui = lock(&ui).clone();
    Ok(ReplSummary {
        started,
        rejected,
        ui,
    })
}
