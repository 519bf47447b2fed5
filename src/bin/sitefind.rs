//! sitefind CLI - keyword search for static sites
//!
//! Searches every page of a site for a keyword and lists the matches with
//! highlighted snippets. Also carries the page maintenance tools.
//!
//! # Examples
//!
//! ```bash
//! # Search a local site, running from a sub-page
//! sitefind search "ppe" --root ./site --page "Task 1 Modules/a.html"
//!
//! # Search a published site
//! sitefind search "hand hygiene" --url https://example.org/course/index.html --catalog pages.txt
//!
//! # Write a catalog file for a local site
//! sitefind catalog ./site > pages.txt
//!
//! # Repair navigation arrows, showing what would change first
//! sitefind fix-arrows ./site --dry-run
//! ```

use clap::Parser;
use sitefind::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose {
        "sitefind=debug"
    } else {
        "sitefind=warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // stdout carries command output
        .with_env_filter(filter);

    if std::env::var_os("SITEFIND_LOG_JSON").is_some() {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
