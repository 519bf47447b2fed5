//! Maintenance commands - in-place repairs for site pages

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::maintenance::{
    ArrowRepair, IndexButtonRemoval, Rewrite, RewriteStats, SiteRewriter,
};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the rewrite commands
#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Site directory to rewrite
    pub dir: PathBuf,

    /// Report what would change without writing
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

/// Execute the fix-arrows command
pub fn execute_fix_arrows(
    args: RewriteArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    execute(args, &ArrowRepair, format)
}

/// Execute the strip-index-button command
pub fn execute_strip_index_button(
    args: RewriteArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    execute(args, &IndexButtonRemoval, format)
}

fn execute(
    args: RewriteArgs,
    rewrite: &dyn Rewrite,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = SiteRewriter::new(&args.dir, args.dry_run).run(rewrite)?;

    match format {
        OutputFormat::Human | OutputFormat::Html => print_human(rewrite.name(), &stats),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }

    Ok(())
}

fn print_human(name: &str, stats: &RewriteStats) {
    let verb = if stats.dry_run { "Would update" } else { "Updated" };
    for path in &stats.changed_paths {
        println!(
            "  {} {}",
            colors::dim(verb),
            colors::file_path(&path.display().to_string())
        );
    }

    let summary = format!(
        "{name}: {} of {} pages {}",
        stats.files_changed,
        stats.files_scanned,
        if stats.dry_run {
            "need changes (dry run)"
        } else {
            "changed"
        }
    );
    if stats.files_changed == 0 {
        println!("{}", colors::dim(&summary));
    } else {
        output::print_success(&summary);
    }
}
