//! Completions command - generate shell completion scripts

use crate::cli::output;
use crate::cli::Cli;
use clap::{Args, CommandFactory};
use clap_complete::{generate, generate_to, Shell};
use std::io;
use std::path::PathBuf;

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script into this directory instead of stdout
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Cli::command();

    match args.dir {
        Some(dir) => {
            let path = generate_to(args.shell, &mut cmd, "sitefind", &dir)?;
            output::print_success(&format!("Wrote {}", path.display()));
        }
        None => generate(args.shell, &mut cmd, "sitefind", &mut io::stdout().lock()),
    }
    Ok(())
}
