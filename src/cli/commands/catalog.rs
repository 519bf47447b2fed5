//! Catalog command - list the pages of a local site

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::catalog::Catalog;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the catalog command
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Site directory to walk
    pub dir: PathBuf,
}

/// Catalog response
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub root: String,
    pub total_pages: usize,
    pub pages: Vec<String>,
}

/// Execute the catalog command
///
/// Human output is one path per line so it can be saved as a catalog file.
pub fn execute(args: CatalogArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::discover(&args.dir)?;

    match format {
        OutputFormat::Human | OutputFormat::Html => {
            if catalog.is_empty() {
                eprintln!(
                    "No pages found under {}",
                    colors::file_path(&args.dir.display().to_string())
                );
            }
            for path in catalog.iter() {
                println!("{path}");
            }
        }
        OutputFormat::Json => {
            let response = CatalogResponse {
                root: args.dir.display().to_string(),
                total_pages: catalog.len(),
                pages: catalog.entries().to_vec(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
