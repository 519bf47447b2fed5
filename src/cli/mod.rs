//! CLI adapter for sitefind
//!
//! Provides the command-line front end for searching a site and for the
//! page maintenance tools. Depends on `core/`; `core/` never depends on it.
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::Config;

/// sitefind - keyword search for static sites
///
/// Fetches every page of a site's catalog, finds the first
/// case-insensitive occurrence of a keyword, and lists matching pages with
/// highlighted snippets.
#[derive(Parser, Debug)]
#[command(name = "sitefind")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "Keyword search for static sites", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Config file (overrides SITEFIND_CONFIG and the XDG location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
    /// The search widget's HTML markup
    Html,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the site's pages for a keyword
    Search(commands::SearchArgs),

    /// Read queries from stdin, one per line; only the newest search is shown
    Repl(commands::ReplArgs),

    /// List the pages of a local site, one per line (usable as a catalog file)
    Catalog(commands::CatalogArgs),

    /// Repair misencoded navigation arrows in every page
    #[command(name = "fix-arrows")]
    FixArrows(commands::RewriteArgs),

    /// Comment out the Index Map button on every page except index.html
    #[command(name = "strip-index-button")]
    StripIndexButton(commands::RewriteArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  sitefind completions bash > ~/.local/share/bash-completion/completions/sitefind
    ///   zsh:   sitefind completions zsh > ~/.zfunc/_sitefind
    ///   fish:  sitefind completions fish > ~/.config/fish/completions/sitefind.fish
    Completions(commands::CompletionsArgs),
}

/// Site options shared by the searching commands
#[derive(Args, Debug, Clone, Default)]
pub struct SiteArgs {
    /// URL of the page the search runs from
    #[arg(long, conflicts_with = "root")]
    pub url: Option<String>,

    /// Local directory holding the site
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Page the search runs from, relative to --root
    #[arg(long)]
    pub page: Option<String>,

    /// Catalog file, one page path per line
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Maximum in-flight fetches (0 = all at once)
    #[arg(long)]
    pub max_concurrent: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum number of results
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Characters of context on each side of the match
    #[arg(long)]
    pub context: Option<usize>,
}

impl SiteArgs {
    /// Apply command-line overrides on top of loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.site.base_url = Some(url.clone());
            config.site.root_dir = None;
        }
        if let Some(root) = &self.root {
            config.site.root_dir = Some(root.clone());
            config.site.base_url = None;
        }
        if let Some(page) = &self.page {
            config.site.page = page.clone();
        }
        if let Some(catalog) = &self.catalog {
            config.site.catalog_file = Some(catalog.clone());
            config.site.catalog.clear();
        }
        if let Some(n) = self.max_concurrent {
            config.fetch.max_concurrent = n;
        }
        if let Some(t) = self.timeout {
            config.fetch.timeout_sec = Some(t);
        }
        if let Some(limit) = self.limit {
            config.search.max_results = limit;
        }
        if let Some(context) = self.context {
            config.search.context_chars = context;
        }
    }
}

/// Load configuration, honouring an explicit `--config` file
pub fn load_config(path: Option<&PathBuf>) -> crate::core::error::Result<Config> {
    match path {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.merge_env();
            config.validate()?;
            Ok(config)
        }
        None => Config::load(),
    }
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::services::Services;

    // Commands that need no site
    match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        Commands::Catalog(args) => return commands::catalog::execute(args, cli.format),
        Commands::FixArrows(args) => {
            return commands::maintenance::execute_fix_arrows(args, cli.format)
        }
        Commands::StripIndexButton(args) => {
            return commands::maintenance::execute_strip_index_button(args, cli.format)
        }
        _ => {}
    }

    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Search(args) => {
            args.site.apply(&mut config);
            config.validate()?;
            config.log_config();
            let services = Services::new(config)?;
            commands::search::execute(args, &services, cli.format).await
        }
        Commands::Repl(args) => {
            args.site.apply(&mut config);
            config.validate()?;
            config.log_config();
            let services = Services::new(config)?;
            commands::repl::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
        Commands::Completions(_)
        | Commands::Catalog(_)
        | Commands::FixArrows(_)
        | Commands::StripIndexButton(_) => unreachable!(), // Handled above
    }
}
