//! Tests for command-line parsing

use clap::Parser;
use sitefind::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_parse_search() {
    let cli = Cli::try_parse_from([
        "sitefind",
        "search",
        "hand hygiene",
        "--root",
        "./site",
        "--page",
        "Task 1 Modules/a.html",
        "-k",
        "5",
        "--format",
        "json",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.query, "hand hygiene");
            assert_eq!(args.site.root, Some("./site".into()));
            assert_eq!(args.site.page.as_deref(), Some("Task 1 Modules/a.html"));
            assert_eq!(args.site.limit, Some(5));
        }
        other => panic!("Expected search command, got {other:?}"),
    }
}

#[test]
fn test_parse_rewrite_commands() {
    let cli = Cli::try_parse_from(["sitefind", "fix-arrows", "./site", "--dry-run"]).unwrap();
    assert!(matches!(cli.command, Commands::FixArrows(ref a) if a.dry_run));

    let cli = Cli::try_parse_from(["sitefind", "strip-index-button", "./site"]).unwrap();
    assert!(matches!(cli.command, Commands::StripIndexButton(ref a) if !a.dry_run));
}

#[test]
fn test_url_and_root_conflict() {
    let result = Cli::try_parse_from([
        "sitefind",
        "search",
        "ppe",
        "--url",
        "https://example.org/index.html",
        "--root",
        "./site",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
