//! Tests for the fix-arrows and strip-index-button CLI commands

use crate::common::TestSite;
use sitefind::cli::commands::maintenance::{
    execute_fix_arrows, execute_strip_index_button, RewriteArgs,
};
use sitefind::cli::OutputFormat;

fn site() -> TestSite {
    TestSite::with_files(&[
        ("index.html", "<p>Next \u{e2}\u{2020}\u{2019}</p>"),
        (
            "module.html",
            "<div><a class=\"index-map-btn\" href=\"index.html\">Index Map</a></div>",
        ),
    ])
}

#[test]
fn test_fix_arrows_command() {
    let site = site();
    let args = RewriteArgs {
        dir: site.path().to_path_buf(),
        dry_run: false,
    };

    assert!(execute_fix_arrows(args, OutputFormat::Human).is_ok());
    assert_eq!(site.read("index.html"), "<p>Next →</p>");
}

#[test]
fn test_fix_arrows_dry_run_json() {
    let site = site();
    let args = RewriteArgs {
        dir: site.path().to_path_buf(),
        dry_run: true,
    };

    assert!(execute_fix_arrows(args, OutputFormat::Json).is_ok());
    assert_eq!(
        site.read("index.html"),
        "<p>Next \u{e2}\u{2020}\u{2019}</p>"
    );
}

#[test]
fn test_strip_index_button_command() {
    let site = site();
    let args = RewriteArgs {
        dir: site.path().to_path_buf(),
        dry_run: false,
    };

    assert!(execute_strip_index_button(args, OutputFormat::Human).is_ok());
    assert!(site.read("module.html").starts_with("<!-- <div>"));
}
