//! Tests for page maintenance passes over a site directory

use crate::common::TestSite;
use sitefind::core::maintenance::{ArrowRepair, IndexButtonRemoval, SiteRewriter};
use std::path::PathBuf;

/// `←` and `→` after a UTF-8 to Windows-1252 round trip
const LEFT: &str = "\u{e2}\u{2020}\u{90}";
const RIGHT: &str = "\u{e2}\u{2020}\u{2019}";
/// `↑` mangled the same way; not a navigation arrow
const UP: &str = "\u{e2}\u{2020}\u{2018}";

const BUTTON: &str = r#"<div class="top-nav">
  <a href="../index.html" class="index-map-btn">Index Map</a>
</div>"#;

fn maintenance_site() -> TestSite {
    TestSite::with_files(&[
        ("index.html", format!("<body>{BUTTON}<p>Next {RIGHT}</p></body>")),
        (
            "Task 1 Modules/module 1.html",
            format!("<body>{BUTTON}<a>{LEFT} Back</a> <a>Next {RIGHT}</a> <a>{UP} Top</a></body>"),
        ),
        ("Task 1 Modules/notes.txt", format!("{RIGHT} left alone")),
        (".drafts/old.html", format!("{RIGHT} hidden")),
    ])
}

#[test]
fn test_fix_arrows_rewrites_pages() {
    let site = maintenance_site();

    let stats = SiteRewriter::new(site.path(), false).run(&ArrowRepair).unwrap();

    assert_eq!(stats.files_scanned, 2);
    assert_eq!(stats.files_changed, 2);
    assert_eq!(
        stats.changed_paths,
        vec![
            PathBuf::from("Task 1 Modules/module 1.html"),
            PathBuf::from("index.html"),
        ]
    );
    let module = site.read("Task 1 Modules/module 1.html");
    assert!(module.contains("<a>← Back</a> <a>Next →</a>"));
    assert!(module.contains(&format!("<a>{UP} Top</a>")));
    assert!(!module.contains('\u{90}'));
    assert!(site.read("index.html").contains("Next →"));
    assert_eq!(
        site.read("Task 1 Modules/notes.txt"),
        format!("{RIGHT} left alone")
    );
    assert_eq!(site.read(".drafts/old.html"), format!("{RIGHT} hidden"));

    // A second pass finds nothing to do
    let again = SiteRewriter::new(site.path(), false).run(&ArrowRepair).unwrap();
    assert_eq!(again.files_changed, 0);
}

#[test]
fn test_dry_run_writes_nothing() {
    let site = maintenance_site();
    let before = site.read("index.html");

    let stats = SiteRewriter::new(site.path(), true).run(&ArrowRepair).unwrap();

    assert!(stats.dry_run);
    assert_eq!(stats.files_changed, 2);
    assert_eq!(site.read("index.html"), before);
}

#[test]
fn test_strip_index_button_skips_home_page() {
    let site = maintenance_site();

    let stats = SiteRewriter::new(site.path(), false)
        .run(&IndexButtonRemoval)
        .unwrap();

    assert_eq!(stats.files_scanned, 1);
    assert_eq!(stats.files_changed, 1);

    let module = site.read("Task 1 Modules/module 1.html");
    assert!(module.contains("<!-- <div class=\"top-nav\">"));
    assert!(module.contains("</div> -->"));
    assert!(!site.read("index.html").contains("<!--"));

    let again = SiteRewriter::new(site.path(), false)
        .run(&IndexButtonRemoval)
        .unwrap();
    assert_eq!(again.files_changed, 0);
}

#[test]
fn test_missing_directory_is_not_found() {
    let err = SiteRewriter::new("/nonexistent/sitefind/site", false)
        .run(&ArrowRepair)
        .unwrap_err();
    assert!(err.is_not_found());
}
