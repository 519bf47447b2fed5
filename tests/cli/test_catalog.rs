//! Tests for the catalog CLI command

use crate::common::TestSite;
use sitefind::cli::commands::catalog::{execute, CatalogArgs};
use sitefind::cli::OutputFormat;

#[test]
fn test_catalog_lists_site() {
    let site = TestSite::course();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = CatalogArgs {
            dir: site.path().to_path_buf(),
        };
        assert!(execute(args, format).is_ok());
    }
}

#[test]
fn test_catalog_missing_directory() {
    let args = CatalogArgs {
        dir: "/nonexistent/sitefind/site".into(),
    };
    let err = execute(args, OutputFormat::Human).unwrap_err();
    assert!(err.to_string().contains("Site directory not found"));
}
