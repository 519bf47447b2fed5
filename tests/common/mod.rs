// Common test utilities and fixtures

pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in unit tests but are used in integration tests
#[allow(unused_imports)]
pub use fixtures::{page, untitled_page, MapSource, TestSite};
#[allow(unused_imports)]
pub use helpers::{create_site_services, pipeline_for, serve_pages};
