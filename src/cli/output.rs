//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable,
//! JSON or HTML formats. Supports colored output (respects NO_COLOR env var).

use crate::cli::OutputFormat;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for page titles
    pub fn title(s: &str) -> ColoredString {
        s.cyan().bold()
    }

    /// Style for page links and file paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for the matched text inside a snippet
    pub fn highlight(s: &str) -> ColoredString {
        s.black().on_yellow()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Format duration into human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        let ms = secs * 1000.0;
        format!("{ms:.0}ms")
    }
}

/// Format milliseconds with color
pub fn format_millis_colored(ms: u64) -> String {
    format!("{}", colors::number(&format_duration(ms as f64 / 1000.0)))
}

/// Undo the entity escaping applied to snippets and titles
pub fn unescape_html(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Turn snippet markup into terminal text, coloring the `<mark>` span
pub fn snippet_to_terminal(snippet_html: &str) -> String {
    let mut out = String::new();
    let mut rest = snippet_html;

    while let Some(start) = rest.find("<mark>") {
        out.push_str(&unescape_html(&rest[..start]));
        rest = &rest[start + "<mark>".len()..];

        let end = rest.find("</mark>").unwrap_or(rest.len());
        out.push_str(&colors::highlight(&unescape_html(&rest[..end])).to_string());
        rest = rest.get(end + "</mark>".len()..).unwrap_or("");
    }
    out.push_str(&unescape_html(rest));
    out
}

/// Print output based on format
pub fn print_output<T: serde::Serialize>(data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Human | OutputFormat::Html => {
            // Human and HTML formats should be handled by the caller
            // This is a fallback that just prints JSON
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
