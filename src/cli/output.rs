//! Output formatting for the summation result.
//!
//! Supports text and JSON output formats. Whatever the format, the result
//! is rendered once and emitted as two identical lines; the duplicated line
//! is a deliberate part of the output contract.

use crate::core::Term;
use crate::error::Error;
use serde::Serialize;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain decimal output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string, falling back to text.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats the sum as the two-line output contract.
///
/// Text format renders the decimal value (or `NaN`); JSON format renders a
/// one-line object `{"sum": ...}`. Both emit the same rendered line twice.
#[must_use]
pub fn format_sum(sum: Term, format: OutputFormat) -> String {
    let line = match format {
        OutputFormat::Text => sum.to_string(),
        OutputFormat::Json => format_json(&serde_json::json!({ "sum": sum })),
    };
    format!("{line}\n{line}\n")
}

/// Formats an error for display.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => format_json(&serde_json::json!({ "error": err.to_string() })),
    }
}

/// Formats a value as single-line JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}
