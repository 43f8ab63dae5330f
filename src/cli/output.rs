//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{RangeParts, RangeValue, Value};
use crate::error::Error;
use crate::normalize::ClampMode;
use crate::registry::{CapabilityTable, Registry};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a constructed range.
#[must_use]
pub fn format_range(range: &RangeValue, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{range}\n"),
        OutputFormat::Json => format_json(range),
    }
}

/// Formats a decomposed (start, end, exclusive) triple.
#[must_use]
pub fn format_parts(range: &RangeValue, parts: &RangeParts, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "Range {range}");
            let _ = writeln!(output, "  Start:     {}", bound_text(parts.start));
            let _ = writeln!(output, "  End:       {}", bound_text(parts.end));
            let _ = writeln!(output, "  Exclusive: {}", parts.exclusive);
            output
        }
        OutputFormat::Json => format_json(parts),
    }
}

/// The resolved result of a normalization request: the (possibly
/// rewritten) begin/length pair and the status, `None` standing for the
/// lenient no-op's nil.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BegLenReport {
    /// Begin offset (provisional value on a no-op).
    pub begin: i64,
    /// Length (provisional value on a no-op).
    pub len: i64,
    /// `Some(true)` on success, `None` for the lenient no-op.
    pub status: Option<bool>,
}

/// Formats a normalization result.
#[must_use]
pub fn format_beg_len(
    range: &RangeValue,
    total_len: i64,
    mode: ClampMode,
    report: BegLenReport,
    format: OutputFormat,
) -> String {
    #[derive(Serialize)]
    struct FullReport {
        range: String,
        total_len: i64,
        mode: ClampMode,
        #[serde(flatten)]
        report: BegLenReport,
    }

    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let mode_name = match mode {
                ClampMode::Lenient => "lenient",
                ClampMode::Extend => "extend",
                ClampMode::Strict => "strict",
            };
            let _ = writeln!(
                output,
                "Range {range} against length {total_len} ({mode_name})"
            );
            let _ = writeln!(output, "  Begin:  {}", report.begin);
            let _ = writeln!(output, "  Length: {}", report.len);
            let _ = writeln!(
                output,
                "  Status: {}",
                if report.status.is_some() {
                    "true"
                } else {
                    "nil (out of range)"
                }
            );
            output
        }
        OutputFormat::Json => format_json(&FullReport {
            range: range.to_string(),
            total_len,
            mode,
            report,
        }),
    }
}

/// Formats a registry call result.
#[must_use]
pub fn format_value(value: &Value, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{value}\n"),
        OutputFormat::Json => format_json(value),
    }
}

/// Formats the capability table and installed methods.
#[must_use]
pub fn format_capabilities(
    table: &CapabilityTable,
    registry: &Registry,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("Capabilities:\n");
            let _ = writeln!(
                output,
                "{:<18} {:<15} {:<6} Available",
                "Name", "Method", "Arity"
            );
            output.push_str(&"-".repeat(50));
            output.push('\n');
            for entry in table.entries() {
                let method = registry.get(entry.capability.method_name());
                let arity = method.map_or_else(|| "-".to_string(), |m| m.arity.host_flag().to_string());
                let _ = writeln!(
                    output,
                    "{:<18} {:<15} {:<6} {}",
                    entry.capability.name(),
                    entry.capability.method_name(),
                    arity,
                    if entry.available { "yes" } else { "no" }
                );
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct CapabilitiesReport<'a> {
                capabilities: &'a CapabilityTable,
                methods: Vec<&'static str>,
            }
            format_json(&CapabilitiesReport {
                capabilities: table,
                methods: registry.method_names(),
            })
        }
    }
}

/// Formats an error for the selected output format.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorReport {
                error: String,
            }
            format_json(&ErrorReport {
                error: err.to_string(),
            })
        }
    }
}

/// Formats any serializable value as pretty-printed JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Display form of an optional bound.
fn bound_text(bound: Option<i64>) -> String {
    bound.map_or_else(|| "nil".to_string(), |n| n.to_string())
}
