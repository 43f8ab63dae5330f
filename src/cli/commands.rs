//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{
    BegLenReport, OutputFormat, format_beg_len, format_capabilities, format_parts, format_range,
    format_value,
};
use crate::cli::parser::{Cli, Commands};
use crate::core::{RangeValue, Value};
use crate::error::{CommandError, Result};
use crate::normalize::{BegLen, ClampMode, beg_len};
use crate::registry::{CapabilityTable, Registry};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::New {
            start,
            end,
            exclusive,
        } => cmd_new(start, end, *exclusive, format),
        Commands::Values { range } => cmd_values(range, format),
        Commands::BegLen {
            range,
            total,
            begin,
            length,
            mode,
        } => cmd_beg_len(range, *total, *begin, *length, mode, format),
        Commands::Call { method, args } => cmd_call(method, args, format),
        Commands::Capabilities => cmd_capabilities(format),
    }
}

fn cmd_new(start: &str, end: &str, exclusive: bool, format: OutputFormat) -> Result<String> {
    let start = parse_bound_arg(start)?;
    let end = parse_bound_arg(end)?;
    let range = RangeValue::from_parts(start, end, exclusive);
    Ok(format_range(&range, format))
}

fn cmd_values(literal: &str, format: OutputFormat) -> Result<String> {
    let range: RangeValue = literal.parse()?;
    Ok(format_parts(&range, &range.parts(), format))
}

fn cmd_beg_len(
    literal: &str,
    total: i64,
    begin: i64,
    length: i64,
    mode: &str,
    format: OutputFormat,
) -> Result<String> {
    let range: RangeValue = literal.parse()?;
    let mode = ClampMode::parse(mode)?;

    let report = match beg_len(&range, total, mode)? {
        BegLen::Span(span) => BegLenReport {
            begin: span.begin,
            len: span.len,
            status: Some(true),
        },
        // Lenient no-op: the caller's provisional values stand.
        BegLen::OutOfRange => BegLenReport {
            begin,
            len: length,
            status: None,
        },
    };
    Ok(format_beg_len(&range, total, mode, report, format))
}

fn cmd_call(method: &str, args: &[String], format: OutputFormat) -> Result<String> {
    let registry = Registry::with_defaults();
    let args = args
        .iter()
        .map(|arg| parse_value_arg(arg))
        .collect::<Result<Vec<Value>>>()?;
    let result = registry.call(method, &args)?;
    Ok(format_value(&result, format))
}

fn cmd_capabilities(format: OutputFormat) -> Result<String> {
    let table = CapabilityTable::detect();
    let registry = Registry::install(&table);
    Ok(format_capabilities(&table, &registry, format))
}

/// Parses a CLI bound argument: "nil" (or empty) means unbounded.
fn parse_bound_arg(arg: &str) -> Result<Option<i64>> {
    if arg.is_empty() || arg.eq_ignore_ascii_case("nil") {
        return Ok(None);
    }
    arg.parse()
        .map(Some)
        .map_err(|_| CommandError::InvalidArgument(format!("not an integer bound: {arg}")).into())
}

/// Parses a host-style value literal for registry calls.
fn parse_value_arg(arg: &str) -> Result<Value> {
    match arg {
        "nil" => return Ok(Value::Nil),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }
    if let Ok(n) = arg.parse::<i64>() {
        return Ok(Value::Int(n));
    }
    if let Ok(range) = arg.parse::<RangeValue>() {
        return Ok(Value::Range(range));
    }
    Err(CommandError::UnparseableValue(arg.to_string()).into())
}
