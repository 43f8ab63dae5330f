//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};

/// rangekit-rs: scripting-host range primitives.
///
/// Construct, decompose, and normalize range values, or dispatch
/// through the capability-gated method registry.
#[derive(Parser, Debug)]
#[command(name = "rangekit-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true, env = "RANGEKIT_FORMAT")]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Construct a range from two bounds.
    New {
        /// Start bound ("nil" for beginless).
        #[arg(allow_hyphen_values = true)]
        start: String,

        /// End bound ("nil" for endless).
        #[arg(allow_hyphen_values = true)]
        end: String,

        /// Exclude the end boundary from membership.
        #[arg(short = 'x', long)]
        exclusive: bool,
    },

    /// Decompose a range literal into its (start, end, exclusive) triple.
    Values {
        /// Range literal, e.g. "1..5" or "1...5".
        #[arg(allow_hyphen_values = true)]
        range: String,
    },

    /// Normalize a range against a collection length.
    BegLen {
        /// Range literal, e.g. "1..5" or "-3...".
        #[arg(allow_hyphen_values = true)]
        range: String,

        /// Total length of the collection.
        #[arg(short, long)]
        total: i64,

        /// Provisional begin offset, echoed on a lenient no-op.
        #[arg(long, default_value = "0")]
        begin: i64,

        /// Provisional length, echoed on a lenient no-op.
        #[arg(long, default_value = "0")]
        length: i64,

        /// Clamp mode: lenient, extend, strict, or the 0-2 flag.
        #[arg(short, long, default_value = "lenient")]
        mode: String,
    },

    /// Dispatch a method call through the registry.
    ///
    /// Arguments are host-style value literals: integers, "true",
    /// "false", "nil", or range literals.
    Call {
        /// Method name, e.g. "range_new".
        method: String,

        /// Positional arguments for the method.
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List the capability table and installed methods.
    Capabilities,
}
