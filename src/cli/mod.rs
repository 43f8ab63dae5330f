//! CLI layer for rangekit.
//!
//! Provides the command-line interface using clap, with commands for
//! constructing, decomposing, and normalizing ranges, and for driving
//! the method registry directly.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
