//! Error types for rangekit operations.
//!
//! This module provides the error hierarchy using `thiserror` for all
//! rangekit operations including range construction, normalization,
//! registry dispatch, and CLI commands.

use thiserror::Error;

/// Result type alias for rangekit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for rangekit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Range-related errors (construction and normalization).
    #[error("range error: {0}")]
    Range(#[from] RangeError),

    /// Registry dispatch errors.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Range-specific errors for construction and normalization.
#[derive(Error, Debug)]
pub enum RangeError {
    /// A boundary value was not usable as a range bound.
    #[error("bad value for range bound: {value}")]
    InvalidBound {
        /// Display form of the offending value.
        value: String,
    },

    /// A range fell outside the target length in a raising mode.
    #[error("{range} out of range")]
    OutOfRange {
        /// Display form of the range that was rejected.
        range: String,
    },

    /// A range literal could not be parsed.
    #[error("invalid range literal: {literal}")]
    InvalidLiteral {
        /// The literal that failed to parse.
        literal: String,
    },

    /// An unrecognized clamp mode.
    #[error("invalid clamp mode: {value} (expected lenient, extend, strict, or 0-2)")]
    InvalidMode {
        /// The mode value that was rejected.
        value: String,
    },

    /// A negative total length was supplied for normalization.
    #[error("negative total length: {len}")]
    NegativeLength {
        /// The length that was rejected.
        len: i64,
    },
}

/// Registry-specific errors for method dispatch.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Method name not installed in the registry.
    #[error("unknown method: {name}")]
    UnknownMethod {
        /// The method name that was not found.
        name: String,
    },

    /// Argument count does not satisfy the method's arity.
    #[error("wrong number of arguments for {name}: expected {expected}, got {got}")]
    WrongArity {
        /// The method name.
        name: String,
        /// Human-readable arity description.
        expected: String,
        /// Number of arguments actually supplied.
        got: usize,
    },

    /// Argument was not of the type the method requires.
    #[error("argument {index} of {name}: {reason}")]
    InvalidArgument {
        /// The method name.
        name: String,
        /// Zero-based argument position.
        index: usize,
        /// Reason the argument was rejected.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Argument value could not be parsed as a host value.
    #[error("unparseable value: {0}")]
    UnparseableValue(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Command(CommandError::OutputFormat(err.to_string()))
    }
}
