//! # rangekit-rs
//!
//! Scripting-host range primitives for Rust.
//!
//! rangekit provides the three classic range operations a scripting host
//! exposes to embedders: constructing a range value from two bounds and
//! an exclusivity flag, decomposing a range into its (start, end,
//! exclusive) triple, and normalizing a range against a collection
//! length into a clamped-or-rejected (begin, length) span. A
//! capability-gated method registry mirrors the host-extension dispatch
//! surface on top of the primitives.
//!
//! ## Features
//!
//! - **Range values**: optional bounds (beginless/endless), end
//!   exclusivity, literal parsing (`1..5`, `1...5`)
//! - **Normalization**: negative-from-end resolution with lenient,
//!   extend, and strict clamp modes
//! - **Registry**: named methods with arity checking, installed from a
//!   capability table resolved at startup
//! - **Capability gating**: one cargo feature per primitive method

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod normalize;
pub mod registry;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::{RangeParts, RangeValue, Value};

// Re-export normalization types
pub use normalize::{BegLen, ClampMode, NormalizedSpan, beg_len};

// Re-export registry types
pub use registry::{Arity, Capability, CapabilityTable, Registry};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
