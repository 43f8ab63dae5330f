//! Core domain models for rangekit.
//!
//! This module contains the fundamental data structures used throughout
//! the crate: range values, their decomposed parts, and the dynamic
//! value model used at the registry boundary. These are pure domain
//! models with no I/O dependencies.

pub mod range;
pub mod value;

pub use range::{RangeParts, RangeValue};
pub use value::Value;
