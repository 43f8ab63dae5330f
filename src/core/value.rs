//! Host-style dynamic values.
//!
//! The method registry marshals arguments and results the way a scripting
//! host does: as dynamically typed values. [`Value`] is the small object
//! model standing in for the host's at that boundary, including its
//! truthiness convention (nil and false are falsy, everything else truthy).

use crate::core::range::RangeValue;
use crate::error::RangeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamically typed value at the registry boundary.
///
/// # Examples
///
/// ```
/// use rangekit_rs::core::Value;
///
/// assert!(!Value::Nil.is_truthy());
/// assert!(Value::Int(0).is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// The nil singleton.
    Nil,
    /// A boolean.
    Bool(bool),
    /// A boxed integer.
    Int(i64),
    /// A range value.
    Range(RangeValue),
    /// An ordered sequence of values.
    List(Vec<Value>),
}

impl Value {
    /// Applies the host truth convention: nil and false are falsy,
    /// everything else (including 0) is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Returns the integer payload, if this is an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the range payload, if this is a range.
    #[must_use]
    pub const fn as_range(&self) -> Option<&RangeValue> {
        match self {
            Self::Range(range) => Some(range),
            _ => None,
        }
    }

    /// Interprets the value as a range bound: nil means unbounded,
    /// integers are bounds, anything else is rejected.
    pub fn as_bound(&self) -> Result<Option<i64>, RangeError> {
        match self {
            Self::Nil => Ok(None),
            Self::Int(n) => Ok(Some(*n)),
            other => Err(RangeError::InvalidBound {
                value: other.to_string(),
            }),
        }
    }

    /// Returns a short name for the value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Range(_) => "range",
            Self::List(_) => "list",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Range(range) => write!(f, "{range}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<RangeValue> for Value {
    fn from(range: RangeValue) -> Self {
        Self::Range(range)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<Option<i64>> for Value {
    fn from(bound: Option<i64>) -> Self {
        bound.map_or(Self::Nil, Self::Int)
    }
}
