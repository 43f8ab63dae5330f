//! Range values.
//!
//! A [`RangeValue`] mirrors the composite a scripting host hands around:
//! a start boundary, an end boundary, and a flag indicating whether the
//! end boundary is excluded from membership. Either boundary may be
//! absent (beginless/endless ranges).

use crate::error::RangeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A range value with optional integer bounds and end exclusivity.
///
/// # Examples
///
/// ```
/// use rangekit_rs::core::RangeValue;
///
/// let range = RangeValue::new(1, 5);
/// assert!(!range.exclusive);
/// assert_eq!(range.to_string(), "1..5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeValue {
    /// Start boundary; `None` for a beginless range.
    pub start: Option<i64>,

    /// End boundary; `None` for an endless range.
    pub end: Option<i64>,

    /// Whether the end boundary is excluded from membership.
    pub exclusive: bool,
}

/// The decomposed form of a range value: an ordered
/// (start, end, exclusive) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeParts {
    /// Start boundary; `None` for a beginless range.
    pub start: Option<i64>,

    /// End boundary; `None` for an endless range.
    pub end: Option<i64>,

    /// Whether the end boundary is excluded.
    pub exclusive: bool,
}

impl RangeValue {
    /// Creates an inclusive range from two bounds.
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            exclusive: false,
        }
    }

    /// Creates an exclusive-end range from two bounds.
    #[must_use]
    pub const fn exclusive(start: i64, end: i64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            exclusive: true,
        }
    }

    /// Creates a range from its decomposed parts.
    ///
    /// This is the explicit form of the host's variadic constructor:
    /// one required bound pair plus an exclusivity flag.
    #[must_use]
    pub const fn from_parts(start: Option<i64>, end: Option<i64>, exclusive: bool) -> Self {
        Self {
            start,
            end,
            exclusive,
        }
    }

    /// Decomposes the range into its (start, end, exclusive) triple.
    #[must_use]
    pub const fn parts(&self) -> RangeParts {
        RangeParts {
            start: self.start,
            end: self.end,
            exclusive: self.exclusive,
        }
    }

    /// Returns `true` if the range has no start boundary.
    #[must_use]
    pub const fn is_beginless(&self) -> bool {
        self.start.is_none()
    }

    /// Returns `true` if the range has no end boundary.
    #[must_use]
    pub const fn is_endless(&self) -> bool {
        self.end.is_none()
    }

    /// Returns `true` if the value lies within the range's boundaries.
    ///
    /// Missing boundaries are unbounded on their side; an exclusive end
    /// rejects the end boundary itself.
    #[must_use]
    pub fn covers(&self, value: i64) -> bool {
        if let Some(start) = self.start
            && value < start
        {
            return false;
        }
        match self.end {
            Some(end) if self.exclusive => value < end,
            Some(end) => value <= end,
            None => true,
        }
    }
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        f.write_str(if self.exclusive { "..." } else { ".." })?;
        if let Some(end) = self.end {
            write!(f, "{end}")?;
        }
        Ok(())
    }
}

impl FromStr for RangeValue {
    type Err = RangeError;

    /// Parses a range literal: `a..b` (inclusive) or `a...b` (exclusive),
    /// with either bound optionally omitted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lhs, rhs, exclusive) = if let Some((lhs, rhs)) = s.split_once("...") {
            (lhs, rhs, true)
        } else if let Some((lhs, rhs)) = s.split_once("..") {
            (lhs, rhs, false)
        } else {
            return Err(RangeError::InvalidLiteral {
                literal: s.to_string(),
            });
        };

        let start = parse_bound(lhs, s)?;
        let end = parse_bound(rhs, s)?;
        Ok(Self {
            start,
            end,
            exclusive,
        })
    }
}

/// Parses one side of a range literal; empty means unbounded.
fn parse_bound(text: &str, literal: &str) -> Result<Option<i64>, RangeError> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| RangeError::InvalidLiteral {
            literal: literal.to_string(),
        })
}
