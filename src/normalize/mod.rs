//! Range to offset/length normalization.
//!
//! Converts a range value plus a collection length into a clamped-or-
//! rejected `(begin, length)` span: negative-from-end bounds resolve
//! against the total length, inclusive ends gain one, and out-of-bounds
//! requests are clamped, rejected, or allowed to extend past the end
//! depending on the [`ClampMode`].
//!
//! The contract follows the classic scripting-host convention: a span
//! on success, a designated no-op outcome for lenient out-of-range
//! requests, and an error in the raising modes.

use crate::core::RangeValue;
use crate::error::RangeError;
use serde::{Deserialize, Serialize};

/// Strictness mode for normalization, with the conventional 0/1/2
/// flag encoding used at the registry boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClampMode {
    /// Flag 0: clamp the end to the total length; out-of-range begins
    /// yield a no-op outcome instead of an error.
    Lenient,
    /// Flag 1: never clamp and never bounds-check the begin against the
    /// total length, so spans may point past the end (splice-style
    /// growth). Negative begins that stay negative still error.
    Extend,
    /// Flag 2: clamp the end like lenient mode, but out-of-range begins
    /// are errors.
    Strict,
}

impl ClampMode {
    /// Resolves a mode from its integer flag.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidMode`] for flags outside 0..=2.
    pub fn from_flag(flag: i64) -> Result<Self, RangeError> {
        match flag {
            0 => Ok(Self::Lenient),
            1 => Ok(Self::Extend),
            2 => Ok(Self::Strict),
            _ => Err(RangeError::InvalidMode {
                value: flag.to_string(),
            }),
        }
    }

    /// Returns the integer flag for this mode.
    #[must_use]
    pub const fn flag(self) -> i64 {
        match self {
            Self::Lenient => 0,
            Self::Extend => 1,
            Self::Strict => 2,
        }
    }

    /// Parses a mode from a name or flag digit.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidMode`] for unrecognized input.
    pub fn parse(s: &str) -> Result<Self, RangeError> {
        match s.to_lowercase().as_str() {
            "lenient" | "0" => Ok(Self::Lenient),
            "extend" | "1" => Ok(Self::Extend),
            "strict" | "2" => Ok(Self::Strict),
            _ => Err(RangeError::InvalidMode {
                value: s.to_string(),
            }),
        }
    }

    /// Whether this mode clamps the end and bounds-checks the begin.
    const fn clamps(self) -> bool {
        matches!(self, Self::Lenient | Self::Strict)
    }

    /// Whether out-of-range requests are errors in this mode.
    const fn raises(self) -> bool {
        matches!(self, Self::Extend | Self::Strict)
    }
}

/// A normalized `(begin, length)` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSpan {
    /// Begin offset, resolved to `0..=total_len` in the clamping modes.
    pub begin: i64,

    /// Span length, never negative.
    pub len: i64,
}

/// Outcome of a normalization request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BegLen {
    /// The request resolved to a valid span.
    Span(NormalizedSpan),
    /// Lenient mode's designated no-op: the request was out of range
    /// and the caller's provisional values should stand.
    OutOfRange,
}

impl BegLen {
    /// Returns the span, if the request resolved to one.
    #[must_use]
    pub const fn span(&self) -> Option<NormalizedSpan> {
        match self {
            Self::Span(span) => Some(*span),
            Self::OutOfRange => None,
        }
    }

    /// Returns `true` for the lenient no-op outcome.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange)
    }
}

/// Normalizes a range against a total length.
///
/// Missing bounds default to the collection edges (beginless start is 0,
/// endless end is the last element, and an endless range is always
/// inclusive). Negative bounds resolve from the end.
///
/// # Errors
///
/// Returns [`RangeError::NegativeLength`] for a negative `total_len`,
/// and [`RangeError::OutOfRange`] when the request falls outside the
/// collection in a raising mode.
///
/// # Examples
///
/// ```
/// use rangekit_rs::core::RangeValue;
/// use rangekit_rs::normalize::{ClampMode, beg_len};
///
/// let outcome = beg_len(&RangeValue::new(1, 5), 10, ClampMode::Strict).unwrap();
/// let span = outcome.span().unwrap();
/// assert_eq!((span.begin, span.len), (1, 5));
/// ```
pub fn beg_len(range: &RangeValue, total_len: i64, mode: ClampMode) -> Result<BegLen, RangeError> {
    if total_len < 0 {
        return Err(RangeError::NegativeLength { len: total_len });
    }

    let mut beg = range.start.unwrap_or(0);
    let mut end = range.end.unwrap_or(-1);
    // An endless range has no end boundary to exclude.
    let exclusive = range.exclusive && !range.is_endless();

    if beg < 0 {
        beg += total_len;
        if beg < 0 {
            return reject(range, mode);
        }
    }
    if end < 0 {
        end += total_len;
    }
    if !exclusive {
        // Include the end point. A saturated end is capped below in the
        // clamping modes; extend mode cannot represent a span past the
        // integer limit.
        end = match end.checked_add(1) {
            Some(n) => n,
            None if mode.clamps() => i64::MAX,
            None => return reject(range, mode),
        };
    }
    if mode.clamps() {
        if beg > total_len {
            return reject(range, mode);
        }
        if end > total_len {
            end = total_len;
        }
    }

    // beg is non-negative here, so the subtraction can only saturate
    // toward the negative side, which collapses to an empty span.
    let len = end.saturating_sub(beg).max(0);
    Ok(BegLen::Span(NormalizedSpan { begin: beg, len }))
}

fn reject(range: &RangeValue, mode: ClampMode) -> Result<BegLen, RangeError> {
    if mode.raises() {
        Err(RangeError::OutOfRange {
            range: range.to_string(),
        })
    } else {
        Ok(BegLen::OutOfRange)
    }
}
