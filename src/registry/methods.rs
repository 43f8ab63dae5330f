//! Pass-through method implementations.
//!
//! Each function here is a thin relay: it unmarshals its host-style
//! arguments, delegates to the corresponding primitive, and repackages
//! the result. No validation happens beyond what the primitives perform,
//! and their errors propagate unchanged.
//!
//! Arity is enforced by [`Registry::call`](super::Registry::call) before
//! dispatch; the variadic constructor re-checks its own count since its
//! behavior depends on it.

use crate::core::{RangeValue, Value};
use crate::error::{RegistryError, Result};
#[cfg(feature = "normalize-beg-len")]
use crate::normalize::{BegLen, ClampMode, beg_len};

/// Unmarshals an integer argument.
#[cfg(feature = "normalize-beg-len")]
fn int_arg(method: &'static str, args: &[Value], index: usize) -> Result<i64> {
    let value = args.get(index).ok_or_else(|| RegistryError::WrongArity {
        name: method.to_string(),
        expected: "more".to_string(),
        got: args.len(),
    })?;
    value.as_int().ok_or_else(|| {
        RegistryError::InvalidArgument {
            name: method.to_string(),
            index,
            reason: format!("expected int, got {}", value.type_name()),
        }
        .into()
    })
}

/// Unmarshals a range argument.
#[cfg(any(feature = "decompose-range", feature = "normalize-beg-len"))]
fn range_arg<'a>(method: &'static str, args: &'a [Value], index: usize) -> Result<&'a RangeValue> {
    let value = args.get(index).ok_or_else(|| RegistryError::WrongArity {
        name: method.to_string(),
        expected: "more".to_string(),
        got: args.len(),
    })?;
    value.as_range().ok_or_else(|| {
        RegistryError::InvalidArgument {
            name: method.to_string(),
            index,
            reason: format!("expected range, got {}", value.type_name()),
        }
        .into()
    })
}

/// `range_new(start, end[, exclusive])` — the construction wrapper.
///
/// Two or three positional arguments; with three, the last is read by
/// the host truth convention and selects exclusive-end semantics. The
/// two-argument form is inclusive.
#[cfg(feature = "construct-range")]
pub fn range_new(args: &[Value]) -> Result<Value> {
    if !(2..=3).contains(&args.len()) {
        return Err(RegistryError::WrongArity {
            name: "range_new".to_string(),
            expected: "2..3".to_string(),
            got: args.len(),
        }
        .into());
    }
    let exclusive = args.get(2).is_some_and(Value::is_truthy);
    let start = args[0].as_bound()?;
    let end = args[1].as_bound()?;
    Ok(Value::Range(RangeValue::from_parts(start, end, exclusive)))
}

/// `range_values(range)` — the decomposition wrapper.
///
/// Returns the range's (start, end, exclusive) triple as a fixed
/// 3-element list, nil standing in for missing bounds.
#[cfg(feature = "decompose-range")]
pub fn range_values(args: &[Value]) -> Result<Value> {
    let parts = range_arg("range_values", args, 0)?.parts();
    Ok(Value::List(vec![
        Value::from(parts.start),
        Value::from(parts.end),
        Value::Bool(parts.exclusive),
    ]))
}

/// `range_beg_len(range, begin, length, total_len, err_flag)` — the
/// normalization wrapper.
///
/// Returns a fixed 3-element list: begin offset, length, and status.
/// On success the offsets are the normalized span and the status is
/// true; on a lenient out-of-range request the caller's provisional
/// begin and length come back unchanged with a nil status; raising
/// modes propagate the primitive's error.
#[cfg(feature = "normalize-beg-len")]
pub fn range_beg_len(args: &[Value]) -> Result<Value> {
    const NAME: &str = "range_beg_len";

    let range = range_arg(NAME, args, 0)?;
    let provisional_begin = int_arg(NAME, args, 1)?;
    let provisional_len = int_arg(NAME, args, 2)?;
    let total_len = int_arg(NAME, args, 3)?;
    let mode = ClampMode::from_flag(int_arg(NAME, args, 4)?)?;

    let (begin, len, status) = match beg_len(range, total_len, mode)? {
        BegLen::Span(span) => (span.begin, span.len, Value::Bool(true)),
        BegLen::OutOfRange => (provisional_begin, provisional_len, Value::Nil),
    };
    Ok(Value::List(vec![
        Value::Int(begin),
        Value::Int(len),
        status,
    ]))
}
