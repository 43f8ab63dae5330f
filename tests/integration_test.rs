//! Integration tests for rangekit-rs.

#![allow(clippy::expect_used)]

use rangekit_rs::core::{RangeValue, Value};
use rangekit_rs::normalize::{BegLen, ClampMode, beg_len};
use rangekit_rs::registry::{Capability, CapabilityTable, Registry};

/// Helper to read a 3-element list result.
fn triple(value: &Value) -> (&Value, &Value, &Value) {
    match value {
        Value::List(items) if items.len() == 3 => (&items[0], &items[1], &items[2]),
        other => panic!("expected 3-element list, got {other}"),
    }
}

#[test]
#[cfg(all(feature = "construct-range", feature = "decompose-range"))]
fn test_construct_two_args_then_decompose() {
    let registry = Registry::with_defaults();

    let range = registry
        .call("range_new", &[Value::Int(1), Value::Int(5)])
        .expect("range_new failed");
    let values = registry
        .call("range_values", std::slice::from_ref(&range))
        .expect("range_values failed");

    let (start, end, exclusive) = triple(&values);
    assert_eq!(start, &Value::Int(1));
    assert_eq!(end, &Value::Int(5));
    assert_eq!(exclusive, &Value::Bool(false));
}

#[test]
#[cfg(all(feature = "construct-range", feature = "decompose-range"))]
fn test_construct_exclusive_then_decompose() {
    let registry = Registry::with_defaults();

    let range = registry
        .call(
            "range_new",
            &[Value::Int(1), Value::Int(5), Value::Bool(true)],
        )
        .expect("range_new failed");
    let values = registry
        .call("range_values", std::slice::from_ref(&range))
        .expect("range_values failed");

    let (start, end, exclusive) = triple(&values);
    assert_eq!(start, &Value::Int(1));
    assert_eq!(end, &Value::Int(5));
    assert_eq!(exclusive, &Value::Bool(true));
}

#[test]
#[cfg(feature = "construct-range")]
fn test_construct_falsy_flag_is_inclusive() {
    let registry = Registry::with_defaults();

    for falsy in [Value::Bool(false), Value::Nil] {
        let range = registry
            .call("range_new", &[Value::Int(1), Value::Int(5), falsy])
            .expect("range_new failed");
        assert_eq!(range, Value::Range(RangeValue::new(1, 5)));
    }
}

#[test]
#[cfg(feature = "normalize-beg-len")]
fn test_full_span_normalizes_to_whole_collection() {
    let registry = Registry::with_defaults();

    // For a collection of length 10, 0..9 inclusive covers everything.
    let result = registry
        .call(
            "range_beg_len",
            &[
                Value::Range(RangeValue::new(0, 9)),
                Value::Int(0),
                Value::Int(0),
                Value::Int(10),
                Value::Int(2),
            ],
        )
        .expect("range_beg_len failed");

    let (begin, len, status) = triple(&result);
    assert_eq!(begin, &Value::Int(0));
    assert_eq!(len, &Value::Int(10));
    assert_eq!(status, &Value::Bool(true));
}

#[test]
#[cfg(feature = "normalize-beg-len")]
fn test_begin_past_length_strict_vs_lenient() {
    let registry = Registry::with_defaults();
    let args = |flag: i64| {
        [
            Value::Range(RangeValue::new(11, 12)),
            Value::Int(4),
            Value::Int(9),
            Value::Int(10),
            Value::Int(flag),
        ]
    };

    // Strict mode propagates the primitive's error.
    assert!(registry.call("range_beg_len", &args(2)).is_err());

    // Lenient mode echoes the provisional values with a nil status.
    let result = registry
        .call("range_beg_len", &args(0))
        .expect("range_beg_len failed");
    let (begin, len, status) = triple(&result);
    assert_eq!(begin, &Value::Int(4));
    assert_eq!(len, &Value::Int(9));
    assert_eq!(status, &Value::Nil);
}

mod registry_dispatch {
    use super::*;

    #[test]
    fn test_installed_methods_match_capability_table() {
        let table = CapabilityTable::detect();
        let registry = Registry::install(&table);
        for entry in table.entries() {
            assert_eq!(
                registry.get(entry.capability.method_name()).is_some(),
                entry.available
            );
        }
    }

    #[test]
    fn test_unknown_method() {
        let registry = Registry::with_defaults();
        let err = registry.call("range_nope", &[]).unwrap_err();
        assert!(err.to_string().contains("unknown method"));
    }

    #[test]
    #[cfg(feature = "construct-range")]
    fn test_variadic_arity_enforced() {
        let registry = Registry::with_defaults();
        assert!(registry.call("range_new", &[Value::Int(1)]).is_err());
        assert!(
            registry
                .call("range_new", &vec![Value::Int(1); 4])
                .is_err()
        );
    }

    #[test]
    #[cfg(feature = "decompose-range")]
    fn test_exact_arity_enforced() {
        let registry = Registry::with_defaults();
        let err = registry
            .call("range_values", &[Value::Nil, Value::Nil])
            .unwrap_err();
        assert!(err.to_string().contains("expected 1, got 2"));
    }

    #[test]
    #[cfg(feature = "normalize-beg-len")]
    fn test_masked_capability_uninstalls_method() {
        let table = CapabilityTable::detect().without(Capability::NormalizeBegLen);
        let registry = Registry::install(&table);
        assert!(registry.get("range_beg_len").is_none());
    }
}

mod normalization {
    use super::*;
    use test_case::test_case;

    fn span(range: RangeValue, total: i64, mode: ClampMode) -> (i64, i64) {
        let span = beg_len(&range, total, mode)
            .expect("beg_len failed")
            .span()
            .expect("expected a span");
        (span.begin, span.len)
    }

    #[test_case("1..5", 10, (1, 5); "inclusive")]
    #[test_case("1...5", 10, (1, 4); "exclusive")]
    #[test_case("-5..-1", 10, (5, 5); "negative from end")]
    #[test_case("..3", 10, (0, 4); "beginless")]
    #[test_case("7..", 10, (7, 3); "endless")]
    #[test_case("0..-1", 10, (0, 10); "whole via negative end")]
    #[test_case("4..2", 10, (4, 0); "inverted is empty")]
    fn test_literal_normalization(literal: &str, total: i64, expected: (i64, i64)) {
        let range: RangeValue = literal.parse().expect("parse failed");
        assert_eq!(span(range, total, ClampMode::Strict), expected);
    }

    #[test]
    fn test_end_at_integer_limit_is_clamped() {
        let range: RangeValue = "0..9223372036854775807".parse().expect("parse failed");
        assert_eq!(span(range, 10, ClampMode::Lenient), (0, 10));
        assert!(beg_len(&range, 10, ClampMode::Extend).is_err());
    }

    #[test]
    fn test_lenient_never_errors_on_valid_length() {
        for (start, end) in [(0, 5), (50, 60), (-100, 3), (9, -9)] {
            let result = beg_len(&RangeValue::new(start, end), 10, ClampMode::Lenient);
            assert!(result.is_ok(), "lenient failed for {start}..{end}");
        }
    }

    #[test]
    fn test_extend_allows_growth_past_end() {
        let outcome =
            beg_len(&RangeValue::new(10, 14), 10, ClampMode::Extend).expect("beg_len failed");
        let span = outcome.span().expect("expected a span");
        assert_eq!((span.begin, span.len), (10, 5));
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        #[cfg(all(feature = "construct-range", feature = "decompose-range"))]
        fn construct_decompose_round_trip(
            start in -1000i64..1000,
            end in -1000i64..1000,
            exclusive in proptest::bool::ANY,
        ) {
            let registry = Registry::with_defaults();
            let range = registry
                .call(
                    "range_new",
                    &[Value::Int(start), Value::Int(end), Value::Bool(exclusive)],
                )
                .expect("range_new failed");
            let values = registry
                .call("range_values", std::slice::from_ref(&range))
                .expect("range_values failed");
            prop_assert_eq!(
                values,
                Value::List(vec![
                    Value::Int(start),
                    Value::Int(end),
                    Value::Bool(exclusive),
                ])
            );
        }

        #[test]
        fn clamping_modes_stay_within_length(
            start in -50i64..50,
            end in -50i64..50,
            exclusive in proptest::bool::ANY,
            total in 0i64..40,
        ) {
            let range = RangeValue::from_parts(Some(start), Some(end), exclusive);
            for mode in [ClampMode::Lenient, ClampMode::Strict] {
                if let Ok(BegLen::Span(span)) = beg_len(&range, total, mode) {
                    prop_assert!(span.begin >= 0);
                    prop_assert!(span.len >= 0);
                    prop_assert!(span.begin + span.len <= total);
                }
            }
        }

        #[test]
        fn lenient_total_never_errors(
            start in -50i64..50,
            end in -50i64..50,
            total in 0i64..40,
        ) {
            let range = RangeValue::new(start, end);
            prop_assert!(beg_len(&range, total, ClampMode::Lenient).is_ok());
        }

        #[test]
        fn literal_round_trip(
            start in -999i64..999,
            end in -999i64..999,
            exclusive in proptest::bool::ANY,
        ) {
            let range = RangeValue::from_parts(Some(start), Some(end), exclusive);
            let parsed: RangeValue = range.to_string().parse().expect("parse failed");
            prop_assert_eq!(parsed, range);
        }
    }
}

/// CLI command integration tests.
mod cli_tests {
    use rangekit_rs::cli::commands::execute;
    use rangekit_rs::cli::parser::{Cli, Commands};

    /// Helper to create a CLI struct with the given format.
    fn make_cli(format: &str, command: Commands) -> Cli {
        Cli {
            format: format.to_string(),
            command,
        }
    }

    #[test]
    fn test_new_then_values_round_trip() {
        let out = execute(&make_cli(
            "text",
            Commands::New {
                start: "1".to_string(),
                end: "5".to_string(),
                exclusive: true,
            },
        ))
        .expect("new failed");
        let literal = out.trim().to_string();
        assert_eq!(literal, "1...5");

        let out = execute(&make_cli("text", Commands::Values { range: literal })).expect("values failed");
        assert!(out.contains("Exclusive: true"));
    }

    #[test]
    fn test_beg_len_json_output() {
        let out = execute(&make_cli(
            "json",
            Commands::BegLen {
                range: "1..5".to_string(),
                total: 10,
                begin: 0,
                length: 0,
                mode: "2".to_string(),
            },
        ))
        .expect("beg-len failed");
        assert!(out.contains("\"begin\": 1"));
        assert!(out.contains("\"len\": 5"));
        assert!(out.contains("\"status\": true"));
    }

    #[test]
    fn test_capabilities_lists_all_rows() {
        let out = execute(&make_cli("text", Commands::Capabilities)).expect("capabilities failed");
        for name in ["construct-range", "decompose-range", "normalize-beg-len"] {
            assert!(out.contains(name), "missing {name} in:\n{out}");
        }
    }

    #[test]
    #[cfg(feature = "normalize-beg-len")]
    fn test_call_beg_len_wrapper() {
        let out = execute(&make_cli(
            "text",
            Commands::Call {
                method: "range_beg_len".to_string(),
                args: vec![
                    "1..5".to_string(),
                    "0".to_string(),
                    "0".to_string(),
                    "10".to_string(),
                    "0".to_string(),
                ],
            },
        ))
        .expect("call failed");
        assert_eq!(out, "[1, 5, true]\n");
    }

    #[test]
    fn test_invalid_mode_is_error() {
        let result = execute(&make_cli(
            "text",
            Commands::BegLen {
                range: "1..5".to_string(),
                total: 10,
                begin: 0,
                length: 0,
                mode: "loose".to_string(),
            },
        ));
        assert!(result.is_err());
    }
}

/// Binary-level CLI checks.
mod bin_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn cmd() -> Command {
        Command::cargo_bin("rangekit-rs").expect("binary not built")
    }

    #[test]
    fn test_bin_new() {
        cmd()
            .args(["new", "1", "5"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1..5"));
    }

    #[test]
    fn test_bin_values_json() {
        cmd()
            .args(["--format", "json", "values", "1...5"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"exclusive\": true"));
    }

    #[test]
    fn test_bin_beg_len_error_exit_code() {
        cmd()
            .args(["beg-len", "11..12", "--total", "10", "--mode", "strict"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("out of range"));
    }

    #[test]
    fn test_bin_capabilities() {
        cmd()
            .arg("capabilities")
            .assert()
            .success()
            .stdout(predicate::str::contains("range_new"));
    }
}
