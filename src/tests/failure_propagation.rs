//! Failures inside captured subexpressions pass straight through `capture`.

use crate::{AssertionError, PowerAssertion, ValueRecorder};
use std::panic::{self, AssertUnwindSafe};

#[derive(Debug, Clone, PartialEq)]
struct Missing(&'static str);

fn lookup(key: &'static str) -> Result<i32, Missing> {
    match key {
        "one" => Ok(1),
        _ => Err(Missing(key)),
    }
}

fn evaluate(recorder: &ValueRecorder, key: &'static str) -> Result<bool, Missing> {
    let first = recorder.capture(lookup("one")?, 7);
    let second = recorder.capture(lookup(key)?, 20);
    Ok(recorder.capture(first == second, 17))
}

#[test]
fn error_before_value_appends_nothing() {
    let recorder = ValueRecorder::new();

    let result = evaluate(&recorder, "two");

    assert_eq!(result, Err(Missing("two")));
    let values = recorder.values();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].column(), 7);
    assert_eq!(format!("{:?}", values[0].value()), "1");
}

#[test]
fn result_values_can_be_captured_whole() {
    let recorder = ValueRecorder::new();

    let outcome = recorder.capture(lookup("two"), 3);

    assert_eq!(outcome, Err(Missing("two")));
    assert_eq!(
        format!("{:?}", recorder.values()[0].value()),
        "Err(Missing(\"two\"))"
    );
}

#[test]
fn panic_before_value_appends_nothing() {
    let recorder = ValueRecorder::new();
    recorder.capture("before", 0);

    let caught = panic::catch_unwind(AssertUnwindSafe(|| {
        recorder.capture(
            {
                let empty: Vec<i32> = Vec::new();
                empty[0]
            },
            4,
        )
    }));

    assert!(caught.is_err());
    let values = recorder.values();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].column(), 0);

    // The recorder is still usable after the unwind.
    recorder.reset();
    recorder.capture(1, 2);
    assert_eq!(recorder.len(), 1);
}

#[test]
fn try_check_renders_partial_log() {
    let assertion = PowerAssertion::new("assert lookup(\"one\") == lookup(key)");
    let key = "two";

    let err = assertion
        .try_check(|rec| {
            evaluate(rec, key).map_err(|missing| format!("no value for {}", missing.0))
        })
        .unwrap_err();

    match err {
        AssertionError::Evaluation { message, diagnostic } => {
            assert_eq!(message, "no value for two");
            insta::assert_snapshot!(diagnostic, @r###"
            assert lookup("one") == lookup(key)
                   |
                   1
            "###);
        }
        other => panic!("expected evaluation error, got {:?}", other),
    }
}
