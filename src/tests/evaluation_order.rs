//! Recorder protocol tests with realistic instrumented expressions.
//!
//! Anchors are computed from the source text the way an instrumentation pass
//! would, so the logs can be checked against the rendered trace.

use crate::{NormalizedSource, PowerAssertion, ValueRecorder, ValueTrace};

fn log(recorder: &ValueRecorder) -> Vec<(String, usize)> {
    recorder
        .values()
        .iter()
        .map(|recorded| (format!("{:?}", recorded.value()), recorded.column()))
        .collect()
}

#[test]
fn precedence_evaluates_out_of_column_order() {
    // `a + b * c`: `b * c` is evaluated, and recorded, before `+`.
    let source = NormalizedSource::new("assert a + b * c == 7");
    let col = |needle: &str| source.column_of(needle).unwrap();
    let (a, b, c) = (1, 2, 4);

    let recorder = ValueRecorder::new();
    let sum = recorder.capture(
        recorder.capture(a, col("a "))
            + recorder.capture(
                recorder.capture(b, col("b")) * recorder.capture(c, col("c")),
                col("*"),
            ),
        col("+"),
    );
    recorder.capture(sum == 7, col("=="));

    assert_eq!(
        log(&recorder),
        vec![
            ("1".to_string(), 7),
            ("2".to_string(), 11),
            ("4".to_string(), 15),
            ("8".to_string(), 13),
            ("9".to_string(), 9),
            ("false".to_string(), 17),
        ]
    );

    let values = recorder.values();
    insta::assert_snapshot!(ValueTrace::new(&source, &values), @r###"
    assert a + b * c == 7
           | | | | | |
           1 9 2 8 4 false
    "###);
}

#[test]
fn method_chain_records_receiver_before_result() {
    let source = NormalizedSource::new("assert words.iter().any(|w| w.is_empty())");
    let words = vec!["a", "bc"];

    let recorder = ValueRecorder::new();
    let any = recorder.capture(
        recorder
            .capture(&words, source.column_of("words").unwrap())
            .iter()
            .any(|w| recorder.capture(recorder.capture(w, 28).is_empty(), 30)),
        20,
    );

    assert!(!any);
    // Closure captures run once per element, between receiver and result.
    assert_eq!(
        log(&recorder),
        vec![
            ("[\"a\", \"bc\"]".to_string(), 7),
            ("\"a\"".to_string(), 28),
            ("false".to_string(), 30),
            ("\"bc\"".to_string(), 28),
            ("false".to_string(), 30),
            ("false".to_string(), 20),
        ]
    );
}

#[test]
fn assertion_in_loop_reuses_one_recorder() {
    let assertion = PowerAssertion::new("assert n % 3 != 0");
    let recorder = ValueRecorder::new();
    let mut failures = Vec::new();

    for n in 1..=6 {
        let outcome = assertion.check_with(&recorder, |rec| {
            rec.capture(rec.capture(rec.capture(n, 7) % 3, 9) != 0, 13)
        });
        // Each evaluation starts from an empty log.
        assert_eq!(recorder.len(), 3);
        if let Err(err) = outcome {
            failures.push(err.diagnostic().to_string());
        }
    }

    assert_eq!(failures.len(), 2);
    insta::assert_snapshot!(failures[1].as_str(), @r###"
    assert n % 3 != 0
           | |   |
           6 0   false
    "###);
}

#[test]
fn fresh_recorder_per_check_isolates_nested_assertions() {
    let outer = PowerAssertion::new("assert check(x)");
    let inner = PowerAssertion::new("assert x > 0");
    let x = 3;

    let result = outer.check(|rec| {
        let inner_ok = inner
            .check(|inner_rec| inner_rec.capture(inner_rec.capture(x, 7) > 0, 9))
            .is_ok();
        rec.capture(x, 13);
        rec.capture(!inner_ok, 7)
    });

    let err = result.unwrap_err();
    insta::assert_snapshot!(err.diagnostic(), @r###"
    assert check(x)
           |     |
           false 3
    "###);
}
