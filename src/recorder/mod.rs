//! The value-capture log shared by instrumented assertion code and the
//! renderer.
//!
//! Instrumented code rewrites every subexpression `expr` it wants to observe
//! into `recorder.capture(expr, column)`, and calls [`ValueRecorder::reset`]
//! before each evaluation of the truth expression. After evaluation, the
//! renderer reads [`ValueRecorder::values`] once.

mod recorded_value;

pub use recorded_value::{CapturedValue, RecordedValue};

use std::cell::RefCell;
use std::fmt::Debug;

/// Ordered, append-only log of [`RecordedValue`]s.
///
/// Entries appear in the exact order `capture` was called since the last
/// `reset` (or since construction). That is evaluation order, not column
/// order: short-circuiting, precedence and method chains all reorder
/// evaluation relative to the source text. Duplicate columns and duplicate
/// values are kept.
///
/// `capture` takes `&self` so that captures can nest inside each other's
/// arguments. The recorder is neither `Send` nor `Sync`: one evaluation
/// context owns it on one thread.
#[derive(Default)]
pub struct ValueRecorder {
    values: RefCell<Vec<RecordedValue>>,
}

impl ValueRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every recorded entry. Calling this on an empty recorder is a
    /// no-op.
    pub fn reset(&self) {
        self.values.borrow_mut().clear();
    }

    /// Append `(value, column)` to the log and hand `value` back unchanged.
    ///
    /// The log keeps the value's `Debug` renderings as of this call, not the
    /// value: ownership, reference counts and borrows are exactly what they
    /// would be without the wrapper. If `value` itself fails to evaluate (a
    /// `?` or a panic in the argument), this is never reached and nothing is
    /// appended.
    pub fn capture<T: Debug>(&self, value: T, column: usize) -> T {
        let recorded = RecordedValue::observe(&value, column);
        self.values.borrow_mut().push(recorded);
        value
    }

    /// Snapshot of the log, in insertion order.
    pub fn values(&self) -> Vec<RecordedValue> {
        self.values.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl Debug for ValueRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.values.borrow().iter()).finish()
    }
}
