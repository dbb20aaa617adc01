//! A single captured value together with its column anchor.

use std::fmt::Debug;
use std::rc::Rc;

/// The `Debug` renderings of a value, taken when it was captured.
///
/// Formatting a `CapturedValue` replays them: `{:?}` writes the compact form
/// and `{:#?}` the pretty form.
#[derive(Clone, PartialEq, Eq)]
pub struct CapturedValue {
    compact: String,
    pretty: String,
}

impl CapturedValue {
    pub fn of<T: Debug + ?Sized>(value: &T) -> Self {
        CapturedValue {
            compact: format!("{:?}", value),
            pretty: format!("{:#?}", value),
        }
    }

    /// The `{:?}` rendering.
    pub fn compact(&self) -> &str {
        &self.compact
    }

    /// The `{:#?}` rendering.
    pub fn pretty(&self) -> &str {
        &self.pretty
    }
}

impl Debug for CapturedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            f.write_str(&self.pretty)
        } else {
            f.write_str(&self.compact)
        }
    }
}

/// A value observed while evaluating an assertion's truth expression, tagged
/// with the column it should be displayed under.
///
/// The column is a grapheme index into the normalized, single-line rendering
/// of the assertion source (see [`NormalizedSource`](crate::NormalizedSource)).
/// It is not validated: anchors past the end of the text are accepted as-is.
///
/// Only the value's `Debug` renderings are kept, never the value itself, so
/// recording holds no ownership or borrow of it.
#[derive(Clone, PartialEq, Eq)]
pub struct RecordedValue {
    value: Rc<CapturedValue>,
    column: usize,
}

impl RecordedValue {
    /// Create a new recorded value.
    pub fn new<T: Debug>(value: T, column: usize) -> Self {
        Self::observe(&value, column)
    }

    pub(crate) fn observe<T: Debug + ?Sized>(value: &T, column: usize) -> Self {
        Self {
            value: Rc::new(CapturedValue::of(value)),
            column,
        }
    }

    /// The captured value.
    pub fn value(&self) -> &CapturedValue {
        &self.value
    }

    /// The column anchor the value was captured at.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl Debug for RecordedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordedValue")
            .field("value", &self.value)
            .field("column", &self.column)
            .finish()
    }
}
