//! Ordered value capture for instrumented assertions, and aligned value-trace
//! diagnostics built from it.
//!
//! An instrumentation step rewrites each observed subexpression `expr` of an
//! assertion into `recorder.capture(expr, column)`, where `column` anchors
//! the subexpression in the normalized source text. The wrapped expression
//! behaves exactly like the unwrapped one: `capture` hands its value back
//! unchanged, so types, short-circuiting and control flow are untouched.
//!
//! ```
//! use value_trace::PowerAssertion;
//!
//! let assertion = PowerAssertion::new("assert a.len() == 3");
//! let a = vec![1, 2];
//!
//! let err = assertion
//!     .check(|rec| rec.capture(rec.capture(rec.capture(&a, 7).len(), 9) == 3, 15))
//!     .unwrap_err();
//!
//! assert_eq!(
//!     err.diagnostic(),
//!     "assert a.len() == 3\n       | |     |\n       | 2     false\n       [1, 2]"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`recorder`] - The value log: [`ValueRecorder`] and [`RecordedValue`]
//! - [`source`] - Normalized single-line source text and column anchors
//! - [`trace`] - Aligned rendering of a recorded log
//! - [`assertion`] - Assertion checks with explicit recorder passing
//! - [`errors`] - Error types

pub mod assertion;
pub mod errors;
pub mod recorder;
pub mod source;
pub mod trace;

pub use assertion::PowerAssertion;
pub use errors::{AssertionError, ConfigError, TraceResult};
pub use recorder::{CapturedValue, RecordedValue, ValueRecorder};
pub use source::NormalizedSource;
pub use trace::{DuplicatePolicy, RenderConfig, ValueTrace};
