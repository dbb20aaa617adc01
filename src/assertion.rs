//! Assertion checks that thread an explicit recorder through the truth
//! expression and render a value trace on failure.

use crate::errors::{AssertionError, TraceResult};
use crate::recorder::{RecordedValue, ValueRecorder};
use crate::source::NormalizedSource;
use crate::trace::{RenderConfig, ValueTrace};
use std::fmt::Display;

/// One instrumented assertion site.
///
/// Every check resets its recorder before evaluating the truth expression,
/// then either drops the log (pass) or renders it (fail).
#[derive(Debug, Clone)]
pub struct PowerAssertion {
    source: NormalizedSource,
    config: RenderConfig,
}

impl PowerAssertion {
    /// Create an assertion site for the given source text. The text is
    /// normalized to a single line; column anchors index into that line.
    pub fn new(source: &str) -> Self {
        PowerAssertion {
            source: NormalizedSource::new(source),
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn source(&self) -> &NormalizedSource {
        &self.source
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Evaluate `truth` against a recorder owned by this invocation.
    pub fn check<F>(&self, truth: F) -> TraceResult<()>
    where
        F: FnOnce(&ValueRecorder) -> bool,
    {
        let recorder = ValueRecorder::new();
        self.check_with(&recorder, truth)
    }

    /// Evaluate `truth` against a caller-owned recorder, e.g. one reused
    /// across the iterations of a loop. The recorder is reset first.
    pub fn check_with<F>(&self, recorder: &ValueRecorder, truth: F) -> TraceResult<()>
    where
        F: FnOnce(&ValueRecorder) -> bool,
    {
        recorder.reset();
        if truth(recorder) {
            return Ok(());
        }

        let values = recorder.values();
        log::debug!(
            "assertion `{}` failed with {} recorded values",
            self.source,
            values.len()
        );
        Err(AssertionError::Failed {
            diagnostic: self.render(&values),
        })
    }

    /// Like [`check`](Self::check) for truth expressions that can fail. An
    /// error is reported together with the values recorded before it.
    pub fn try_check<F, E>(&self, truth: F) -> TraceResult<()>
    where
        F: FnOnce(&ValueRecorder) -> Result<bool, E>,
        E: Display,
    {
        let recorder = ValueRecorder::new();
        match truth(&recorder) {
            Ok(true) => Ok(()),
            Ok(false) => {
                let values = recorder.values();
                log::debug!(
                    "assertion `{}` failed with {} recorded values",
                    self.source,
                    values.len()
                );
                Err(AssertionError::Failed {
                    diagnostic: self.render(&values),
                })
            }
            Err(err) => {
                let values = recorder.values();
                log::warn!(
                    "assertion `{}` could not be evaluated after {} recorded values: {}",
                    self.source,
                    values.len(),
                    err
                );
                Err(AssertionError::Evaluation {
                    message: err.to_string(),
                    diagnostic: self.render(&values),
                })
            }
        }
    }

    /// Render any recorded log against this site's source text.
    pub fn render(&self, values: &[RecordedValue]) -> String {
        ValueTrace::new(&self.source, values)
            .with_config(self.config.clone())
            .to_string()
    }
}
