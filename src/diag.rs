//! Command-line diagnostic reporting
//!
//! Option validation failures are reported through a [`DiagnosticSink`]
//! before the failing call returns; the caller only sees a boolean and
//! decides whether to keep parsing or exit.

use crate::errors::DissectError;

/// Sink for user-facing option diagnostics.
pub trait DiagnosticSink {
    /// Start a new diagnostic.
    fn error(&mut self, msg: &str);

    /// Attach detail lines to the immediately preceding diagnostic.
    fn error_cont(&mut self, msg: &str);
}

/// Writes diagnostics to stderr.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn error(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn error_cont(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Report one validation error, including its detail block when present.
pub(crate) fn report(sink: &mut impl DiagnosticSink, err: &DissectError) {
    sink.error(&err.to_string());
    if let Some(detail) = err.detail() {
        sink.error_cont(detail);
    }
}
