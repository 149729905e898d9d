// ============================================================================
// Error Reporter Interface
// Out-of-band channel for recoverable calculation failures
// ============================================================================

use crate::numeric::{CalculatorError, ErrorKind};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A recoverable failure raised by one calculator operation.
///
/// The operation still returns its sentinel; the report is advisory.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ErrorReport {
    /// Name of the operation that failed (e.g. `"WeightedMedian"`)
    pub operation: &'static str,

    /// What went wrong
    pub error: CalculatorError,

    /// When it was reported
    pub timestamp: DateTime<Utc>,
}

impl ErrorReport {
    pub fn new(operation: &'static str, error: CalculatorError) -> Self {
        Self {
            operation,
            error,
            timestamp: Utc::now(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    /// Human-readable message handed to hosts.
    pub fn message(&self) -> String {
        format!("Error: {}", self.error)
    }
}

/// Receiver for error reports.
/// Implementations can forward to a UI, a log, metrics, etc.
pub trait ErrorReporter: Send + Sync {
    /// Handle a single report
    fn on_error(&self, report: ErrorReport);
}

/// Discards every report
pub struct NoOpErrorReporter;

impl ErrorReporter for NoOpErrorReporter {
    fn on_error(&self, _report: ErrorReport) {}
}

/// Logs every report at WARN level
pub struct LoggingErrorReporter;

impl ErrorReporter for LoggingErrorReporter {
    fn on_error(&self, report: ErrorReport) {
        tracing::warn!(
            operation = report.operation,
            kind = %report.kind(),
            "{}",
            report.message()
        );
    }
}

/// Buffers reports in memory until drained.
#[derive(Default)]
pub struct CollectingErrorReporter {
    reports: Mutex<Vec<ErrorReport>>,
}

impl CollectingErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every buffered report, oldest first.
    pub fn drain(&self) -> Vec<ErrorReport> {
        std::mem::take(&mut *self.reports.lock())
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    /// Messages of the buffered reports, without draining.
    pub fn messages(&self) -> Vec<String> {
        self.reports.lock().iter().map(ErrorReport::message).collect()
    }
}

impl ErrorReporter for CollectingErrorReporter {
    fn on_error(&self, report: ErrorReport) {
        self.reports.lock().push(report);
    }
}

/// Closures can act as reporters.
impl<F> ErrorReporter for F
where
    F: Fn(ErrorReport) + Send + Sync,
{
    fn on_error(&self, report: ErrorReport) {
        self(report)
    }
}
