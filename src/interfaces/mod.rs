// ============================================================================
// Interfaces Module
// Contains the trait definitions hosts plug into
// ============================================================================

mod error_reporter;

pub use error_reporter::{
    CollectingErrorReporter, ErrorReport, ErrorReporter, LoggingErrorReporter, NoOpErrorReporter,
};
