//! Spans and timing for store operations.

use std::path::Path;
use std::time::Instant;

use tracing::{field, info_span, Span};

/// Span covering one command against a store.
///
/// The `error` field is filled in by [`record_error`] when the command fails.
pub fn store_span(command: &str, root: &Path) -> Span {
    info_span!("store", cmd = %command, root = %root.display(), error = field::Empty)
}

/// Span for a single file operation.
pub fn file_span(operation: &str, path: &Path) -> Span {
    info_span!("file", op = %operation, path = %path.display(), error = field::Empty)
}

/// Record an error on the current span.
///
/// Only spans that declare an `error` field keep the value.
pub fn record_error(error: &dyn std::error::Error) {
    Span::current().record("error", field::display(error));
}

/// Timing utility for operations.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer.
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Complete the timer and record duration.
    pub fn finish(self) {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.operation,
            duration_ms = %duration.as_millis(),
            "operation completed"
        );
    }
}

/// Macro for timing a block of code.
#[macro_export]
macro_rules! timed {
    ($name:expr, $body:expr) => {{
        let _timer = $crate::spans::Timer::start($name);
        let result = $body;
        _timer.finish();
        result
    }};
}
