//! Error reporting sink

use crate::error::BhError;

/// Receives errors for messages the node had to drop
///
/// Implementations may be called from several tasks at once. Nothing a sink
/// does feeds back into later processing.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorSink: Send + Sync {
    fn report(&self, error: &BhError);
}

/// Sink that forwards errors to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&self, error: &BhError) {
        log::error!("Dropping telegram: {}", error);
    }
}
