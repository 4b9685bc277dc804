//! Observability for the risk tracker
//!
//! - Structured logging through `tracing`
//! - Typed lifecycle events
//!
//! # Usage
//!
//! ```ignore
//! use risk_tracker::observability::{init_logging, log_event, Event};
//!
//! init_logging(&config.log)?;
//! log_event(Event::BootStart);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init_logging, LogFormat};

use thiserror::Error;

/// Observability error
///
/// Observability failure never stops request handling; only startup
/// reports it.
#[derive(Debug, Error)]
#[error("observability failed: {message}")]
pub struct ObservabilityError {
    message: String,
}

impl ObservabilityError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    if event.is_failure() {
        tracing::error!(event = event.as_str());
    } else {
        tracing::info!(event = event.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observability_error_display() {
        let err = ObservabilityError::new("test message");
        assert!(err.to_string().contains("test message"));
        assert_eq!(err.message(), "test message");
    }

    #[test]
    fn test_log_event_without_subscriber() {
        // no subscriber installed: must not panic
        log_event(Event::BootStart);
        log_event(Event::RiskFault);
    }
}
