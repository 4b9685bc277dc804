//! Observable events
//!
//! Lifecycle and record events are explicit and typed. Each log line that
//! reports one carries its name in the `event` field.

use std::fmt;

/// Observable events in the risk tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Listener bound, ready for requests
    ServerListening,
    /// Shutdown signal received
    ShutdownStart,
    /// Server drained and stopped
    ShutdownComplete,

    // Records
    /// Risk record created
    RiskCreated,
    /// Request rejected by validation or lookup
    RiskRejected,
    /// Internal fault while serving a request
    RiskFault,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::RiskCreated => "RISK_CREATED",
            Event::RiskRejected => "RISK_REJECTED",
            Event::RiskFault => "RISK_FAULT",
        }
    }

    /// Returns true if this event reports a server-side failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::RiskFault)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_unique() {
        let events = [
            Event::BootStart,
            Event::ConfigLoaded,
            Event::ServerListening,
            Event::ShutdownStart,
            Event::ShutdownComplete,
            Event::RiskCreated,
            Event::RiskRejected,
            Event::RiskFault,
        ];
        let mut names: Vec<_> = events.iter().map(Event::as_str).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), events.len());
    }

    #[test]
    fn test_only_fault_is_failure() {
        assert!(Event::RiskFault.is_failure());
        assert!(!Event::RiskRejected.is_failure());
    }
}
