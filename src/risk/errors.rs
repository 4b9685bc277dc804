//! # Risk Errors
//!
//! Error taxonomy for record management.
//!
//! Client errors (schema, state, identifier, lookup) are returned to the
//! caller synchronously and never retried. Internal faults carry detail for
//! logs only; the transport layer must not expose it.

use thiserror::Error;
use uuid::Uuid;

/// Result type for risk operations
pub type RiskResult<T> = Result<T, RiskError>;

/// Risk record errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RiskError {
    // ==================
    // Client Errors
    // ==================
    /// Payload carries a field outside the create schema
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Payload could not be bound to the create schema
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// State is not one of the allowed lifecycle labels
    #[error("invalid state: '{0}'")]
    InvalidState(String),

    /// Identifier is not a well-formed UUID
    #[error("invalid identifier: '{0}'")]
    InvalidIdentifier(String),

    /// No record with this identifier
    #[error("risk with id not found: {0}")]
    NotFound(Uuid),

    // ==================
    // Server Errors
    // ==================
    /// Store fault (e.g. poisoned lock)
    #[error("internal error: {0}")]
    Internal(String),
}

impl RiskError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            RiskError::UnknownField(_) => "RISK_UNKNOWN_FIELD",
            RiskError::MalformedRequest(_) => "RISK_MALFORMED_REQUEST",
            RiskError::InvalidState(_) => "RISK_INVALID_STATE",
            RiskError::InvalidIdentifier(_) => "RISK_INVALID_IDENTIFIER",
            RiskError::NotFound(_) => "RISK_NOT_FOUND",
            RiskError::Internal(_) => "RISK_INTERNAL",
        }
    }

    /// True for errors caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        !matches!(self, RiskError::Internal(_))
    }
}
