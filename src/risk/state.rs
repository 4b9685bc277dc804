//! Risk lifecycle states
//!
//! The allowed set is closed: `open`, `closed`, `accepted`, `investigating`.
//! Matching is exact. No trimming, no case folding.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{RiskError, RiskResult};

/// Lifecycle label of a risk record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskState {
    Open,
    Closed,
    Accepted,
    Investigating,
}

impl RiskState {
    /// Every allowed state, in declaration order
    pub const ALL: [RiskState; 4] = [
        RiskState::Open,
        RiskState::Closed,
        RiskState::Accepted,
        RiskState::Investigating,
    ];

    /// Returns the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskState::Open => "open",
            RiskState::Closed => "closed",
            RiskState::Accepted => "accepted",
            RiskState::Investigating => "investigating",
        }
    }
}

impl fmt::Display for RiskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validates a candidate state string against the allowed set.
///
/// # Errors
///
/// Returns `RiskError::InvalidState` for anything that is not an exact
/// match, including the empty string.
pub fn validate_state(candidate: &str) -> RiskResult<RiskState> {
    RiskState::ALL
        .iter()
        .copied()
        .find(|state| state.as_str() == candidate)
        .ok_or_else(|| RiskError::InvalidState(candidate.to_string()))
}
