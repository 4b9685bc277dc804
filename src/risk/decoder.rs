//! Strict decoding of inbound create payloads
//!
//! Decoding runs in two passes:
//! 1. Parse into a generic JSON object and reject any field name outside
//!    the create schema (`UnknownField`).
//! 2. Bind the object into `CreateRiskRequest` with the usual type and
//!    required-field rules (`MalformedRequest`).
//!
//! Schema drift is reported even when the recognized fields would fail
//! to bind.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::errors::{RiskError, RiskResult};

/// Field names accepted in a create payload
pub const CREATE_FIELDS: [&str; 3] = ["state", "title", "description"];

/// Typed create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRiskRequest {
    /// Candidate lifecycle state, validated by the store
    pub state: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Optional text fields treat an explicit `null` like an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a raw create payload.
///
/// # Errors
///
/// - `UnknownField` if the object carries a field outside `CREATE_FIELDS`
/// - `MalformedRequest` if the payload is not a JSON object or does not bind
pub fn decode_create_request(payload: &[u8]) -> RiskResult<CreateRiskRequest> {
    let value: Value = serde_json::from_slice(payload)
        .map_err(|e| RiskError::MalformedRequest(e.to_string()))?;

    reject_unknown_fields(&value)?;

    serde_json::from_value(value).map_err(|e| RiskError::MalformedRequest(e.to_string()))
}

/// First pass: schema membership only, no type checks.
fn reject_unknown_fields(value: &Value) -> RiskResult<()> {
    let obj = value
        .as_object()
        .ok_or_else(|| RiskError::MalformedRequest("expected a JSON object".to_string()))?;

    match obj.keys().find(|key| !CREATE_FIELDS.contains(&key.as_str())) {
        Some(key) => Err(RiskError::UnknownField(key.clone())),
        None => Ok(()),
    }
}

/// Parses a risk identifier from its textual form.
pub fn parse_risk_id(raw: &str) -> RiskResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| RiskError::InvalidIdentifier(raw.to_string()))
}
