//! Risk record management
//!
//! - `state`: allowed lifecycle states and their validation
//! - `decoder`: strict two-pass decoding of create payloads
//! - `pagination`: limit/offset resolution against configured defaults
//! - `store`: the shared, ordered in-memory collection

pub mod decoder;
pub mod errors;
pub mod pagination;
pub mod record;
pub mod state;
pub mod store;

pub use decoder::{decode_create_request, parse_risk_id, CreateRiskRequest, CREATE_FIELDS};
pub use errors::{RiskError, RiskResult};
pub use pagination::{Pagination, PaginationDefaults};
pub use record::{Risk, RiskView};
pub use state::{validate_state, RiskState};
pub use store::RiskStore;
