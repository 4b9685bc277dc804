//! Risk record and its projection
//!
//! `Risk` is the stored form and never leaves the store. Callers only see
//! `RiskView`, where timestamps are integer epoch seconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::RiskState;

/// Stored risk record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Risk {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    pub state: RiskState,

    pub title: String,

    pub description: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// Last modification time; equal to `created_at` at creation
    pub updated_at: DateTime<Utc>,
}

impl Risk {
    /// Builds a fresh record with both timestamps set to `now`
    pub fn new(
        id: Uuid,
        state: RiskState,
        title: String,
        description: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            state,
            title,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Read-only projection for callers
    pub fn view(&self) -> RiskView {
        RiskView {
            id: self.id,
            state: self.state,
            title: self.title.clone(),
            description: self.description.clone(),
            created_at: self.created_at.timestamp(),
            updated_at: self.updated_at.timestamp(),
        }
    }
}

/// Externally visible rendering of a risk record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskView {
    pub id: Uuid,
    pub state: RiskState,
    pub title: String,
    pub description: String,
    /// Epoch seconds
    pub created_at: i64,
    /// Epoch seconds
    pub updated_at: i64,
}
