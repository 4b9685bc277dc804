//! # Risk Store
//!
//! Authoritative in-memory collection of risk records.
//!
//! ## Invariants
//! - Identifiers are unique for the lifetime of the store
//! - Records are kept in creation order; pagination slices that order
//! - Every read and write goes through one `RwLock`, so a create is never
//!   observed half-applied and concurrent creates cannot collide
//! - Records are never mutated or removed once inserted
//!
//! Contents are memory-resident and lost on restart.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use uuid::Uuid;

use super::errors::{RiskError, RiskResult};
use super::pagination::Pagination;
use super::record::{Risk, RiskView};
use super::state::validate_state;

#[derive(Debug, Default)]
struct Inner {
    /// Records in creation order
    records: Vec<Risk>,
    /// id -> position in `records`
    index: HashMap<Uuid, usize>,
}

/// In-memory risk record store
#[derive(Debug, Default)]
pub struct RiskStore {
    inner: RwLock<Inner>,
}

impl RiskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record and returns its projection.
    ///
    /// The state is validated before the lock is taken; on failure nothing
    /// is stored.
    pub fn create(&self, state: &str, title: &str, description: &str) -> RiskResult<RiskView> {
        let state = validate_state(state)?;

        let mut inner = self.write()?;

        let mut id = Uuid::new_v4();
        while inner.index.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let risk = Risk::new(
            id,
            state,
            title.to_string(),
            description.to_string(),
            Utc::now(),
        );
        let view = risk.view();

        let position = inner.records.len();
        inner.records.push(risk);
        inner.index.insert(id, position);

        tracing::debug!(risk_id = %id, state = %state, "risk stored");

        Ok(view)
    }

    /// Returns the projection of the record with `id`.
    pub fn get_by_id(&self, id: Uuid) -> RiskResult<RiskView> {
        let inner = self.read()?;

        inner
            .index
            .get(&id)
            .map(|&position| inner.records[position].view())
            .ok_or(RiskError::NotFound(id))
    }

    /// Returns the window `[offset, min(offset + limit, len))` in creation
    /// order. An offset at or past the end yields an empty list.
    pub fn get_all(&self, page: Pagination) -> RiskResult<Vec<RiskView>> {
        let inner = self.read()?;

        let total = inner.records.len();
        if page.offset >= total {
            return Ok(Vec::new());
        }

        let end = page.offset.saturating_add(page.limit).min(total);
        Ok(inner.records[page.offset..end]
            .iter()
            .map(Risk::view)
            .collect())
    }

    /// Number of stored records
    pub fn len(&self) -> RiskResult<usize> {
        Ok(self.read()?.records.len())
    }

    pub fn is_empty(&self) -> RiskResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> RiskResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| RiskError::Internal("risk store lock poisoned".to_string()))
    }

    fn write(&self) -> RiskResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| RiskError::Internal("risk store lock poisoned".to_string()))
    }
}
