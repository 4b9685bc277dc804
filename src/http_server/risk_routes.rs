//! Risk HTTP Routes
//!
//! - `POST /risks`      create a risk
//! - `GET  /risks/:id`  fetch one risk
//! - `GET  /risks`      list risks (`?limit=&offset=`)
//!
//! The collection routes also answer with a trailing slash.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use super::errors::ApiError;
use crate::observability::Event;
use crate::risk::{decode_create_request, parse_risk_id, PaginationDefaults, RiskStore, RiskView};

// ==================
// Shared State
// ==================

/// State shared across risk handlers
pub struct RiskApiState {
    pub store: Arc<RiskStore>,
    pub pagination: PaginationDefaults,
}

impl RiskApiState {
    pub fn new(store: Arc<RiskStore>, pagination: PaginationDefaults) -> Self {
        Self { store, pagination }
    }
}

// ==================
// Request Types
// ==================

/// Raw list query; values are resolved leniently, never rejected
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListRisksQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListRisksQuery {
    /// Picks the first value of each key; repeats and other keys are ignored
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut query.limit,
                "offset" => &mut query.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

// ==================
// Risk Routes
// ==================

/// Create risk routes
pub fn risk_routes(state: Arc<RiskApiState>) -> Router {
    Router::new()
        .route("/risks", get(list_risks_handler).post(create_risk_handler))
        .route("/risks/", get(list_risks_handler).post(create_risk_handler))
        .route("/risks/:id", get(get_risk_handler))
        .with_state(state)
}

async fn create_risk_handler(
    State(state): State<Arc<RiskApiState>>,
    body: Bytes,
) -> Result<Json<RiskView>, ApiError> {
    let request = decode_create_request(&body)?;

    let view = state
        .store
        .create(&request.state, &request.title, &request.description)?;

    tracing::info!(
        event = Event::RiskCreated.as_str(),
        risk_id = %view.id,
        state = %view.state,
    );

    Ok(Json(view))
}

async fn get_risk_handler(
    State(state): State<Arc<RiskApiState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<RiskView>, ApiError> {
    let id = parse_risk_id(&raw_id)?;
    Ok(Json(state.store.get_by_id(id)?))
}

async fn list_risks_handler(
    State(state): State<Arc<RiskApiState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<RiskView>>, ApiError> {
    let query = ListRisksQuery::from_pairs(pairs);
    let page = state
        .pagination
        .resolve(query.limit.as_deref(), query.offset.as_deref());

    Ok(Json(state.store.get_all(page)?))
}
