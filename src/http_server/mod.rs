//! # Risk Tracker HTTP Server Module
//!
//! Transport layer over the risk store. Maps paths to operations and
//! domain errors to status codes.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/v1/risks` - Create (POST) and list (GET) risks
//! - `/v1/risks/:id` - Fetch one risk

pub mod errors;
pub mod observability_routes;
pub mod risk_routes;
pub mod server;

pub use errors::{ApiError, ErrorResponse};
pub use server::{build_router, HttpServer};
