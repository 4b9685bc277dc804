//! # HTTP Error Mapping
//!
//! Translates domain errors into status codes and JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::observability::Event;
use crate::risk::RiskError;

/// Message returned for internal faults in place of their detail
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Error returned by risk handlers
#[derive(Debug)]
pub struct ApiError(pub RiskError);

impl From<RiskError> for ApiError {
    fn from(err: RiskError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            // 400 Bad Request
            RiskError::UnknownField(_) => StatusCode::BAD_REQUEST,
            RiskError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            RiskError::InvalidState(_) => StatusCode::BAD_REQUEST,
            RiskError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            RiskError::NotFound(_) => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            RiskError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let error = if err.0.is_client_error() {
            err.0.to_string()
        } else {
            INTERNAL_ERROR_MESSAGE.to_string()
        };

        Self {
            error,
            code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_client_error() {
            tracing::info!(
                event = Event::RiskRejected.as_str(),
                code = self.0.code(),
                error = %self.0,
            );
        } else {
            tracing::error!(
                event = Event::RiskFault.as_str(),
                code = self.0.code(),
                error = %self.0,
            );
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
