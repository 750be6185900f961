//! HTTP error type for the routes around the GraphQL endpoint.
//!
//! Resolver outcomes (including "not found") are reported inside the GraphQL
//! response body. `AppError` covers requests that never reach the schema.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the cart service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Route or resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request could not be parsed as a GraphQL request.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Warnings reach Sentry as events through the tracing layer
        if matches!(self, Self::BadRequest(_)) {
            tracing::warn!(error = %self, "Rejected request");
        }

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
