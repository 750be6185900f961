//! HTTP route handlers for the cart service.
//!
//! # Route Structure
//!
//! ```text
//! POST /graphql       - Execute a GraphQL query or mutation
//! GET  /graphql       - GraphiQL IDE (when enabled)
//! GET  /health        - Liveness check
//! GET  /health/ready  - Readiness check with cart summary
//! ```

pub mod graphql;
pub mod health;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the GraphQL routes router.
pub fn graphql_routes(playground: bool) -> Router<AppState> {
    let route = if playground {
        get(graphql::playground).post(graphql::execute)
    } else {
        post(graphql::execute)
    };
    Router::new().route("/graphql", route)
}

/// Create all routes for the cart service.
pub fn routes(playground: bool) -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(graphql_routes(playground))
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
