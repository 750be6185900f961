//! Health check handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness response body.
#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub variant: &'static str,
    pub items: usize,
}

/// Readiness health check endpoint.
///
/// Reports the store variant and its current line count.
pub async fn readiness(State(state): State<AppState>) -> Json<Readiness> {
    Json(Readiness {
        status: "ready",
        variant: state.store().variant().as_str(),
        items: state.store().len(),
    })
}
