//! Bookstore cart service library.
//!
//! Exposes the cart over GraphQL. The binary wraps [`app`] with Sentry and
//! serves it; tests build the same router around their own store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

pub use config::CartApiConfig;
pub use state::AppState;

/// Build the full router for the cart service.
pub fn app(state: AppState) -> Router {
    let playground = state.config().playground;

    routes::routes(playground)
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use bookstore_core::CartStore;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn test_app(store: CartStore, playground: bool) -> Router {
        let config = CartApiConfig {
            playground,
            ..CartApiConfig::default()
        };
        app(AppState::with_store(config, Arc::new(store)))
    }

    async fn post_graphql(app: Router, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::post("/graphql")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app(CartStore::empty(), true)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_reports_cart_summary() {
        let response = test_app(CartStore::seeded(), true)
            .oneshot(Request::get("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"status": "ready", "variant": "seeded", "items": 9}));
    }

    #[tokio::test]
    async fn test_graphql_over_http() {
        let (status, body) = post_graphql(
            test_app(CartStore::seeded(), true),
            json!({"query": "{ cart { id quantity } }"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["cart"].as_array().unwrap().len(), 9);
    }

    #[tokio::test]
    async fn test_unknown_id_is_null_not_error() {
        let (status, body) = post_graphql(
            test_app(CartStore::empty(), true),
            json!({"query": "mutation { removeFromCart(id: \"42\") { id } }"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["removeFromCart"], Value::Null);
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let response = test_app(CartStore::empty(), true)
            .oneshot(
                Request::post("/graphql")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_playground_toggle() {
        let enabled = test_app(CartStore::empty(), true)
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(enabled.status(), StatusCode::OK);

        let disabled = test_app(CartStore::empty(), false)
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_ne!(disabled.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = test_app(CartStore::empty(), true)
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
