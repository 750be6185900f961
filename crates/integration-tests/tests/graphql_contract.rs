//! The cart service's GraphQL wire contract, exercised with raw JSON.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use bookstore_core::{CartVariant, QuantityPolicy};
use bookstore_integration_tests::CartService;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn post(service: &CartService, query: &str, variables: Value) -> Value {
    reqwest::Client::new()
        .post(service.endpoint())
        .json(&json!({ "query": query, "variables": variables }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_add_to_cart_payload_shape() {
    let service = CartService::start(CartVariant::Empty, QuantityPolicy::Permissive).await;

    let body = post(
        &service,
        "mutation($id: ID!, $name: String!, $price: Float!, $quantity: Int!) {
            addToCart(id: $id, name: $name, price: $price, quantity: $quantity) {
                id name price quantity
            }
        }",
        json!({ "id": "7", "name": "The Witcher", "price": 20.0, "quantity": 2 }),
    )
    .await;

    assert_eq!(
        body["data"]["addToCart"],
        json!({ "id": "7", "name": "The Witcher", "price": 20.0, "quantity": 2 })
    );
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_not_found_is_null_not_error() {
    let service = CartService::start(CartVariant::Empty, QuantityPolicy::Permissive).await;

    let body = post(
        &service,
        "mutation { removeFromCart(id: \"nope\") { id } updateQuantity(id: \"nope\", quantity: 2) { id } }",
        json!({}),
    )
    .await;

    assert_eq!(body["data"]["removeFromCart"], Value::Null);
    assert_eq!(body["data"]["updateQuantity"], Value::Null);
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_clear_cart_returns_list() {
    let service = CartService::start(CartVariant::Seeded, QuantityPolicy::Permissive).await;

    let body = post(&service, "mutation { clearCart { id quantity } }", json!({})).await;

    let cleared = body["data"]["clearCart"].as_array().unwrap();
    assert_eq!(cleared.len(), 9);
    assert_eq!(cleared[0], json!({ "id": "1", "quantity": 1 }));

    let body = post(&service, "{ cart { id } }", json!({})).await;
    assert_eq!(body["data"]["cart"], json!([]));
}

#[tokio::test]
async fn test_missing_argument_is_validation_error() {
    let service = CartService::start(CartVariant::Empty, QuantityPolicy::Permissive).await;

    let body = post(&service, "mutation { addToCart(id: \"1\") { id } }", json!({})).await;

    assert!(body["errors"].as_array().is_some_and(|errors| !errors.is_empty()));
    assert!(service.store.is_empty());
}

#[tokio::test]
async fn test_health_endpoints() {
    let service = CartService::start(CartVariant::Seeded, QuantityPolicy::Permissive).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/health", service.addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let ready: Value = client
        .get(format!("http://{}/health/ready", service.addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ready["items"], json!(9));
    assert_eq!(ready["variant"], json!("seeded"));
}
