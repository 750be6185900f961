//! GraphQL schema for the cart.
//!
//! # Schema
//!
//! ```graphql
//! type CartItem { id: ID!, name: String!, price: Float!, quantity: Int! }
//!
//! type Query { cart: [CartItem!]! }
//!
//! type Mutation {
//!   addToCart(id: ID!, name: String!, price: Float!, quantity: Int!): CartItem
//!   removeFromCart(id: ID!): CartItem
//!   updateQuantity(id: ID!, quantity: Int!): CartItem
//!   clearCart: [CartItem]
//! }
//! ```
//!
//! The [`CartStore`] is attached to the schema as data when it is built, so
//! every schema instance has its own cart.

mod mutation;
mod query;
mod types;

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Schema};
use bookstore_core::CartStore;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::CartItemNode;

/// The cart schema type.
pub type CartSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around a cart store.
#[must_use]
pub fn build_schema(store: Arc<CartStore>) -> CartSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Fetch the store attached to the schema.
fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<CartStore>> {
    ctx.data::<Arc<CartStore>>()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use async_graphql::{Request, Variables};
    use bookstore_core::{CartVariant, QuantityPolicy};
    use serde_json::{Value, json};

    use super::*;

    async fn run(schema: &CartSchema, query: &str, variables: Value) -> Value {
        let request = Request::new(query).variables(Variables::from_json(variables));
        let response = schema.execute(request).await;
        assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
        response.data.into_json().unwrap()
    }

    const ADD: &str = "mutation($id: ID!, $name: String!, $price: Float!, $quantity: Int!) {
        addToCart(id: $id, name: $name, price: $price, quantity: $quantity) { id name price quantity }
    }";
    const CART: &str = "{ cart { id name price quantity } }";

    #[test]
    fn test_sdl_exposes_cart_contract() {
        let sdl = build_schema(Arc::new(CartStore::empty())).sdl();

        assert!(sdl.contains("type CartItem"));
        assert!(sdl.contains("id: ID!"));
        assert!(sdl.contains("price: Float!"));
        assert!(sdl.contains("quantity: Int!"));
        assert!(sdl.contains("cart: [CartItem!]!"));
        assert!(sdl.contains(
            "addToCart(id: ID!, name: String!, price: Float!, quantity: Int!): CartItem"
        ));
        assert!(sdl.contains("removeFromCart(id: ID!): CartItem"));
        assert!(sdl.contains("updateQuantity(id: ID!, quantity: Int!): CartItem"));
        assert!(sdl.contains("clearCart: [CartItem]"));
    }

    #[tokio::test]
    async fn test_add_then_add_again_increments() {
        let schema = build_schema(Arc::new(CartStore::empty()));

        let vars = json!({"id": "1", "name": "Book A", "price": 10.0, "quantity": 1});
        let first = run(&schema, ADD, vars).await;
        assert_eq!(first["addToCart"]["quantity"], 1);

        let vars = json!({"id": "1", "name": "Other", "price": 50.0, "quantity": 2});
        let second = run(&schema, ADD, vars).await;
        assert_eq!(
            second["addToCart"],
            json!({"id": "1", "name": "Book A", "price": 10.0, "quantity": 3})
        );

        let cart = run(&schema, CART, json!({})).await;
        assert_eq!(cart["cart"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_unknown_returns_null() {
        let schema = build_schema(Arc::new(CartStore::seeded()));

        let data = run(
            &schema,
            "mutation { removeFromCart(id: \"nope\") { id } }",
            json!({}),
        )
        .await;
        assert_eq!(data["removeFromCart"], Value::Null);

        let cart = run(&schema, CART, json!({})).await;
        assert_eq!(cart["cart"].as_array().unwrap().len(), 9);
    }

    #[tokio::test]
    async fn test_update_quantity_to_zero_keeps_item() {
        let schema = build_schema(Arc::new(CartStore::seeded()));

        let data = run(
            &schema,
            "mutation { updateQuantity(id: \"2\", quantity: 0) { id quantity } }",
            json!({}),
        )
        .await;
        assert_eq!(data["updateQuantity"], json!({"id": "2", "quantity": 0}));

        let cart = run(&schema, CART, json!({})).await;
        assert_eq!(cart["cart"][1]["quantity"], 0);
    }

    #[tokio::test]
    async fn test_clear_returns_seeded_items() {
        let schema = build_schema(Arc::new(CartStore::seeded()));

        let data = run(&schema, "mutation { clearCart { id } }", json!({})).await;
        let cleared = data["clearCart"].as_array().unwrap();
        assert_eq!(cleared.len(), 9);
        assert_eq!(cleared[0]["id"], "1");
        assert_eq!(cleared[8]["id"], "9");

        let cart = run(&schema, CART, json!({})).await;
        assert_eq!(cart["cart"], json!([]));
    }

    #[tokio::test]
    async fn test_strict_policy_reports_error_with_null_field() {
        let store = CartStore::new(CartVariant::Seeded, QuantityPolicy::Strict);
        let schema = build_schema(Arc::new(store));

        let response = schema
            .execute("mutation { updateQuantity(id: \"1\", quantity: 0) { id } }")
            .await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("Invalid quantity 0"));
        let data = response.data.into_json().unwrap();
        assert_eq!(data["updateQuantity"], Value::Null);
    }

    #[tokio::test]
    async fn test_schemas_do_not_share_state() {
        let a = build_schema(Arc::new(CartStore::empty()));
        let b = build_schema(Arc::new(CartStore::empty()));

        let vars = json!({"id": "1", "name": "Book A", "price": 10.0, "quantity": 1});
        run(&a, ADD, vars).await;

        let cart = run(&b, CART, json!({})).await;
        assert_eq!(cart["cart"], json!([]));
    }
}
