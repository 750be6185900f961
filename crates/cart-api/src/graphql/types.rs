//! GraphQL object types.

use async_graphql::{ID, SimpleObject};
use bookstore_core::CartItem;

/// An item in the cart.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "CartItem")]
pub struct CartItemNode {
    /// Item id, unique within the cart.
    pub id: ID,
    /// Display label.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Number of units.
    pub quantity: i32,
}

impl From<CartItem> for CartItemNode {
    fn from(item: CartItem) -> Self {
        Self {
            id: ID(item.id.into_inner()),
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}
