//! Mutation root.
//!
//! Unknown ids resolve to `null` without an error. Quantities rejected by a
//! strict store surface as a field error with `null` data.

use async_graphql::{Context, ID, Object, Result};
use bookstore_core::{ItemId, NewCartItem};
use tracing::info;

use super::{CartItemNode, store};

/// The GraphQL mutation root.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add an item, or increase the quantity of an item already in the cart.
    ///
    /// For an existing id the supplied name and price are ignored.
    async fn add_to_cart(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        price: f64,
        quantity: i32,
    ) -> Result<Option<CartItemNode>> {
        info!(id = %id.as_str(), quantity, "Adding item to cart");
        let item = store(ctx)?.add(NewCartItem::new(id.0, name, price, quantity))?;
        info!(id = %item.id, quantity = item.quantity, "Added item");
        Ok(Some(item.into()))
    }

    /// Remove an item, returning it, or `null` if it is not in the cart.
    async fn remove_from_cart(&self, ctx: &Context<'_>, id: ID) -> Result<Option<CartItemNode>> {
        info!(id = %id.as_str(), "Removing item");
        let removed = store(ctx)?.remove(&ItemId::from(id.0));
        match &removed {
            Some(item) => info!(id = %item.id, name = %item.name, "Removed item"),
            None => info!("Item not found for removal"),
        }
        Ok(removed.map(CartItemNode::from))
    }

    /// Overwrite an item's quantity, or return `null` if it is not in the cart.
    async fn update_quantity(
        &self,
        ctx: &Context<'_>,
        id: ID,
        quantity: i32,
    ) -> Result<Option<CartItemNode>> {
        info!(id = %id.as_str(), quantity, "Updating quantity");
        let updated = store(ctx)?.set_quantity(&ItemId::from(id.0), quantity)?;
        if updated.is_none() {
            info!("Item not found for quantity update");
        }
        Ok(updated.map(CartItemNode::from))
    }

    /// Empty the cart, returning what it held.
    async fn clear_cart(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<CartItemNode>>>> {
        let cleared = store(ctx)?.clear();
        info!(count = cleared.len(), "Cart cleared");
        Ok(Some(
            cleared
                .into_iter()
                .map(|item| Some(CartItemNode::from(item)))
                .collect(),
        ))
    }
}
