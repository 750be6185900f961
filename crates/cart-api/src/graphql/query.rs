//! Query root.

use async_graphql::{Context, Object, Result};

use super::{CartItemNode, store};

/// The GraphQL query root.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Current cart contents in insertion order.
    async fn cart(&self, ctx: &Context<'_>) -> Result<Vec<CartItemNode>> {
        let items = store(ctx)?.list();
        tracing::debug!(count = items.len(), "Listing cart");
        Ok(items.into_iter().map(CartItemNode::from).collect())
    }
}
