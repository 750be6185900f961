//! Cart service client implementation.
//!
//! Uses `graphql_client` for typed operations with `reqwest` for HTTP.

use std::sync::Arc;

use bookstore_core::{CartItem, ItemId, NewCartItem};
use graphql_client::{GraphQLQuery, Response};
use tracing::{debug, instrument};
use url::Url;

use super::queries::{
    AddToCart, ClearCart, GetCart, RemoveFromCart, UpdateQuantity, add_to_cart, clear_cart,
    get_cart, remove_from_cart, update_quantity,
};
use super::{CartClientError, GraphQLError, GraphQLErrorLocation};

// =============================================================================
// CartClient
// =============================================================================

/// Client for the cart GraphQL service.
///
/// Cheaply cloneable; clones share one connection pool.
#[derive(Clone)]
pub struct CartClient {
    inner: Arc<CartClientInner>,
}

struct CartClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl std::fmt::Debug for CartClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl CartClient {
    /// Create a client for the GraphQL endpoint at `endpoint`.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            inner: Arc::new(CartClientInner {
                client: reqwest::Client::new(),
                endpoint,
            }),
        }
    }

    /// The GraphQL endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Execute a GraphQL operation.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, CartClientError>
    where
        Q::Variables: serde::Serialize,
    {
        let request_body = Q::build_query(variables);

        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        // Body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Cart service returned non-success status"
            );
            return Err(CartClientError::Status {
                status,
                body: response_text.chars().take(200).collect(),
            });
        }

        let response: Response<Q::ResponseData> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse cart service response"
                );
                return Err(CartClientError::Parse(e));
            }
        };

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            debug!(errors = ?errors, "GraphQL errors in response");

            return Err(CartClientError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| GraphQLError {
                        message: e.message,
                        locations: e.locations.map_or_else(Vec::new, |locs| {
                            locs.into_iter()
                                .map(|l| GraphQLErrorLocation {
                                    line: i64::from(l.line),
                                    column: i64::from(l.column),
                                })
                                .collect()
                        }),
                        path: e.path.map_or_else(Vec::new, |p| {
                            p.into_iter()
                                .map(|fragment| match fragment {
                                    graphql_client::PathFragment::Key(s) => {
                                        serde_json::Value::String(s)
                                    }
                                    graphql_client::PathFragment::Index(i) => {
                                        serde_json::Value::Number(i.into())
                                    }
                                })
                                .collect()
                        }),
                    })
                    .collect(),
            ));
        }

        response.data.ok_or(CartClientError::EmptyResponse)
    }

    // =========================================================================
    // Cart Methods
    // =========================================================================

    /// Fetch the full cart in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports errors.
    #[instrument(skip(self))]
    pub async fn get_cart(&self) -> Result<Vec<CartItem>, CartClientError> {
        let data = self.execute::<GetCart>(get_cart::Variables).await?;
        Ok(data.cart.into_iter().map(CartItem::from).collect())
    }

    /// Add an item, or increase the quantity of an item already in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects the item.
    #[instrument(skip(self, item), fields(id = %item.id, quantity = item.quantity))]
    pub async fn add_to_cart(
        &self,
        item: &NewCartItem,
    ) -> Result<Option<CartItem>, CartClientError> {
        let variables = add_to_cart::Variables {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: item.price,
            quantity: i64::from(item.quantity),
        };

        let data = self.execute::<AddToCart>(variables).await?;
        Ok(data.add_to_cart.map(CartItem::from))
    }

    /// Remove an item. `Ok(None)` means the id was not in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn remove_from_cart(&self, id: &ItemId) -> Result<Option<CartItem>, CartClientError> {
        let variables = remove_from_cart::Variables { id: id.to_string() };

        let data = self.execute::<RemoveFromCart>(variables).await?;
        Ok(data.remove_from_cart.map(CartItem::from))
    }

    /// Overwrite an item's quantity. `Ok(None)` means the id was not in the cart.
    ///
    /// No bounds are checked here; callers decide which quantities to send.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects the quantity.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn update_quantity(
        &self,
        id: &ItemId,
        quantity: i32,
    ) -> Result<Option<CartItem>, CartClientError> {
        let variables = update_quantity::Variables {
            id: id.to_string(),
            quantity: i64::from(quantity),
        };

        let data = self.execute::<UpdateQuantity>(variables).await?;
        Ok(data.update_quantity.map(CartItem::from))
    }

    /// Empty the cart, returning what it held.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<Vec<CartItem>, CartClientError> {
        let data = self.execute::<ClearCart>(clear_cart::Variables).await?;
        Ok(data
            .clear_cart
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(CartItem::from)
            .collect())
    }
}
