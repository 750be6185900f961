//! Integration test harness for the bookstore.
//!
//! Each test starts its own cart service (and storefront, when needed) on
//! ephemeral ports, so tests run in parallel without sharing a cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bookstore-integration-tests
//! ```

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bookstore_cart_api::{AppState as CartApiState, CartApiConfig};
use bookstore_core::{CartStore, CartVariant, QuantityPolicy};
use bookstore_storefront::cart_client::CartClient;
use bookstore_storefront::config::CheckoutConfig;
use bookstore_storefront::{AppState as StorefrontState, StorefrontConfig};
use url::Url;

/// A running cart service and the store behind it.
pub struct CartService {
    pub addr: SocketAddr,
    pub store: Arc<CartStore>,
}

impl CartService {
    /// Start a cart service for the given variant and policy.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start(variant: CartVariant, policy: QuantityPolicy) -> Self {
        let store = Arc::new(CartStore::new(variant, policy));
        let config = CartApiConfig {
            variant,
            quantity_policy: policy,
            ..CartApiConfig::default()
        };
        let state = CartApiState::with_store(config, Arc::clone(&store));
        let addr = serve(bookstore_cart_api::app(state)).await;

        Self { addr, store }
    }

    /// GraphQL endpoint URL.
    ///
    /// # Panics
    ///
    /// Panics if the bound address does not form a URL.
    #[must_use]
    pub fn endpoint(&self) -> Url {
        Url::parse(&format!("http://{}/graphql", self.addr)).expect("valid endpoint URL")
    }

    /// Typed client for this service.
    #[must_use]
    pub fn client(&self) -> CartClient {
        CartClient::new(self.endpoint())
    }
}

/// A running storefront wired to a cart service.
pub struct Storefront {
    pub base_url: String,
    pub cart: CartService,
}

impl Storefront {
    /// Start a cart service and a storefront with the given payment delay.
    ///
    /// The message delay is zero so confirmation pages advance immediately.
    pub async fn start(variant: CartVariant, payment_delay: Duration) -> Self {
        let cart = CartService::start(variant, QuantityPolicy::Permissive).await;
        let config = StorefrontConfig {
            checkout: CheckoutConfig {
                payment_delay,
                message_delay: Duration::ZERO,
            },
            ..StorefrontConfig::for_cart_api(cart.endpoint())
        };
        let addr = serve(bookstore_storefront::app(StorefrontState::new(config))).await;

        Self {
            base_url: format!("http://{addr}"),
            cart,
        }
    }

    /// Absolute URL for a storefront path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Serve a router on an ephemeral local port.
///
/// # Panics
///
/// Panics if no local port can be bound.
pub async fn serve(app: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    addr
}
