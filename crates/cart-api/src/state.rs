//! Application state shared across handlers.

use std::sync::Arc;

use bookstore_core::CartStore;

use crate::config::CartApiConfig;
use crate::graphql::{CartSchema, build_schema};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The store is created here from the
/// configured variant and policy, and the schema holds the same store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CartApiConfig,
    store: Arc<CartStore>,
    schema: CartSchema,
}

impl AppState {
    /// Create state with a fresh store built from the configuration.
    #[must_use]
    pub fn new(config: CartApiConfig) -> Self {
        let store = Arc::new(CartStore::new(config.variant, config.quantity_policy));
        Self::with_store(config, store)
    }

    /// Create state around an existing store.
    #[must_use]
    pub fn with_store(config: CartApiConfig, store: Arc<CartStore>) -> Self {
        let schema = build_schema(Arc::clone(&store));
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                schema,
            }),
        }
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &CartApiConfig {
        &self.inner.config
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn store(&self) -> &Arc<CartStore> {
        &self.inner.store
    }

    /// Get a reference to the GraphQL schema.
    #[must_use]
    pub fn schema(&self) -> &CartSchema {
        &self.inner.schema
    }
}
