//! CLI subcommands.
//!
//! Commands write their output to any `io::Write` so tests can capture it.

pub mod cart;
pub mod catalog;

use bookstore_storefront::cart_client::CartClientError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The endpoint from `CART_API_URL` is not a URL.
    #[error("Invalid endpoint {0}: {1}")]
    InvalidEndpoint(String, url::ParseError),

    /// The product id is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// The cart service call failed.
    #[error("Cart service error: {0}")]
    Cart(#[from] CartClientError),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
