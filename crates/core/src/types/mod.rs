//! Core types for the bookstore.
//!
//! This module provides the cart and catalog data shapes shared across the
//! GraphQL service and the storefront.

pub mod cart;
pub mod id;
pub mod product;

pub use cart::{CartItem, NewCartItem};
pub use id::ItemId;
pub use product::{Product, ProductKind};
