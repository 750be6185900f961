//! Bookstore Core - cart store and shared types.
//!
//! This crate provides the types shared by every bookstore component:
//! - `cart-api` - GraphQL service exposing the cart
//! - `storefront` - Server-rendered shop and checkout
//! - `cli` - Command-line cart tooling
//!
//! # Architecture
//!
//! The core crate holds the cart state machine and the static catalog, with
//! no HTTP, no GraphQL and no persistence. Transport crates wrap a
//! [`CartStore`] and inject it where requests are handled.
//!
//! # Modules
//!
//! - [`types`] - Item ids, cart items and catalog products
//! - [`catalog`] - The fixed book catalog and the nine-item demo seed
//! - [`store`] - The cart store and its policies

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod store;
pub mod types;

pub use catalog::{catalog, find_product, seed_items};
pub use store::{CartError, CartStore, CartVariant, ParseVariantError, QuantityPolicy};
pub use types::*;
