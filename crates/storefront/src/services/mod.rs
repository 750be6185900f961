//! Business logic services for storefront.
//!
//! # Services
//!
//! - `checkout` - Simulated payment and order placement

pub mod checkout;

pub use checkout::{CheckoutService, ConfirmationTiming, OrderReceipt};
