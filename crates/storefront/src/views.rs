//! Display models for templates.
//!
//! Money is carried as `f64` on the wire; everything shown to the user is
//! recomputed here with `rust_decimal` so line totals and the subtotal agree
//! to the cent. All arithmetic is checked: an amount that does not fit in a
//! `Decimal` is shown as [`UNAVAILABLE`] instead of failing the page.

use bookstore_core::{CartItem, Product};
use rust_decimal::{Decimal, RoundingStrategy};

/// Shown in place of an amount that cannot be represented.
pub const UNAVAILABLE: &str = "N/A";

/// Convert a wire price to a two-place decimal.
///
/// Returns `None` for non-finite prices and for prices outside the range of
/// `Decimal`.
#[must_use]
pub fn to_money(price: f64) -> Option<Decimal> {
    Decimal::try_from(price)
        .ok()
        .map(|amount| amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Format a decimal amount as `$x.xx`, or `-$x.xx` when negative.
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}

/// Format an amount that may have overflowed.
#[must_use]
pub fn display_money(amount: Option<Decimal>) -> String {
    amount.map_or_else(|| UNAVAILABLE.to_string(), format_money)
}

/// Unit price times quantity, or `None` on overflow.
#[must_use]
pub fn line_total(item: &CartItem) -> Option<Decimal> {
    to_money(item.price)?.checked_mul(Decimal::from(item.quantity))
}

/// Product card on the catalog page.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.to_string(),
            price: display_money(to_money(product.price)),
            image: product.image.to_string(),
        }
    }
}

/// One line of the cart on the checkout page.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: i32,
    pub price: String,
    pub line_total: String,
    /// Quantity submitted by the "+" button
    pub increment: i32,
    /// Quantity submitted by the "-" button
    pub decrement: i32,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            quantity: item.quantity,
            price: display_money(to_money(item.price)),
            line_total: display_money(line_total(item)),
            increment: item.quantity.saturating_add(1),
            decrement: item.quantity.saturating_sub(1),
        }
    }
}

/// The cart as rendered on the checkout page.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: i64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&[] as &[CartItem])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&[CartItem]> for CartView {
    fn from(items: &[CartItem]) -> Self {
        Self {
            items: items.iter().map(CartItemView::from).collect(),
            subtotal: display_money(subtotal(items)),
            item_count: item_count(items),
        }
    }
}

/// Sum of quantities, as shown on the cart badge.
#[must_use]
pub fn item_count(items: &[CartItem]) -> i64 {
    items.iter().map(|item| i64::from(item.quantity)).sum()
}

/// Sum of line totals in decimal arithmetic.
///
/// `None` if any line, or the running sum, overflows.
#[must_use]
pub fn subtotal(items: &[CartItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(line_total(item)?))
}
