//! Cart item types.

use serde::{Deserialize, Serialize};

use super::ItemId;

/// A line in the cart.
///
/// `name` and `price` are fixed when the item is first added; later adds for
/// the same id only change `quantity`. `quantity` is stored as given, so it
/// may be zero or negative when the store runs in permissive mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Item id, unique within the cart.
    pub id: ItemId,
    /// Display label.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Number of units.
    pub quantity: i32,
}

/// Input for adding an item to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl NewCartItem {
    /// Create a new cart item input.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: f64, quantity: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }
}

impl From<NewCartItem> for CartItem {
    fn from(input: NewCartItem) -> Self {
        Self {
            id: input.id,
            name: input.name,
            price: input.price,
            quantity: input.quantity,
        }
    }
}
