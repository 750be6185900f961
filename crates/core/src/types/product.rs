//! Catalog product types.

use serde::{Deserialize, Serialize};

use super::{CartItem, ItemId};

/// Kind of catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    #[default]
    Book,
}

impl ProductKind {
    /// Lowercase label used in listings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
        }
    }
}

/// A read-only catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
    /// Image path served by the storefront.
    pub image: &'static str,
    #[serde(rename = "type")]
    pub kind: ProductKind,
}

impl Product {
    /// Build the cart line for this product with the given quantity.
    #[must_use]
    pub fn to_cart_item(&self, quantity: i32) -> CartItem {
        CartItem {
            id: ItemId::from(self.id),
            name: self.name.to_string(),
            price: self.price,
            quantity,
        }
    }
}
