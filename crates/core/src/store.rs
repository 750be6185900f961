//! The cart store.
//!
//! A [`CartStore`] owns the items of one cart and exposes the five cart
//! operations: `list`, `add`, `remove`, `set_quantity` and `clear`. Each
//! operation runs inside a single lock scope, so concurrent callers observe
//! find-then-mutate as one step. Between operations the last write wins.
//!
//! # Example
//!
//! ```rust
//! use bookstore_core::{CartStore, NewCartItem};
//!
//! let store = CartStore::empty();
//! store.add(NewCartItem::new("1", "Book A", 10.0, 1))?;
//! store.add(NewCartItem::new("1", "Book A", 10.0, 2))?;
//! assert_eq!(store.list()[0].quantity, 3);
//!
//! let cleared = store.clear();
//! assert_eq!(cleared.len(), 1);
//! assert!(store.is_empty());
//! # Ok::<(), bookstore_core::CartError>(())
//! ```

use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::seed_items;
use crate::types::{CartItem, ItemId, NewCartItem};

/// Errors returned by cart operations.
///
/// A missing id is not an error: `remove` and `set_quantity` return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Quantity rejected by [`QuantityPolicy::Strict`].
    #[error("Invalid quantity {0}: must be at least 1")]
    InvalidQuantity(i32),
}

/// Initial contents of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartVariant {
    /// Start with no items.
    #[default]
    Empty,
    /// Start with the nine catalog books, one of each.
    ///
    /// Only the starting contents differ; both variants expose the same
    /// operations, `add` included.
    Seeded,
}

impl CartVariant {
    /// Items a store of this variant starts with.
    #[must_use]
    pub fn initial_items(self) -> Vec<CartItem> {
        match self {
            Self::Empty => Vec::new(),
            Self::Seeded => seed_items(),
        }
    }

    /// Lowercase name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Seeded => "seeded",
        }
    }
}

/// Error parsing a [`CartVariant`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cart variant '{0}' (expected 'empty' or 'seeded')")]
pub struct ParseVariantError(String);

impl FromStr for CartVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "seeded" => Ok(Self::Seeded),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

/// How the store treats non-positive quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityPolicy {
    /// Store any quantity as given, including zero and negative values.
    #[default]
    Permissive,
    /// Reject quantities below 1 in `add` and `set_quantity`.
    Strict,
}

impl QuantityPolicy {
    fn check(self, quantity: i32) -> Result<(), CartError> {
        match self {
            Self::Strict if quantity < 1 => Err(CartError::InvalidQuantity(quantity)),
            _ => Ok(()),
        }
    }
}

/// A single cart held in memory.
///
/// Construct one per process (or per test) and share it behind an `Arc`.
#[derive(Debug)]
pub struct CartStore {
    items: Mutex<Vec<CartItem>>,
    variant: CartVariant,
    policy: QuantityPolicy,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl CartStore {
    /// Create a store with the variant's initial items.
    #[must_use]
    pub fn new(variant: CartVariant, policy: QuantityPolicy) -> Self {
        Self {
            items: Mutex::new(variant.initial_items()),
            variant,
            policy,
        }
    }

    /// Create an empty, permissive store.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(CartVariant::Empty, QuantityPolicy::Permissive)
    }

    /// Create a permissive store pre-seeded with the nine demo books.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(CartVariant::Seeded, QuantityPolicy::Permissive)
    }

    /// Variant the store was created with.
    #[must_use]
    pub const fn variant(&self) -> CartVariant {
        self.variant
    }

    /// Quantity policy in effect.
    #[must_use]
    pub const fn policy(&self) -> QuantityPolicy {
        self.policy
    }

    // A panic while holding the lock cannot leave the Vec half-mutated by
    // these operations, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<CartItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current cart contents in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<CartItem> {
        self.lock().clone()
    }

    /// Add an item, or increase the quantity of the item with the same id.
    ///
    /// For an existing id only `quantity` changes; the supplied name and
    /// price are ignored. Increments saturate at `i32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] under [`QuantityPolicy::Strict`]
    /// when `quantity < 1`. Never fails under the permissive policy.
    pub fn add(&self, input: NewCartItem) -> Result<CartItem, CartError> {
        self.policy.check(input.quantity)?;

        let mut items = self.lock();
        if let Some(existing) = items.iter_mut().find(|item| item.id == input.id) {
            existing.quantity = existing.quantity.saturating_add(input.quantity);
            return Ok(existing.clone());
        }

        let item = CartItem::from(input);
        items.push(item.clone());
        Ok(item)
    }

    /// Remove the first item with `id`, returning it.
    ///
    /// Returns `None` when no item matches; the cart is unchanged.
    pub fn remove(&self, id: &ItemId) -> Option<CartItem> {
        let mut items = self.lock();
        let index = items.iter().position(|item| &item.id == id)?;
        Some(items.remove(index))
    }

    /// Overwrite the quantity of the item with `id`.
    ///
    /// Returns `Ok(None)` when no item matches.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] under [`QuantityPolicy::Strict`]
    /// when `quantity < 1`. The permissive policy stores any value, and an
    /// item set to zero stays in the cart.
    pub fn set_quantity(&self, id: &ItemId, quantity: i32) -> Result<Option<CartItem>, CartError> {
        self.policy.check(quantity)?;

        let mut items = self.lock();
        Ok(items.iter_mut().find(|item| &item.id == id).map(|item| {
            item.quantity = quantity;
            item.clone()
        }))
    }

    /// Empty the cart, returning what it held.
    pub fn clear(&self) -> Vec<CartItem> {
        std::mem::take(&mut *self.lock())
    }

    /// Restore the variant's initial contents, returning what was replaced.
    pub fn reset(&self) -> Vec<CartItem> {
        std::mem::replace(&mut *self.lock(), self.variant.initial_items())
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Sum of quantities across all items.
    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        self.lock().iter().map(|item| i64::from(item.quantity)).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::from(s)
    }

    #[test]
    fn test_add_new_item() {
        let store = CartStore::empty();
        let item = store.add(NewCartItem::new("1", "Book A", 10.0, 1)).unwrap();

        assert_eq!(item.id, "1");
        assert_eq!(item.name, "Book A");
        assert_eq!(item.quantity, 1);
        assert_eq!(store.list(), vec![item]);
    }

    #[test]
    fn test_add_existing_increments_and_keeps_first_name_and_price() {
        let store = CartStore::empty();
        store.add(NewCartItem::new("1", "Book A", 10.0, 1)).unwrap();
        let item = store
            .add(NewCartItem::new("1", "Renamed", 99.0, 2))
            .unwrap();

        assert_eq!(item.quantity, 3);
        assert_eq!(item.name, "Book A");
        assert!((item.price - 10.0).abs() < f64::EPSILON);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_accepts_zero_and_negative_quantities() {
        let store = CartStore::empty();
        let zero = store.add(NewCartItem::new("1", "A", 1.0, 0)).unwrap();
        let negative = store.add(NewCartItem::new("2", "B", 1.0, -4)).unwrap();

        assert_eq!(zero.quantity, 0);
        assert_eq!(negative.quantity, -4);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_saturates_quantity() {
        let store = CartStore::empty();
        store.add(NewCartItem::new("1", "A", 1.0, i32::MAX)).unwrap();
        let item = store.add(NewCartItem::new("1", "A", 1.0, 5)).unwrap();
        assert_eq!(item.quantity, i32::MAX);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let store = CartStore::empty();
        for n in ["3", "1", "2"] {
            store.add(NewCartItem::new(n, n, 1.0, 1)).unwrap();
        }
        let ids: Vec<_> = store.list().into_iter().map(|i| i.id.into_inner()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn test_remove_missing_returns_none_and_leaves_cart() {
        let store = CartStore::seeded();
        let before = store.list();

        assert!(store.remove(&id("missing")).is_none());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_remove_present_returns_item_and_keeps_order() {
        let store = CartStore::seeded();
        let before = store.list();

        let removed = store.remove(&id("4")).unwrap();
        assert_eq!(removed, before[3]);

        let after = store.list();
        assert_eq!(after.len(), before.len() - 1);
        let expected: Vec<_> = before.into_iter().filter(|i| i.id != "4").collect();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let store = CartStore::seeded();
        let item = store.set_quantity(&id("2"), 7).unwrap().unwrap();
        assert_eq!(item.quantity, 7);
        assert_eq!(store.list()[1].quantity, 7);
    }

    #[test]
    fn test_set_quantity_does_not_clamp() {
        let store = CartStore::seeded();
        assert_eq!(store.set_quantity(&id("1"), 0).unwrap().unwrap().quantity, 0);
        assert_eq!(store.set_quantity(&id("1"), -3).unwrap().unwrap().quantity, -3);
        assert_eq!(store.len(), 9);
    }

    #[test]
    fn test_set_quantity_missing_returns_none() {
        let store = CartStore::empty();
        assert_eq!(store.set_quantity(&id("1"), 2).unwrap(), None);
    }

    #[test]
    fn test_clear_returns_previous_contents() {
        let store = CartStore::seeded();
        let before = store.list();

        let cleared = store.clear();
        assert_eq!(cleared, before);
        assert!(store.list().is_empty());
        assert!(store.clear().is_empty());
    }

    #[test]
    fn test_reset_restores_variant_contents() {
        let store = CartStore::seeded();
        store.clear();
        store.add(NewCartItem::new("x", "X", 1.0, 1)).unwrap();

        let replaced = store.reset();
        assert_eq!(replaced.len(), 1);
        assert_eq!(store.list(), seed_items());

        let empty = CartStore::empty();
        empty.add(NewCartItem::new("x", "X", 1.0, 1)).unwrap();
        empty.reset();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_strict_policy_rejects_non_positive() {
        let store = CartStore::new(CartVariant::Seeded, QuantityPolicy::Strict);

        assert_eq!(
            store.add(NewCartItem::new("1", "A", 1.0, 0)),
            Err(CartError::InvalidQuantity(0))
        );
        assert_eq!(
            store.set_quantity(&id("1"), -1),
            Err(CartError::InvalidQuantity(-1))
        );
        assert_eq!(store.list(), seed_items());
        assert!(store.set_quantity(&id("1"), 2).unwrap().is_some());
    }

    #[test]
    fn test_total_quantity() {
        let store = CartStore::empty();
        store.add(NewCartItem::new("1", "A", 10.0, 2)).unwrap();
        store.add(NewCartItem::new("2", "B", 15.0, 1)).unwrap();

        assert_eq!(store.total_quantity(), 3);
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("seeded".parse::<CartVariant>(), Ok(CartVariant::Seeded));
        assert_eq!(" Empty ".parse::<CartVariant>(), Ok(CartVariant::Empty));
        assert!("nine".parse::<CartVariant>().is_err());
        assert_eq!(CartVariant::default(), CartVariant::Empty);
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let store = Arc::new(CartStore::empty());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        store.add(NewCartItem::new("1", "A", 1.0, 1)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].quantity, 800);
    }

    #[test]
    fn test_scenario_add_set_zero_remove() {
        let store = CartStore::empty();
        store.add(NewCartItem::new("1", "Book A", 10.0, 1)).unwrap();
        store.add(NewCartItem::new("1", "Book A", 10.0, 2)).unwrap();

        let items = store.list();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);

        store.set_quantity(&id("1"), 0).unwrap();
        let items = store.list();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 0);

        store.remove(&id("1"));
        assert!(store.list().is_empty());
    }
}
