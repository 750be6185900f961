//! The fixed book catalog.
//!
//! The catalog is compiled in and never mutated by cart operations. The same
//! nine titles seed the cart when the service starts in the seeded variant.

use crate::types::{CartItem, Product, ProductKind};

static CATALOG: [Product; 9] = [
    book("1", "The Lord of the Rings", 10.0, "/static/images/book1.webp"),
    book(
        "2",
        "Harry Potter and the Chamber of Secrets (Illustrated Edition)",
        15.0,
        "/static/images/book2.webp",
    ),
    book(
        "3",
        "Harry Potter and the Chamber of Secrets",
        20.0,
        "/static/images/book3.webp",
    ),
    book(
        "4",
        "Harry Potter and the Prisoner of Azkaban",
        15.0,
        "/static/images/book4.webp",
    ),
    book(
        "5",
        "Harry Potter and the Deathly Hallows",
        20.0,
        "/static/images/book5.webp",
    ),
    book(
        "6",
        "Harry Potter and the Goblet of Fire",
        15.0,
        "/static/images/book6.webp",
    ),
    book(
        "7",
        "The Witcher. 1. The Last Wish",
        20.0,
        "/static/images/book7.webp",
    ),
    book(
        "8",
        "The Witcher. 4. Time of Contempt",
        15.0,
        "/static/images/book8.webp",
    ),
    book(
        "9",
        "The Witcher. 6. The Tower of the Swallow",
        20.0,
        "/static/images/book9.webp",
    ),
];

const fn book(id: &'static str, name: &'static str, price: f64, image: &'static str) -> Product {
    Product {
        id,
        name,
        price,
        image,
        kind: ProductKind::Book,
    }
}

/// All catalog products in display order.
#[must_use]
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

/// Look up a catalog product by id.
#[must_use]
pub fn find_product(id: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|product| product.id == id)
}

/// The nine-item demo cart: every catalog book with quantity 1.
#[must_use]
pub fn seed_items() -> Vec<CartItem> {
    CATALOG.iter().map(|product| product.to_cart_item(1)).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_has_nine_books() {
        assert_eq!(catalog().len(), 9);
        assert!(catalog().iter().all(|p| p.kind == ProductKind::Book));
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_catalog_prices_are_non_negative() {
        assert!(catalog().iter().all(|p| p.price >= 0.0));
    }

    #[test]
    fn test_find_product() {
        let product = find_product("7").expect("book 7 exists");
        assert_eq!(product.name, "The Witcher. 1. The Last Wish");
        assert!((product.price - 20.0).abs() < f64::EPSILON);
        assert!(find_product("10").is_none());
    }

    #[test]
    fn test_seed_items_mirror_catalog() {
        let seed = seed_items();
        assert_eq!(seed.len(), 9);
        for (item, product) in seed.iter().zip(catalog()) {
            assert_eq!(item.id, product.id);
            assert_eq!(item.name, product.name);
            assert_eq!(item.quantity, 1);
        }
    }
}
