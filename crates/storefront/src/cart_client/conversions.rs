//! Conversions from generated response types to core cart items.

use bookstore_core::{CartItem, ItemId};

use super::queries::{add_to_cart, clear_cart, get_cart, remove_from_cart, update_quantity};

/// Narrow a GraphQL `Int` to the cart's quantity type.
///
/// The service never sends values outside `i32`; anything else is clamped.
pub(super) fn narrow_quantity(quantity: i64) -> i32 {
    i32::try_from(quantity).unwrap_or(if quantity < 0 { i32::MIN } else { i32::MAX })
}

macro_rules! impl_into_cart_item {
    ($($ty:path),* $(,)?) => {
        $(
            impl From<$ty> for CartItem {
                fn from(item: $ty) -> Self {
                    Self {
                        id: ItemId::from(item.id),
                        name: item.name,
                        price: item.price,
                        quantity: narrow_quantity(item.quantity),
                    }
                }
            }
        )*
    };
}

impl_into_cart_item!(
    get_cart::GetCartCart,
    add_to_cart::AddToCartAddToCart,
    remove_from_cart::RemoveFromCartRemoveFromCart,
    update_quantity::UpdateQuantityUpdateQuantity,
    clear_cart::ClearCartClearCart,
);
