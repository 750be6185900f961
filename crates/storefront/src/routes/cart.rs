//! Cart route handlers.
//!
//! Every mutation redirects (303) back to a page that queries the cart
//! again, so what the user sees is always the service's state rather than
//! the mutation's return value. Mutation failures are logged and the
//! redirect still happens.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use bookstore_core::{ItemId, NewCartItem, find_product};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, add_breadcrumb};
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityForm {
    pub id: String,
    pub quantity: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: String,
}

/// Add one copy of a catalog book to the cart.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product is not in the catalog.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let product = find_product(&form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    add_breadcrumb("cart", "add", &[("product_id", product.id)]);

    let item = NewCartItem::new(product.id, product.name, product.price, 1);
    if let Err(e) = state.cart().add_to_cart(&item).await {
        tracing::error!(product_id = product.id, "Failed to add item to cart: {e}");
    }

    Ok(Redirect::to("/").into_response())
}

/// Set a line's quantity.
///
/// Quantities below 1 are ignored here and never reach the service.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateQuantityForm>,
) -> Redirect {
    if form.quantity <= 0 {
        tracing::debug!(id = %form.id, quantity = form.quantity, "Ignoring non-positive quantity");
        return Redirect::to("/checkout");
    }

    add_breadcrumb("cart", "update", &[("id", form.id.as_str())]);

    let id = ItemId::from(form.id);
    match state.cart().update_quantity(&id, form.quantity).await {
        Ok(Some(_)) => {}
        Ok(None) => tracing::warn!(id = %id, "Quantity update for item not in cart"),
        Err(e) => tracing::error!(id = %id, "Failed to update cart: {e}"),
    }

    Redirect::to("/checkout")
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Redirect {
    add_breadcrumb("cart", "remove", &[("id", form.id.as_str())]);

    let id = ItemId::from(form.id);
    match state.cart().remove_from_cart(&id).await {
        Ok(Some(_)) => {}
        Ok(None) => tracing::warn!(id = %id, "Remove for item not in cart"),
        Err(e) => tracing::error!(id = %id, "Failed to remove from cart: {e}"),
    }

    Redirect::to("/checkout")
}
