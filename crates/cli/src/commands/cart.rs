//! Cart commands over the GraphQL service.

use std::io::Write;

use bookstore_core::{CartItem, ItemId, NewCartItem, find_product};
use bookstore_storefront::cart_client::CartClient;
use bookstore_storefront::views::{display_money, line_total, subtotal, to_money};
use url::Url;

use super::CommandError;

/// Build the client for `endpoint`.
#[must_use]
pub fn client(endpoint: Url) -> CartClient {
    tracing::debug!(%endpoint, "Using cart service");
    CartClient::new(endpoint)
}

fn write_item(out: &mut impl Write, item: &CartItem) -> std::io::Result<()> {
    writeln!(
        out,
        "{:>3}  {:>4} x {:>8}  {:>9}  {}",
        item.id,
        item.quantity,
        display_money(to_money(item.price)),
        display_money(line_total(item)),
        item.name
    )
}

/// Print the cart followed by the subtotal.
///
/// # Errors
///
/// Returns an error if the service call or writing fails.
pub async fn list(client: &CartClient, out: &mut impl Write) -> Result<(), CommandError> {
    let items = client.get_cart().await?;
    if items.is_empty() {
        writeln!(out, "Cart is empty")?;
        return Ok(());
    }

    for item in &items {
        write_item(out, item)?;
    }
    writeln!(out, "Total: {}", display_money(subtotal(&items)))?;
    Ok(())
}

/// Add `quantity` copies of a catalog book.
///
/// # Errors
///
/// Returns `CommandError::UnknownProduct` for ids outside the catalog, or an
/// error if the service rejects the item.
pub async fn add(
    client: &CartClient,
    product_id: &str,
    quantity: i32,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let product = find_product(product_id)
        .ok_or_else(|| CommandError::UnknownProduct(product_id.to_string()))?;

    let input = NewCartItem::new(product.id, product.name, product.price, quantity);
    match client.add_to_cart(&input).await? {
        Some(item) => write_item(out, &item)?,
        None => writeln!(out, "Service returned no item for {product_id}")?,
    }
    Ok(())
}

/// Remove a line.
///
/// # Errors
///
/// Returns an error if the service call or writing fails.
pub async fn remove(client: &CartClient, id: &str, out: &mut impl Write) -> Result<(), CommandError> {
    match client.remove_from_cart(&ItemId::from(id)).await? {
        Some(item) => writeln!(out, "Removed {} ({})", item.name, item.id)?,
        None => writeln!(out, "No item {id} in cart")?,
    }
    Ok(())
}

/// Overwrite a line's quantity.
///
/// # Errors
///
/// Returns an error if the service rejects the quantity.
pub async fn set(
    client: &CartClient,
    id: &str,
    quantity: i32,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    match client.update_quantity(&ItemId::from(id), quantity).await? {
        Some(item) => write_item(out, &item)?,
        None => writeln!(out, "No item {id} in cart")?,
    }
    Ok(())
}

/// Empty the cart and report what was removed.
///
/// # Errors
///
/// Returns an error if the service call or writing fails.
pub async fn clear(client: &CartClient, out: &mut impl Write) -> Result<(), CommandError> {
    let cleared = client.clear_cart().await?;
    writeln!(
        out,
        "Cleared {} line(s), {}",
        cleared.len(),
        display_money(subtotal(&cleared))
    )?;
    Ok(())
}
