//! Catalog listing.

use std::io::Write;

use bookstore_core::catalog;

use super::CommandError;

/// Print every catalog book as `id  price  name`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn list(out: &mut impl Write) -> Result<(), CommandError> {
    for product in catalog() {
        writeln!(out, "{:>3}  ${:>6.2}  {}", product.id, product.price, product.name)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_book() {
        let mut out = Vec::new();
        list(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 9);
        assert!(text.lines().next().unwrap().contains("The Lord of the Rings"));
    }
}
