//! Simulated checkout.
//!
//! No payment gateway is involved. Placing an order waits out a fixed
//! "processing" delay, clears the shared cart and hands back a receipt built
//! from whatever the cart held at that moment.

use std::time::Duration;

use bookstore_core::CartItem;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::instrument;
use uuid::Uuid;

use crate::cart_client::{CartClient, CartClientError};
use crate::config::CheckoutConfig;
use crate::views;

/// Length of the confirmation animation in `static/css/main.css`.
pub const CONFIRMATION_ANIMATION: Duration = Duration::from_millis(1500);

/// A placed (simulated) order.
#[derive(Debug, Clone)]
pub struct OrderReceipt {
    /// Opaque reference shown to the customer
    pub reference: Uuid,
    pub placed_at: DateTime<Utc>,
    pub item_count: i64,
    /// `None` when the cleared items' total does not fit in a `Decimal`
    pub total: Option<Decimal>,
}

impl OrderReceipt {
    fn from_cleared(items: &[CartItem]) -> Self {
        Self {
            reference: Uuid::new_v4(),
            placed_at: Utc::now(),
            item_count: views::item_count(items),
            total: views::subtotal(items),
        }
    }

    /// Placement time for display, to the minute.
    #[must_use]
    pub fn placed_at_display(&self) -> String {
        self.placed_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }

    /// Short reference for display.
    #[must_use]
    pub fn short_reference(&self) -> String {
        self.reference
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Timing of the confirmation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationTiming {
    pub animation: Duration,
    pub message_delay: Duration,
}

impl ConfirmationTiming {
    /// Time from showing the confirmation until the operator message.
    #[must_use]
    pub fn until_message(&self) -> Duration {
        self.animation + self.message_delay
    }

    /// Whole seconds for a `meta refresh`, rounded up.
    #[must_use]
    pub fn redirect_secs(&self) -> u64 {
        let total = self.until_message();
        total.as_secs() + u64::from(total.subsec_nanos() > 0)
    }
}

/// Runs the simulated payment and clears the cart.
#[derive(Debug, Clone)]
pub struct CheckoutService {
    payment_delay: Duration,
    timing: ConfirmationTiming,
}

impl CheckoutService {
    #[must_use]
    pub const fn new(config: CheckoutConfig) -> Self {
        Self {
            payment_delay: config.payment_delay,
            timing: ConfirmationTiming {
                animation: CONFIRMATION_ANIMATION,
                message_delay: config.message_delay,
            },
        }
    }

    #[must_use]
    pub const fn payment_delay(&self) -> Duration {
        self.payment_delay
    }

    #[must_use]
    pub const fn timing(&self) -> ConfirmationTiming {
        self.timing
    }

    /// Wait out the payment delay, then clear the cart.
    ///
    /// The delay is a plain timer; dropping the future abandons the order
    /// without touching the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart service cannot be reached to clear the
    /// cart.
    #[instrument(skip(self, cart))]
    pub async fn place_order(&self, cart: &CartClient) -> Result<OrderReceipt, CartClientError> {
        tokio::time::sleep(self.payment_delay).await;

        let cleared = cart.clear_cart().await?;
        let receipt = OrderReceipt::from_cleared(&cleared);

        tracing::info!(
            reference = %receipt.reference,
            placed_at = %receipt.placed_at.to_rfc3339(),
            lines = cleared.len(),
            items = receipt.item_count,
            total = %views::display_money(receipt.total),
            "Order placed"
        );

        Ok(receipt)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Instant;

    use bookstore_cart_api::{AppState as CartApiState, CartApiConfig, app};
    use bookstore_core::{CartStore, NewCartItem};
    use url::Url;

    use super::*;

    async fn spawn_cart_api(store: Arc<CartStore>) -> CartClient {
        let state = CartApiState::with_store(CartApiConfig::default(), store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.unwrap();
        });
        CartClient::new(Url::parse(&format!("http://{addr}/graphql")).unwrap())
    }

    fn service(payment_ms: u64) -> CheckoutService {
        CheckoutService::new(CheckoutConfig {
            payment_delay: Duration::from_millis(payment_ms),
            message_delay: Duration::from_millis(2000),
        })
    }

    #[test]
    fn test_redirect_secs_rounds_up() {
        let timing = ConfirmationTiming {
            animation: Duration::from_millis(1500),
            message_delay: Duration::from_millis(2000),
        };
        assert_eq!(timing.until_message(), Duration::from_millis(3500));
        assert_eq!(timing.redirect_secs(), 4);

        let timing = ConfirmationTiming {
            animation: Duration::ZERO,
            message_delay: Duration::from_secs(2),
        };
        assert_eq!(timing.redirect_secs(), 2);
    }

    #[test]
    fn test_default_timing() {
        let service = CheckoutService::new(CheckoutConfig::default());
        assert_eq!(service.payment_delay(), Duration::from_secs(2));
        assert_eq!(service.timing().animation, CONFIRMATION_ANIMATION);
        assert_eq!(service.timing().redirect_secs(), 4);
    }

    #[tokio::test]
    async fn test_place_order_clears_cart() {
        let store = Arc::new(CartStore::seeded());
        let expected_count = store.total_quantity();
        let client = spawn_cart_api(Arc::clone(&store)).await;

        let started = Instant::now();
        let receipt = service(50).place_order(&client).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(50));
        assert_eq!(receipt.item_count, expected_count);
        assert!(receipt.total.is_some_and(|total| total > Decimal::ZERO));
        assert!(receipt.placed_at <= Utc::now());
        assert_eq!(receipt.short_reference().len(), 8);
        assert!(store.is_empty());
        assert!(client.get_cart().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_place_order_on_empty_cart() {
        let store = Arc::new(CartStore::empty());
        let client = spawn_cart_api(store).await;

        let receipt = service(0).place_order(&client).await.unwrap();
        assert_eq!(receipt.item_count, 0);
        assert_eq!(receipt.total, Some(Decimal::ZERO));
    }

    #[test]
    fn test_receipt_total_overflow() {
        let items = vec![
            CartItem::from(NewCartItem::new("x", "X", 1e28, 10)),
            CartItem::from(NewCartItem::new("1", "Book", 10.0, 1)),
        ];
        let receipt = OrderReceipt::from_cleared(&items);

        assert_eq!(receipt.item_count, 11);
        assert_eq!(receipt.total, None);
        assert_eq!(views::display_money(receipt.total), views::UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_place_order_with_overflowing_total() {
        let store = Arc::new(CartStore::empty());
        store.add(NewCartItem::new("x", "X", 1e28, 10)).unwrap();
        let client = spawn_cart_api(Arc::clone(&store)).await;

        let receipt = service(0).place_order(&client).await.unwrap();
        assert_eq!(receipt.item_count, 10);
        assert_eq!(receipt.total, None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_placed_at_display() {
        let receipt = OrderReceipt {
            placed_at: DateTime::parse_from_rfc3339("2026-03-01T09:05:59Z")
                .unwrap()
                .with_timezone(&Utc),
            ..OrderReceipt::from_cleared(&[])
        };
        assert_eq!(receipt.placed_at_display(), "2026-03-01 09:05 UTC");
    }
}
