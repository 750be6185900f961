//! Checkout route handlers.
//!
//! ```text
//! GET  /checkout           cart, totals and the details form
//! POST /checkout/confirm   simulated payment, then the confirmation page
//! GET  /checkout/complete  operator message
//! ```
//!
//! Customer and payment details are only checked for presence. They are
//! dropped as soon as the check passes and never leave this handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, add_breadcrumb};
use crate::services::OrderReceipt;
use crate::state::AppState;
use crate::views::{CartView, display_money};

/// Shown once the confirmation sequence has finished.
pub const OPERATOR_MESSAGE: &str = "Our operator will contact you soon!";

/// Shown in place of the cart when it cannot be fetched.
pub const CART_LOAD_ERROR: &str = "Error loading cart data.";

// =============================================================================
// Form
// =============================================================================

/// Customer and payment details posted by the checkout page.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
}

impl std::fmt::Debug for CheckoutForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutForm")
            .field("missing", &self.missing_fields())
            .finish_non_exhaustive()
    }
}

impl CheckoutForm {
    /// Labels of the fields left blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Address", &self.address),
            ("City", &self.city),
            ("State", &self.state),
            ("ZIP Code", &self.zip),
            ("Card Number", &self.card_number),
            ("Expiration Date", &self.expiration_date),
            ("CVV", &self.cvv),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }
}

/// Customer details echoed back into the form after a failed submit.
///
/// Payment fields are never echoed.
#[derive(Debug, Clone, Default)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl From<CheckoutForm> for CustomerDetails {
    fn from(form: CheckoutForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            address: form.address,
            city: form.city,
            state: form.state,
            zip: form.zip,
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    /// `None` when the cart could not be loaded
    pub cart: Option<CartView>,
    pub customer: CustomerDetails,
    pub error: Option<String>,
    pub load_error: &'static str,
}

/// Confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "confirmation.html")]
pub struct ConfirmationTemplate {
    pub reference: String,
    pub placed_at: String,
    pub item_count: i64,
    pub total: String,
    /// Seconds until the page advances to the operator message
    pub redirect_secs: u64,
}

impl ConfirmationTemplate {
    fn new(receipt: &OrderReceipt, redirect_secs: u64) -> Self {
        Self {
            reference: receipt.short_reference(),
            placed_at: receipt.placed_at_display(),
            item_count: receipt.item_count,
            total: display_money(receipt.total),
            redirect_secs,
        }
    }
}

/// Final page template.
#[derive(Template, WebTemplate)]
#[template(path = "complete.html")]
pub struct CompleteTemplate {
    pub message: &'static str,
}

// =============================================================================
// Handlers
// =============================================================================

async fn checkout_page(
    state: &AppState,
    customer: CustomerDetails,
    error: Option<String>,
) -> (StatusCode, CheckoutTemplate) {
    let (status, cart) = match state.cart().get_cart().await {
        Ok(items) => (StatusCode::OK, Some(CartView::from(items.as_slice()))),
        Err(e) => {
            tracing::error!("Failed to load cart: {e}");
            (StatusCode::BAD_GATEWAY, None)
        }
    };

    (
        status,
        CheckoutTemplate {
            cart,
            customer,
            error,
            load_error: CART_LOAD_ERROR,
        },
    )
}

/// Display the cart and the checkout form.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    checkout_page(&state, CustomerDetails::default(), None).await
}

/// Confirm the order.
///
/// Blank fields re-render the form with a 400. Otherwise the payment delay
/// runs, the cart is cleared and the confirmation page is returned.
///
/// # Errors
///
/// Returns `AppError::CartService` if the cart could not be cleared.
#[instrument(skip(state))]
pub async fn confirm(
    State(state): State<AppState>,
    Form(form): Form<CheckoutForm>,
) -> Result<Response, AppError> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        let error = format!("Please fill in: {}", missing.join(", "));
        let (_, page) = checkout_page(&state, CustomerDetails::from(form), Some(error)).await;
        return Ok((StatusCode::BAD_REQUEST, page).into_response());
    }
    drop(form);

    add_breadcrumb("checkout", "confirm", &[]);

    let checkout = state.checkout();
    let receipt = checkout.place_order(state.cart()).await?;

    Ok(ConfirmationTemplate::new(&receipt, checkout.timing().redirect_secs()).into_response())
}

/// Display the operator message.
#[instrument]
pub async fn complete() -> impl IntoResponse {
    CompleteTemplate {
        message: OPERATOR_MESSAGE,
    }
}
