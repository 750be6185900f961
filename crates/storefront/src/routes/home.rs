//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use bookstore_core::catalog;
use tracing::instrument;

use crate::state::AppState;
use crate::views::{self, ProductView};

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductView>,
    /// Summed cart quantity; `None` when the cart could not be loaded
    pub cart_count: Option<i64>,
}

/// Display the catalog.
///
/// The badge comes from a fresh cart query on every render.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let cart_count = match state.cart().get_cart().await {
        Ok(items) => Some(views::item_count(&items)),
        Err(e) => {
            tracing::error!("Failed to load cart for badge: {e}");
            None
        }
    };

    HomeTemplate {
        products: catalog().iter().map(ProductView::from).collect(),
        cart_count,
    }
}
