//! Cart route handlers: the cart screen and the checkout stub.
//!
//! The cart screen renders one fixed cart record. Line items are joined to
//! product metadata client-side, because the cart record only carries
//! product identifiers and quantities.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use tracing::instrument;

use highstreet_core::Price;

use crate::catalog::{Cart, CartLine, Product};
use crate::filters;
use crate::state::AppState;

/// A cart row joined to its product.
#[derive(Clone)]
pub struct CartItemView {
    pub title: String,
    pub price: String,
    pub image: String,
    pub quantity: i64,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    /// Rows whose line item matched a product in the fetched catalog.
    pub items: Vec<CartItemView>,
    /// Total over the matched rows.
    pub total: String,
    /// Whether the cart record holds any line items at all. Rows can still
    /// be empty when the product fetch failed or no line matched.
    pub has_lines: bool,
}

impl CartView {
    /// The empty cart, also used when the cart fetch fails.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Price::ZERO.display(),
            has_lines: false,
        }
    }

    /// Join cart lines to their products and total the matched rows.
    ///
    /// Lines whose product identifier is missing from the fetched product
    /// list are dropped from the rendered rows and excluded from the total.
    #[must_use]
    pub fn join(cart: &Cart, products: &[Product]) -> Self {
        let find = |line: &CartLine| {
            products.iter().find(|product| product.id == line.product_id)
        };

        let items = cart
            .products
            .iter()
            .filter_map(|line| {
                find(line).map(|product| CartItemView {
                    title: product.title.clone(),
                    price: product.price.display(),
                    image: product.image.clone(),
                    quantity: line.quantity,
                })
            })
            .collect();

        let total: Price = cart
            .products
            .iter()
            .filter_map(|line| find(line).map(|product| product.price * line.quantity))
            .sum();

        Self {
            items,
            total: total.display(),
            has_lines: !cart.products.is_empty(),
        }
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Display the cart screen.
///
/// The cart record and the product list are fetched independently; the
/// product list exists only to resolve titles, prices, and images for the
/// cart's line items. Either failure is logged and degrades the render.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let cart_id = state.config().catalog.cart_id;
    let (cart, products) = tokio::join!(
        state.catalog().get_cart(cart_id),
        state.catalog().list_products(),
    );

    let products = products.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch products for cart: {e}");
        Vec::new()
    });

    let cart = match cart {
        Ok(cart) => CartView::join(&cart, &products),
        Err(e) => {
            tracing::warn!("Failed to fetch cart {cart_id}: {e}");
            CartView::empty()
        }
    };

    CartShowTemplate { cart }
}

/// Checkout stub.
///
/// There is no checkout flow; the action is logged and the user returns to
/// the cart.
#[instrument]
pub async fn checkout() -> Redirect {
    tracing::info!("Proceed to checkout");
    Redirect::to("/cart")
}
