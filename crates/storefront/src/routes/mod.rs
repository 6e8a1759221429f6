//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                 - Product list (category strip + two-column grid)
//! GET  /health           - Health check
//!
//! # Products
//! GET  /products/{id}    - Product detail
//!
//! # Cart
//! GET  /cart             - Cart page
//! POST /cart/checkout    - Checkout stub (logs and returns to the cart)
//! ```
//!
//! Navigation is a linear stack: list -> detail -> cart, unwound with plain
//! back links. The only data passed between screens is the selected product
//! identifier in the detail URL; everything else is re-fetched per screen.

pub mod cart;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // The list screen is the entry point
        .route("/", get(products::index))
        // Product detail
        .route("/products/{id}", get(products::show))
        // Cart routes
        .nest("/cart", cart_routes())
}
