//! Domain types for the catalog service.
//!
//! These mirror the JSON shapes the service returns. Field names follow Rust
//! conventions and map to the service's camelCase on the wire.

use chrono::{DateTime, Utc};
use highstreet_core::{CartId, Price, ProductId, Rating, UserId};
use serde::{Deserialize, Serialize};

// =============================================================================
// Product Types
// =============================================================================

/// A product snapshot from the catalog service.
///
/// Immutable once fetched; nothing in the storefront mutates product data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub description: String,
    /// Category name, also the filter key on the list screen.
    pub category: String,
    /// Product image URL.
    pub image: String,
    /// Average rating and review count.
    pub rating: Rating,
}

// =============================================================================
// Cart Types
// =============================================================================

/// A cart record with its line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: CartId,
    /// Owner of the cart.
    pub user_id: UserId,
    /// When the cart was created.
    pub date: DateTime<Utc>,
    /// Line items; the service calls these `products`.
    pub products: Vec<CartLine>,
}

/// A single line item in a cart: a product reference and a quantity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_service_json() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).expect("product json");
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.display(), "$109.95");
        assert_eq!(product.category, "men's clothing");
        assert!((product.rating.rate - 3.9).abs() < f64::EPSILON);
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn test_cart_deserializes_service_json() {
        // The service also sends a `__v` field; unknown fields are ignored.
        let json = r#"{
            "id": 1,
            "userId": 1,
            "date": "2020-03-02T00:00:00.000Z",
            "products": [
                { "productId": 1, "quantity": 4 },
                { "productId": 2, "quantity": 1 }
            ],
            "__v": 0
        }"#;

        let cart: Cart = serde_json::from_str(json).expect("cart json");
        assert_eq!(cart.id, CartId::new(1));
        assert_eq!(cart.user_id, UserId::new(1));
        assert_eq!(cart.products.len(), 2);
        assert_eq!(cart.products.first().map(|l| l.quantity), Some(4));
        assert_eq!(
            cart.products.first().map(|l| l.product_id),
            Some(ProductId::new(1))
        );
    }

    #[test]
    fn test_category_list_deserializes_as_strings() {
        let json = r#"["electronics","jewelery","men's clothing","women's clothing"]"#;
        let categories: Vec<String> = serde_json::from_str(json).expect("category json");
        assert_eq!(categories.len(), 4);
    }
}
