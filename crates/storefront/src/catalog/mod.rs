//! Catalog service client.
//!
//! # Architecture
//!
//! - Plain REST+JSON over `reqwest`; the catalog service is the source of
//!   truth, with no local sync
//! - No caching, no retry, no request dedup: every screen re-fetches what it
//!   needs, and failures degrade to the screen's empty state at the call site
//!
//! # Example
//!
//! ```rust,ignore
//! use highstreet_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog);
//!
//! // Fetch a product
//! let product = client.get_product(ProductId::new(1)).await?;
//!
//! // Fetch the cart and the products it references
//! let cart = client.get_cart(CartId::new(1)).await?;
//! let products = client.list_products().await?;
//! ```

mod client;
pub mod types;

pub use client::CatalogClient;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service responded with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body excerpt for diagnostics.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Status {
            status: 503,
            body: "upstream unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 503: upstream unavailable"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let parse_err =
            serde_json::from_str::<Vec<String>>("not json").expect_err("invalid json");
        let err = CatalogError::Parse(parse_err);
        assert!(err.to_string().starts_with("JSON parse error:"));
    }
}
