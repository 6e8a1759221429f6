//! HTTP client for the catalog service.

use std::sync::Arc;

use highstreet_core::{CartId, ProductId};
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::CatalogError;
use super::types::{Cart, Product};
use crate::config::CatalogConfig;

/// Maximum body excerpt length included in error diagnostics.
const BODY_EXCERPT_LEN: usize = 200;

/// Client for the read-only REST catalog service.
///
/// Each operation issues a single GET request. Nothing is cached and nothing
/// is retried; callers decide how to degrade on failure.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    /// Execute a GET request and decode the JSON response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %excerpt(&body),
                "Catalog service returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %excerpt(&body),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }

    /// Fetch the full product collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get("/products").await
    }

    /// Fetch a single product by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed. The service answers an unknown identifier with an empty body,
    /// which surfaces here as a parse error.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        self.get(&format!("/products/{product_id}")).await
    }

    /// Fetch the distinct category names.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get("/products/categories").await
    }

    /// Fetch a cart record by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self), fields(cart_id = %cart_id))]
    pub async fn get_cart(&self, cart_id: CartId) -> Result<Cart, CatalogError> {
        self.get(&format!("/carts/{cart_id}")).await
    }
}

/// Truncate a response body for log and error output.
fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = CatalogConfig {
            base_url: "https://fakestoreapi.com/".to_string(),
            cart_id: CartId::new(1),
        };
        let client = CatalogClient::new(&config);
        assert_eq!(client.inner.base_url, "https://fakestoreapi.com");
    }

    #[test]
    fn test_excerpt_truncates() {
        let long = "x".repeat(500);
        assert_eq!(excerpt(&long).len(), BODY_EXCERPT_LEN);
        assert_eq!(excerpt("short"), "short");
    }
}
