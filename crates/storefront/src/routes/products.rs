//! Product route handlers: the list screen and the detail screen.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use highstreet_core::{ProductId, StarUnit};

use crate::catalog::Product;
use crate::filters;
use crate::state::AppState;

// =============================================================================
// Category Strip
// =============================================================================

/// Illustrative images for the known category names.
///
/// Categories missing from this table render without an image.
const CATEGORY_IMAGES: &[(&str, &str)] = &[
    (
        "electronics",
        "https://fakestoreapi.com/img/81QpkIctqPL._AC_SX679_.jpg",
    ),
    (
        "jewelery",
        "https://fakestoreapi.com/img/71YAIFU48IL._AC_UL640_QL65_ML3_.jpg",
    ),
    (
        "men's clothing",
        "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
    ),
    (
        "women's clothing",
        "https://fakestoreapi.com/img/51Y5NI-I5jL._AC_UX679_.jpg",
    ),
];

/// Look up the illustrative image for a category name.
fn category_image(name: &str) -> Option<&'static str> {
    CATEGORY_IMAGES
        .iter()
        .find(|(category, _)| *category == name)
        .map(|(_, url)| *url)
}

/// Category badge data for the strip.
#[derive(Clone)]
pub struct CategoryView {
    pub name: String,
    /// Illustrative image, when the category is a known one.
    pub image: Option<&'static str>,
    /// Whether this category is the active filter.
    pub active: bool,
    /// Where tapping the badge navigates: toggles the filter on, or back off.
    pub href: String,
}

impl CategoryView {
    fn new(name: String, selected: Option<&str>) -> Self {
        let active = selected == Some(name.as_str());
        let href = if active {
            // Tapping the active category clears the filter
            "/".to_string()
        } else {
            format!("/?category={}", urlencoding::encode(&name))
        };

        Self {
            image: category_image(&name),
            active,
            href,
            name,
        }
    }
}

// =============================================================================
// List Screen
// =============================================================================

/// Product cell data for the grid.
#[derive(Clone)]
pub struct ProductCellView {
    pub id: i64,
    pub title: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductCellView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            title: product.title.clone(),
            price: product.price.display(),
            image: product.image.clone(),
        }
    }
}

/// Keep only the products in the selected category.
///
/// No selection returns the list unchanged. Purely synchronous: changing the
/// filter never triggers a new fetch.
fn filter_products<'a>(products: &'a [Product], selected: Option<&str>) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| selected.is_none_or(|category| product.category == category))
        .collect()
}

/// Category filter query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// Product list page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub categories: Vec<CategoryView>,
    pub products: Vec<ProductCellView>,
}

/// Display the product list screen.
///
/// The product and category fetches are independent; neither blocks the
/// other, and either failure just leaves its list empty.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let (products, categories) = tokio::join!(
        state.catalog().list_products(),
        state.catalog().list_categories(),
    );

    let products = products.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch products: {e}");
        Vec::new()
    });
    let categories = categories.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch categories: {e}");
        Vec::new()
    });

    let selected = query.category.as_deref();

    ProductsIndexTemplate {
        categories: categories
            .into_iter()
            .map(|name| CategoryView::new(name, selected))
            .collect(),
        products: filter_products(&products, selected)
            .into_iter()
            .map(ProductCellView::from)
            .collect(),
    }
}

// =============================================================================
// Detail Screen
// =============================================================================

/// Product detail display data for templates.
#[derive(Clone)]
pub struct ProductDetailView {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
    /// The five star units in display order.
    pub stars: Vec<StarUnit>,
    pub review_count: i64,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.display(),
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            stars: product.rating.stars().units(),
            review_count: product.rating.count,
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetailView,
}

/// Loading placeholder template.
#[derive(Template, WebTemplate)]
#[template(path = "products/loading.html")]
pub struct ProductLoadingTemplate;

/// Display the product detail screen.
///
/// A failed fetch renders the loading placeholder, not an error page: the
/// screen shows the same thing it would while the data was still on its way.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.catalog().get_product(ProductId::new(id)).await {
        Ok(product) => ProductShowTemplate {
            product: ProductDetailView::from(&product),
        }
        .into_response(),
        Err(e) => {
            tracing::warn!("Failed to fetch product {id}: {e}");
            ProductLoadingTemplate.into_response()
        }
    }
}
