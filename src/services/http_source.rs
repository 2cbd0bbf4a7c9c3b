//! HTTP Catalog Source
//!
//! Fetches the category catalog and per-category product lists as JSON.
//! Raw payloads are projected onto the domain types here; unknown fields are
//! ignored.

use futures::future::BoxFuture;
use serde::Deserialize;

use crate::domain::category::Category;
use crate::domain::config::SourceConfig;
use crate::domain::product::Product;
use crate::error::{Error, Result};
use crate::services::CatalogSource;

/// Category entry as served by the catalog endpoint
#[derive(Debug, Deserialize)]
struct RawCategory {
    slug: String,
    name: String,
    url: String,
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        Category::new(raw.slug, raw.name, raw.url)
    }
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    id: u64,
    title: String,
    price: f64,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Product::new(raw.id, raw.title, raw.price)
    }
}

/// Product list response; the list sits under `products`
#[derive(Debug, Deserialize)]
struct ProductPage {
    products: Vec<RawProduct>,
}

/// Parse a catalog payload
pub fn parse_categories(body: &str) -> Result<Vec<Category>> {
    let raw: Vec<RawCategory> = serde_json::from_str(body)?;
    Ok(raw.into_iter().map(Category::from).collect())
}

/// Parse a product list payload
pub fn parse_products(body: &str) -> Result<Vec<Product>> {
    let page: ProductPage = serde_json::from_str(body)?;
    Ok(page.products.into_iter().map(Product::from).collect())
}

/// reqwest-backed source
pub struct HttpCatalogSource {
    client: reqwest::Client,
    categories_url: String,
}

impl HttpCatalogSource {
    /// Create a new source from configuration
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            categories_url: config.categories_url.clone(),
        })
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_categories(&self) -> BoxFuture<'_, Result<Vec<Category>>> {
        Box::pin(async move {
            let body = self.get_text(&self.categories_url).await?;
            parse_categories(&body)
        })
    }

    fn fetch_products<'a>(&'a self, category: &'a Category) -> BoxFuture<'a, Result<Vec<Product>>> {
        Box::pin(async move {
            let body = self.get_text(&category.source_locator).await?;
            parse_products(&body)
        })
    }
}

impl std::fmt::Debug for HttpCatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatalogSource")
            .field("categories_url", &self.categories_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_categories_projects_fields_in_order() {
        let body = r#"[
            {"slug": "beauty", "name": "Beauty", "url": "https://dummyjson.com/products/category/beauty"},
            {"slug": "laptops", "name": "Laptops", "url": "https://dummyjson.com/products/category/laptops"}
        ]"#;

        let categories = parse_categories(body).expect("parse categories");

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id.as_str(), "beauty");
        assert_eq!(categories[0].display_name.as_ref(), "Beauty");
        assert_eq!(categories[1].id.as_str(), "laptops");
        assert_eq!(
            categories[1].source_locator.as_ref(),
            "https://dummyjson.com/products/category/laptops"
        );
    }

    #[test]
    fn parse_products_ignores_extra_fields() {
        let body = r#"{
            "products": [
                {"id": 1, "title": "Phone", "price": 500, "rating": 4.5, "stock": 3},
                {"id": 2, "title": "Laptop", "price": 1200.5}
            ],
            "total": 2, "skip": 0, "limit": 30
        }"#;

        let products = parse_products(body).expect("parse products");

        assert_eq!(
            products,
            vec![Product::new(1, "Phone", 500.0), Product::new(2, "Laptop", 1200.5)]
        );
    }

    #[test]
    fn parse_products_rejects_missing_list() {
        assert!(parse_products(r#"{"items": []}"#).is_err());
    }

    #[test]
    fn parse_categories_rejects_malformed_payload() {
        assert!(parse_categories(r#"{"slug": "beauty"}"#).is_err());
    }
}
