//! In-Memory Catalog Source
//!
//! Serves a fixed catalog from memory with optional per-category latency and
//! injected failures. Backs offline mode and the dashboard tests.

use ahash::AHashMap;
use futures::future::BoxFuture;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::domain::category::{Category, CategoryId};
use crate::domain::product::Product;
use crate::error::{Error, Result};
use crate::services::CatalogSource;

#[derive(Debug, Default)]
struct Shelf {
    products: Vec<Product>,
    latency: Duration,
    failure: Option<String>,
}

/// Fixture-backed source
#[derive(Debug, Default)]
pub struct InMemorySource {
    categories: Vec<Category>,
    shelves: AHashMap<CategoryId, Shelf>,
    catalog_latency: Duration,
    catalog_failure: Mutex<Option<String>>,
    catalog_fetches: AtomicUsize,
    product_fetches: Mutex<AHashMap<CategoryId, usize>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category with its products
    pub fn with_category(mut self, category: Category, products: Vec<Product>) -> Self {
        self.shelves.insert(
            category.id.clone(),
            Shelf {
                products,
                ..Default::default()
            },
        );
        self.categories.push(category);
        self
    }

    /// Delay product responses for a category
    pub fn with_latency(mut self, category: impl Into<CategoryId>, latency: Duration) -> Self {
        self.shelves.entry(category.into()).or_default().latency = latency;
        self
    }

    /// Delay catalog responses
    pub fn with_catalog_latency(mut self, latency: Duration) -> Self {
        self.catalog_latency = latency;
        self
    }

    /// Make product fetches for a category fail
    pub fn with_product_failure(
        mut self,
        category: impl Into<CategoryId>,
        message: impl Into<String>,
    ) -> Self {
        self.shelves.entry(category.into()).or_default().failure = Some(message.into());
        self
    }

    /// Make catalog fetches fail until `set_catalog_failure(None)`
    pub fn with_catalog_failure(self, message: impl Into<String>) -> Self {
        self.set_catalog_failure(Some(message.into()));
        self
    }

    pub fn set_catalog_failure(&self, message: Option<String>) {
        if let Ok(mut failure) = self.catalog_failure.lock() {
            *failure = message;
        }
    }

    /// Number of catalog fetches served so far
    pub fn catalog_fetches(&self) -> usize {
        self.catalog_fetches.load(Ordering::SeqCst)
    }

    /// Number of product fetches issued for a category
    pub fn product_fetches(&self, category: &CategoryId) -> usize {
        self.product_fetches
            .lock()
            .map(|counts| counts.get(category).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Sample catalog used in offline mode
    pub fn fixtures() -> Self {
        Self::new()
            .with_category(
                Category::new("smartphones", "Smartphones", "memory://smartphones"),
                vec![
                    Product::new(1, "iPhone 9", 549.0),
                    Product::new(2, "iPhone X", 899.0),
                    Product::new(3, "Samsung Universe 9", 1249.0),
                    Product::new(4, "OPPOF19", 280.0),
                    Product::new(5, "Huawei P30", 499.0),
                ],
            )
            .with_category(
                Category::new("laptops", "Laptops", "memory://laptops"),
                vec![
                    Product::new(6, "MacBook Pro", 1749.0),
                    Product::new(7, "Samsung Galaxy Book", 1499.0),
                    Product::new(8, "Microsoft Surface Laptop 4", 1499.0),
                    Product::new(9, "Infinix INBOOK", 1099.0),
                ],
            )
            .with_category(
                Category::new("groceries", "Groceries", "memory://groceries"),
                vec![
                    Product::new(16, "Apple", 1.99),
                    Product::new(17, "Beef Steak", 12.99),
                    Product::new(18, "Cat Food", 8.99),
                ],
            )
    }
}

impl CatalogSource for InMemorySource {
    fn fetch_categories(&self) -> BoxFuture<'_, Result<Vec<Category>>> {
        Box::pin(async move {
            self.catalog_fetches.fetch_add(1, Ordering::SeqCst);

            if !self.catalog_latency.is_zero() {
                tokio::time::sleep(self.catalog_latency).await;
            }

            let failure = self
                .catalog_failure
                .lock()
                .map(|failure| failure.clone())
                .unwrap_or(None);
            if let Some(message) = failure {
                return Err(Error::Invalid { message });
            }

            Ok(self.categories.clone())
        })
    }

    fn fetch_products<'a>(&'a self, category: &'a Category) -> BoxFuture<'a, Result<Vec<Product>>> {
        Box::pin(async move {
            if let Ok(mut counts) = self.product_fetches.lock() {
                *counts.entry(category.id.clone()).or_insert(0) += 1;
            }

            let Some(shelf) = self.shelves.get(&category.id) else {
                return Err(Error::Invalid {
                    message: format!("no products at {}", category.source_locator),
                });
            };

            if !shelf.latency.is_zero() {
                tokio::time::sleep(shelf.latency).await;
            }

            match &shelf.failure {
                Some(message) => Err(Error::Invalid {
                    message: message.clone(),
                }),
                None => Ok(shelf.products.clone()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_categories_in_insertion_order() {
        let source = InMemorySource::fixtures();

        let categories = source.fetch_categories().await.expect("categories");

        let ids: Vec<_> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["smartphones", "laptops", "groceries"]);
        assert_eq!(source.catalog_fetches(), 1);
    }

    #[tokio::test]
    async fn counts_product_fetches_per_category() {
        let source = InMemorySource::fixtures();
        let laptops = Category::new("laptops", "Laptops", "memory://laptops");

        let products = source.fetch_products(&laptops).await.expect("products");

        assert_eq!(products.len(), 4);
        assert_eq!(source.product_fetches(&laptops.id), 1);
        assert_eq!(source.product_fetches(&CategoryId::from("groceries")), 0);
    }

    #[tokio::test]
    async fn injected_failures_surface_as_errors() {
        let source = InMemorySource::fixtures()
            .with_product_failure("groceries", "boom")
            .with_catalog_failure("offline");
        let groceries = Category::new("groceries", "Groceries", "memory://groceries");

        assert!(source.fetch_categories().await.is_err());
        assert!(source.fetch_products(&groceries).await.is_err());

        source.set_catalog_failure(None);
        assert!(source.fetch_categories().await.is_ok());
    }
}
