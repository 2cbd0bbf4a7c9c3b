//! Catalog Source
//!
//! Abstraction over the remote category/product data source. The dashboard
//! only ever talks to a `CatalogSource`; the HTTP and in-memory variants are
//! interchangeable.

use futures::future::BoxFuture;

use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::error::Result;

/// Remote category and product provider
pub trait CatalogSource: Send + Sync + 'static {
    /// Fetch the category list, in source order
    fn fetch_categories(&self) -> BoxFuture<'_, Result<Vec<Category>>>;

    /// Fetch the products of one category from its source locator
    fn fetch_products<'a>(&'a self, category: &'a Category) -> BoxFuture<'a, Result<Vec<Product>>>;
}
