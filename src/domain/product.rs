//! Product - Priced Item Within a Category

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Product identifier, unique within one category's result set
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A product as returned by a category's product source
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: Arc<str>,
    pub price: f64,
}

impl Product {
    pub fn new(id: u64, title: impl Into<Arc<str>>, price: f64) -> Self {
        Self {
            id: ProductId(id),
            title: title.into(),
            price,
        }
    }

    /// Whether the price is usable as a chart value
    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }
}
