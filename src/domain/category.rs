//! Category - Selectable Product Grouping

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Unique identifier for a category (the catalog slug)
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub Arc<str>);

impl CategoryId {
    /// Create a new CategoryId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// A catalog entry. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,
    /// Human-readable name
    pub display_name: Arc<str>,
    /// Where this category's products are fetched from
    pub source_locator: Arc<str>,
}

impl Category {
    pub fn new(
        id: impl Into<Arc<str>>,
        display_name: impl Into<Arc<str>>,
        source_locator: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            id: CategoryId::new(id),
            display_name: display_name.into(),
            source_locator: source_locator.into(),
        }
    }
}
