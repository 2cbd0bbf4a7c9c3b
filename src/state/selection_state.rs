//! SelectionState - Selected Category, Product Subset and Loaded Products
//!
//! Single source of truth for what the user has chosen. Invariants held
//! after every operation:
//!
//! - selected product ids are a subset of the loaded product ids
//! - a category change clears the product selection and the loaded products
//!   in the same step
//! - loaded products are empty until the selected category's fetch resolves
//!
//! Every category change or clear bumps the generation; product results are
//! applied only when they carry the current generation.

use ahash::AHashSet;

use crate::domain::category::CategoryId;
use crate::domain::product::{Product, ProductId};
use crate::error::{Error, Result};
use crate::services::Generation;
use crate::state::load_state::LoadState;

/// Outcome of `select_category`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChange {
    /// Same value as before; nothing happened
    Unchanged,
    /// Selection cleared; no fetch needed
    Cleared,
    /// New category selected; its products must be fetched under `generation`
    Selected {
        category: CategoryId,
        generation: Generation,
    },
}

/// State for the current filter selection
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_category: Option<CategoryId>,
    selected_product_ids: AHashSet<ProductId>,
    loaded_products: Vec<Product>,
    load_state: LoadState,
    generation: Generation,
}

impl SelectionState {
    // ==================== Getters ====================

    pub fn selected_category(&self) -> Option<&CategoryId> {
        self.selected_category.as_ref()
    }

    pub fn selected_product_ids(&self) -> &AHashSet<ProductId> {
        &self.selected_product_ids
    }

    pub fn loaded_products(&self) -> &[Product] {
        &self.loaded_products
    }

    /// Product loading status
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether a product id is present in the loaded set
    pub fn is_loaded(&self, id: ProductId) -> bool {
        self.loaded_products.iter().any(|p| p.id == id)
    }

    // ==================== Operations ====================

    /// Select a category (or none).
    ///
    /// Re-selecting the current value is a no-op.
    pub fn select_category(&mut self, category: Option<CategoryId>) -> CategoryChange {
        if category == self.selected_category {
            return CategoryChange::Unchanged;
        }

        let generation = self.generation.bump();
        self.selected_product_ids.clear();
        self.loaded_products.clear();
        self.selected_category = category.clone();

        match category {
            Some(category) => {
                self.load_state = LoadState::Loading;
                CategoryChange::Selected {
                    category,
                    generation,
                }
            }
            None => {
                self.load_state = LoadState::Idle;
                CategoryChange::Cleared
            }
        }
    }

    /// Replace the product selection with the ids present in the loaded set.
    ///
    /// Returns the number of ids dropped because they are not loaded.
    pub fn select_products(&mut self, ids: impl IntoIterator<Item = ProductId>) -> usize {
        let mut dropped = 0;
        let mut selected = AHashSet::new();

        for id in ids {
            if self.is_loaded(id) {
                selected.insert(id);
            } else {
                dropped += 1;
            }
        }

        self.selected_product_ids = selected;
        dropped
    }

    /// Apply a product fetch result.
    ///
    /// Returns false (and changes nothing) when the result belongs to a
    /// superseded selection.
    pub fn apply_products(
        &mut self,
        generation: Generation,
        category: &CategoryId,
        result: Result<Vec<Product>>,
    ) -> bool {
        if generation != self.generation || self.selected_category.as_ref() != Some(category) {
            tracing::debug!(
                "Dropping stale products for {} ({} != {})",
                category,
                generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(products) => {
                tracing::debug!("Loaded {} products for {}", products.len(), category);
                self.loaded_products = products;
                let loaded = &self.loaded_products;
                self.selected_product_ids
                    .retain(|id| loaded.iter().any(|p| &p.id == id));
                self.load_state = LoadState::Loaded;
            }
            Err(err) => self.fail_products(err),
        }
        true
    }

    /// Record a product loading failure for the selected category
    pub fn fail_products(&mut self, err: Error) {
        self.loaded_products.clear();
        self.selected_product_ids.clear();

        let Some(category) = self.selected_category.clone() else {
            self.load_state = LoadState::Idle;
            return;
        };

        tracing::warn!("Products unavailable for {}: {}", category, err);
        self.load_state = LoadState::failed(Error::ProductsUnavailable {
            category,
            source: Box::new(err),
        });
    }

    /// Fetch the selected category's products again when they are neither
    /// loaded nor in flight.
    ///
    /// Invalidates any earlier fetch for the selection.
    pub fn restart_load(&mut self) -> Option<(CategoryId, Generation)> {
        let category = self.selected_category.clone()?;
        if self.load_state.is_loaded() || self.load_state.is_loading() {
            return None;
        }

        let generation = self.generation.bump();
        self.selected_product_ids.clear();
        self.loaded_products.clear();
        self.load_state = LoadState::Loading;
        Some((category, generation))
    }

    /// Reset everything and invalidate in-flight fetches
    pub fn clear(&mut self) {
        self.generation.bump();
        self.selected_category = None;
        self.selected_product_ids.clear();
        self.loaded_products.clear();
        self.load_state = LoadState::Idle;
    }

    /// Products a report should be computed over: the explicit selection in
    /// loaded order, or every loaded product when nothing is selected.
    pub fn effective_products(&self) -> Vec<Product> {
        if self.selected_product_ids.is_empty() {
            return self.loaded_products.clone();
        }

        self.loaded_products
            .iter()
            .filter(|p| self.selected_product_ids.contains(&p.id))
            .cloned()
            .collect()
    }
}
