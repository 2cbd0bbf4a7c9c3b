//! CatalogState - Selectable Categories

use crate::domain::category::{Category, CategoryId};
use crate::error::{Error, Result};
use crate::services::Generation;
use crate::state::load_state::LoadState;

/// State for the category catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    categories: Vec<Category>,
    load_state: LoadState,
    generation: Generation,
}

impl CatalogState {
    /// All categories, in source order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Look up a category by id
    pub fn find(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Start a (re)load; returns the tag for its resolution
    pub fn begin_load(&mut self) -> Generation {
        self.load_state = LoadState::Loading;
        self.generation.bump()
    }

    /// Apply a catalog fetch result. Returns false if it was superseded.
    ///
    /// A failed fetch leaves the category list empty.
    pub fn apply(&mut self, generation: Generation, result: Result<Vec<Category>>) -> bool {
        if generation != self.generation {
            tracing::warn!("Dropping stale catalog result {}", generation);
            return false;
        }

        match result {
            Ok(categories) => {
                tracing::info!("Catalog loaded: {} categories", categories.len());
                self.categories = categories;
                self.load_state = LoadState::Loaded;
            }
            Err(err) => {
                tracing::warn!("Catalog unavailable: {}", err);
                self.categories.clear();
                self.load_state = LoadState::failed(Error::CatalogUnavailable {
                    source: Box::new(err),
                });
            }
        }
        true
    }
}
