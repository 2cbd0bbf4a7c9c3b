//! DashboardSnapshot - Immutable View Published to Observers

use std::collections::BTreeSet;

use crate::domain::category::{Category, CategoryId};
use crate::domain::product::{Product, ProductId};
use crate::domain::report::ReportResult;
use crate::error::Error;
use crate::state::load_state::LoadState;

/// Point-in-time copy of the dashboard state
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    /// Increases with every published snapshot
    pub revision: u64,
    pub categories: Vec<Category>,
    /// Catalog loading status
    pub catalog: LoadState,
    pub selected_category: Option<CategoryId>,
    pub selected_product_ids: BTreeSet<ProductId>,
    pub loaded_products: Vec<Product>,
    /// Product loading status
    pub products: LoadState,
    /// True strictly while a report is computing
    pub report_loading: bool,
    pub report_status: LoadState,
    pub report: Option<ReportResult>,
}

impl DashboardSnapshot {
    /// The selected category's catalog entry
    pub fn selected_category_entry(&self) -> Option<&Category> {
        let selected = self.selected_category.as_ref()?;
        self.categories.iter().find(|c| &c.id == selected)
    }

    /// Whether the run-report action is enabled
    pub fn can_run_report(&self) -> bool {
        self.selected_category.is_some() && !self.report_loading
    }

    /// Whether the product multi-select is enabled
    pub fn products_enabled(&self) -> bool {
        self.selected_category.is_some() && self.products.is_loaded()
    }

    pub fn is_selected(&self, id: ProductId) -> bool {
        self.selected_product_ids.contains(&id)
    }

    /// Component failures to show, catalog first
    pub fn errors(&self) -> Vec<&Error> {
        [&self.catalog, &self.products, &self.report_status]
            .into_iter()
            .filter_map(LoadState::error)
            .collect()
    }
}
