//! DashboardState - Composite State Owned by the Dashboard Task
//!
//! Combines catalog, selection and report state, applies service events and
//! hands back the asynchronous work each operation requires. Every method
//! runs to completion before the next one, so no two mutations interleave.

use std::collections::BTreeSet;

use crate::domain::category::{Category, CategoryId};
use crate::domain::product::ProductId;
use crate::error::{Error, Result};
use crate::features::report::ReportJob;
use crate::services::{Generation, ReportTicket, ServiceEvent};
use crate::state::catalog_state::CatalogState;
use crate::state::report_state::ReportState;
use crate::state::selection_state::{CategoryChange, SelectionState};
use crate::state::snapshot::DashboardSnapshot;

/// A product fetch the dashboard must issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFetch {
    pub generation: Generation,
    pub category: Category,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    catalog: CatalogState,
    selection: SelectionState,
    report: ReportState,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn report(&self) -> &ReportState {
        &self.report
    }

    /// Whether `run_report` would be accepted
    pub fn can_run_report(&self) -> bool {
        self.selection.selected_category().is_some() && !self.report.is_loading()
    }

    // ==================== Operations ====================

    /// Start a catalog (re)load
    pub fn begin_catalog_load(&mut self) -> Generation {
        self.catalog.begin_load()
    }

    /// Select a category (or none).
    ///
    /// Returns the product fetch to issue, if any. A change of category
    /// invalidates any in-flight report.
    pub fn select_category(&mut self, category: Option<CategoryId>) -> Option<ProductFetch> {
        match self.selection.select_category(category) {
            CategoryChange::Unchanged => None,
            CategoryChange::Cleared => {
                self.cancel_report();
                None
            }
            CategoryChange::Selected {
                category,
                generation,
            } => {
                self.cancel_report();
                self.product_fetch(category, generation)
            }
        }
    }

    /// Restart the product load for the selected category once the catalog
    /// is available, if its products are neither loaded nor in flight.
    ///
    /// Covers a selection made before the catalog arrived and a reload after
    /// a failed fetch.
    pub fn resume_product_load(&mut self) -> Option<ProductFetch> {
        if !self.catalog.load_state().is_loaded() {
            return None;
        }

        let (category, generation) = self.selection.restart_load()?;
        self.cancel_report();
        tracing::info!("Catalog available; reloading products for {}", category);
        self.product_fetch(category, generation)
    }

    /// Replace the product selection. Returns the number of ids dropped.
    pub fn select_products(&mut self, ids: impl IntoIterator<Item = ProductId>) -> usize {
        self.selection.select_products(ids)
    }

    /// Capture the effective product set and mark a report as loading
    pub fn run_report(&mut self) -> Result<ReportJob> {
        let Some(category) = self.selection.selected_category().cloned() else {
            return Err(Error::Invalid {
                message: "no category selected".to_string(),
            });
        };
        if self.report.is_loading() {
            return Err(Error::Invalid {
                message: "a report is already running".to_string(),
            });
        }

        let ticket = ReportTicket::new(self.selection.generation());
        self.report.begin(ticket);

        Ok(ReportJob {
            ticket,
            category,
            products: self.selection.effective_products(),
        })
    }

    /// Reset selection and report; in-flight work is invalidated
    pub fn clear(&mut self) {
        self.selection.clear();
        self.report.clear();
    }

    /// Apply an asynchronous resolution. Returns false if it was stale.
    pub fn apply(&mut self, event: ServiceEvent) -> bool {
        match event {
            ServiceEvent::CatalogLoaded { generation, result } => {
                self.catalog.apply(generation, result)
            }
            ServiceEvent::ProductsLoaded {
                generation,
                category,
                result,
            } => self.selection.apply_products(generation, &category, result),
            ServiceEvent::ReportFinished { ticket, result } => {
                if ticket.generation != self.selection.generation() {
                    tracing::debug!("Dropping report {} from {}", ticket.run_id, ticket.generation);
                    return false;
                }
                self.report.complete(ticket, result)
            }
        }
    }

    /// Build an immutable snapshot for observers
    pub fn snapshot(&self, revision: u64) -> DashboardSnapshot {
        DashboardSnapshot {
            revision,
            categories: self.catalog.categories().to_vec(),
            catalog: self.catalog.load_state().clone(),
            selected_category: self.selection.selected_category().cloned(),
            selected_product_ids: self
                .selection
                .selected_product_ids()
                .iter()
                .copied()
                .collect::<BTreeSet<_>>(),
            loaded_products: self.selection.loaded_products().to_vec(),
            products: self.selection.load_state().clone(),
            report_loading: self.report.is_loading(),
            report_status: self.report.load_state().clone(),
            report: self.report.result().cloned(),
        }
    }

    fn product_fetch(&mut self, category: CategoryId, generation: Generation) -> Option<ProductFetch> {
        match self.catalog.find(&category) {
            Some(found) => Some(ProductFetch {
                generation,
                category: found.clone(),
            }),
            None => {
                self.selection.fail_products(Error::UnknownCategory { category });
                None
            }
        }
    }

    fn cancel_report(&mut self) {
        if self.report.cancel() {
            tracing::info!("Selection changed; in-flight report cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;
    use crate::features::report::compute;

    fn catalog() -> Vec<Category> {
        vec![
            Category::new("electronics", "Electronics", "memory://electronics"),
            Category::new("books", "Books", "memory://books"),
        ]
    }

    fn electronics() -> Vec<Product> {
        vec![
            Product::new(1, "Phone", 500.0),
            Product::new(2, "Laptop", 1200.0),
        ]
    }

    fn ready() -> DashboardState {
        let mut state = DashboardState::new();
        let generation = state.begin_catalog_load();
        assert!(state.apply(ServiceEvent::CatalogLoaded {
            generation,
            result: Ok(catalog()),
        }));
        state
    }

    fn with_electronics() -> DashboardState {
        let mut state = ready();
        let fetch = state
            .select_category(Some("electronics".into()))
            .expect("product fetch");
        assert_eq!(fetch.category.source_locator.as_ref(), "memory://electronics");
        assert!(state.apply(ServiceEvent::ProductsLoaded {
            generation: fetch.generation,
            category: fetch.category.id,
            result: Ok(electronics()),
        }));
        state
    }

    fn finish(state: &mut DashboardState, job: ReportJob) -> bool {
        let ticket = job.ticket;
        state.apply(ServiceEvent::ReportFinished {
            ticket,
            result: compute(job),
        })
    }

    #[test]
    fn report_over_all_products_when_nothing_selected() {
        let mut state = with_electronics();

        let job = state.run_report().expect("report job");
        assert!(state.report().is_loading());
        assert!(finish(&mut state, job));

        let report = state.report().result().expect("report");
        assert_eq!(report.source_products, electronics());
        let labels: Vec<_> = report.chart.axis_labels.iter().map(|l| l.as_ref()).collect();
        assert_eq!(labels, vec!["Phone", "Laptop"]);
        assert_eq!(report.chart.series_values, vec![500.0, 1200.0]);
        assert!(!state.report().is_loading());
    }

    #[test]
    fn report_over_explicit_selection() {
        let mut state = with_electronics();
        state.select_products([ProductId(2)]);

        let job = state.run_report().expect("report job");
        finish(&mut state, job);

        let report = state.report().result().expect("report");
        assert_eq!(report.source_products, vec![Product::new(2, "Laptop", 1200.0)]);
    }

    #[test]
    fn report_inputs_are_captured_at_invocation() {
        let mut state = with_electronics();
        state.select_products([ProductId(1)]);
        let job = state.run_report().expect("report job");

        state.select_products([ProductId(2)]);
        finish(&mut state, job);

        let report = state.report().result().expect("report");
        assert_eq!(report.source_products, vec![Product::new(1, "Phone", 500.0)]);
    }

    #[test]
    fn run_report_requires_category_and_idle_pipeline() {
        let mut state = ready();
        assert!(!state.can_run_report());
        assert!(state.run_report().is_err());

        let mut state = with_electronics();
        assert!(state.can_run_report());
        let _job = state.run_report().expect("report job");
        assert!(!state.can_run_report());
        assert!(state.run_report().is_err());
    }

    #[test]
    fn clear_while_loading_discards_report() {
        let mut state = with_electronics();
        let job = state.run_report().expect("report job");

        state.clear();

        assert!(!finish(&mut state, job));
        assert!(!state.report().is_loading());
        assert!(state.report().result().is_none());
        assert!(state.selection().selected_category().is_none());
        assert!(state.selection().loaded_products().is_empty());
    }

    #[test]
    fn category_change_while_loading_invalidates_report() {
        let mut state = with_electronics();
        let job = state.run_report().expect("report job");

        let fetch = state.select_category(Some("books".into()));

        assert!(fetch.is_some());
        assert!(!state.report().is_loading());
        assert!(!finish(&mut state, job));
        assert!(state.report().result().is_none());
    }

    #[test]
    fn category_change_keeps_published_report() {
        let mut state = with_electronics();
        let job = state.run_report().expect("report job");
        finish(&mut state, job);

        state.select_category(Some("books".into()));

        assert!(state.report().result().is_some());
    }

    #[test]
    fn unknown_category_surfaces_products_unavailable() {
        let mut state = ready();

        let fetch = state.select_category(Some("garden".into()));

        assert!(fetch.is_none());
        assert_eq!(
            state.selection().selected_category().map(|c| c.as_str()),
            Some("garden")
        );
        assert!(matches!(
            state.selection().load_state().error(),
            Some(Error::ProductsUnavailable { .. })
        ));
    }

    #[test]
    fn selection_before_catalog_is_fetched_once_catalog_loads() {
        let mut state = DashboardState::new();
        let catalog_generation = state.begin_catalog_load();

        assert!(state.select_category(Some("electronics".into())).is_none());
        assert!(state.selection().load_state().is_error());
        assert!(state.resume_product_load().is_none());

        assert!(state.apply(ServiceEvent::CatalogLoaded {
            generation: catalog_generation,
            result: Ok(catalog()),
        }));
        let fetch = state.resume_product_load().expect("product fetch");
        assert_eq!(fetch.category.id.as_str(), "electronics");
        assert!(state.selection().load_state().is_loading());
        assert!(state.resume_product_load().is_none());

        assert!(state.apply(ServiceEvent::ProductsLoaded {
            generation: fetch.generation,
            category: fetch.category.id,
            result: Ok(electronics()),
        }));
        assert_eq!(state.selection().loaded_products(), electronics().as_slice());
        assert!(state.resume_product_load().is_none());
    }

    #[test]
    fn resumed_load_supersedes_earlier_fetch() {
        let mut state = ready();
        let first = state
            .select_category(Some("books".into()))
            .expect("product fetch");
        state.apply(ServiceEvent::ProductsLoaded {
            generation: first.generation,
            category: first.category.id.clone(),
            result: Err(Error::Invalid {
                message: "502".into(),
            }),
        });

        let generation = state.begin_catalog_load();
        state.apply(ServiceEvent::CatalogLoaded {
            generation,
            result: Ok(catalog()),
        });
        let second = state.resume_product_load().expect("product fetch");

        assert!(second.generation > first.generation);
        assert!(!state.apply(ServiceEvent::ProductsLoaded {
            generation: first.generation,
            category: first.category.id,
            result: Ok(electronics()),
        }));
        assert!(state.selection().loaded_products().is_empty());
    }

    #[test]
    fn reselecting_category_issues_no_fetch() {
        let mut state = with_electronics();
        assert!(state.select_category(Some("electronics".into())).is_none());
        assert_eq!(state.selection().loaded_products().len(), 2);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut state = with_electronics();
        state.select_products([ProductId(2), ProductId(1), ProductId(9)]);

        let snapshot = state.snapshot(7);

        assert_eq!(snapshot.revision, 7);
        assert_eq!(snapshot.categories.len(), 2);
        assert_eq!(
            snapshot.selected_product_ids.iter().map(|id| id.0).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(snapshot.products.is_loaded());
        assert!(snapshot.can_run_report());
    }
}
