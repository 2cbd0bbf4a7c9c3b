//! DashboardCommand - User Intents
//!
//! Everything the controls can ask of the dashboard. Commands are applied
//! one at a time, in the order they were sent.

use crate::domain::category::CategoryId;
use crate::domain::product::ProductId;

/// Commands for presentation -> dashboard communication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardCommand {
    /// Category dropdown changed; `None` is the "none selected" option
    SelectCategory(Option<CategoryId>),

    /// Product multi-select changed
    SelectProducts(Vec<ProductId>),

    /// "Run report" pressed
    RunReport,

    /// "Clear" pressed
    Clear,

    /// Re-fetch the category catalog
    ReloadCatalog,

    /// Stop the dashboard task
    Shutdown,
}

impl DashboardCommand {
    /// Short name for logging
    pub fn label(&self) -> &'static str {
        match self {
            DashboardCommand::SelectCategory(_) => "select-category",
            DashboardCommand::SelectProducts(_) => "select-products",
            DashboardCommand::RunReport => "run-report",
            DashboardCommand::Clear => "clear",
            DashboardCommand::ReloadCatalog => "reload-catalog",
            DashboardCommand::Shutdown => "shutdown",
        }
    }
}
