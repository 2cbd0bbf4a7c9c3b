//! Report - Result of One Report Run

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::domain::category::CategoryId;
use crate::domain::chart::ChartSeries;
use crate::domain::product::Product;

/// A published report. Superseded, never merged, by the next run or a clear.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportResult {
    /// Identifier of the run that produced this result
    pub run_id: Uuid,
    /// Category selected when the run was triggered
    pub source_category: CategoryId,
    /// Products the report was computed over, in loaded order
    pub source_products: Vec<Product>,
    /// Derived chart data
    pub chart: ChartSeries,
    /// Completion time
    pub generated_at: DateTime<Local>,
}
