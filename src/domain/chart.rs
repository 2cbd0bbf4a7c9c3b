//! Chart - Chart Projector and Render Payload
//!
//! `project` turns an ordered list of priced items into the category-axis +
//! price-series structure consumed by a chart surface. `ChartOptions` is the
//! finalized payload handed to that surface.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::config::ReportConfig;
use crate::domain::product::Product;

/// Chart-ready series: axis labels and values are parallel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Product titles, in input order
    pub axis_labels: Vec<Arc<str>>,
    /// Product prices, parallel to `axis_labels`
    pub series_values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.axis_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axis_labels.is_empty()
    }

    /// Iterate over (label, value) pairs
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.axis_labels
            .iter()
            .map(|label| label.as_ref())
            .zip(self.series_values.iter().copied())
    }
}

/// Project products into a chart series, preserving order.
///
/// Empty input yields an empty series.
pub fn project(products: &[Product]) -> ChartSeries {
    let (axis_labels, series_values) = products
        .iter()
        .map(|product| (product.title.clone(), product.price))
        .unzip();

    ChartSeries {
        axis_labels,
        series_values,
    }
}

/// Render payload for the chart surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Chart type hint (e.g. "column")
    pub kind: String,
    pub title: String,
    pub y_axis_title: String,
    pub series_label: String,
    pub series: ChartSeries,
}

impl ChartOptions {
    /// Build the payload for a series using the configured labels
    pub fn new(config: &ReportConfig, series: ChartSeries) -> Self {
        Self {
            kind: config.chart_kind.clone(),
            title: config.title.clone(),
            y_axis_title: config.y_axis_title.clone(),
            series_label: config.series_label.clone(),
            series,
        }
    }
}
