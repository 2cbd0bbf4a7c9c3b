//! Chart Panel
//!
//! Draws a `ChartOptions` payload as a horizontal bar chart. The core never
//! inspects this output.

use std::fmt::Write;

use crate::constants::CHART_BAR_WIDTH;
use crate::domain::chart::ChartOptions;
use crate::domain::config::ReportConfig;
use crate::state::snapshot::DashboardSnapshot;
use crate::utils::format::{bar, format_price, format_time, truncate};

const LABEL_WIDTH: usize = 24;

/// Placeholder shown before the first report
pub const EMPTY_CHART_HINT: &str = "Select filters and run report to display the chart.";

/// Render a chart payload
pub fn render_chart(options: &ChartOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", options.title, options.kind);
    let _ = writeln!(out, "  {} / {}", options.series_label, options.y_axis_title);

    if options.series.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let max = options
        .series
        .series_values
        .iter()
        .copied()
        .fold(0.0_f64, f64::max);

    for (label, value) in options.series.points() {
        let _ = writeln!(
            out,
            "  {:<width$} {:>10} {}",
            truncate(label, LABEL_WIDTH),
            format_price(value),
            bar(value, max, CHART_BAR_WIDTH),
            width = LABEL_WIDTH
        );
    }
    out
}

/// Render the chart area for a snapshot
pub fn render_report(snapshot: &DashboardSnapshot, config: &ReportConfig) -> String {
    if snapshot.report_loading {
        return "Running report...\n".to_string();
    }

    match &snapshot.report {
        Some(report) => {
            let options = ChartOptions::new(config, report.chart.clone());
            let mut out = render_chart(&options);
            let _ = writeln!(
                out,
                "  {} products from {} at {}",
                report.source_products.len(),
                report.source_category,
                format_time(&report.generated_at)
            );
            out
        }
        None => format!("{EMPTY_CHART_HINT}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::project;
    use crate::domain::product::Product;

    #[test]
    fn chart_lists_points_in_order() {
        let series = project(&[
            Product::new(1, "Phone", 500.0),
            Product::new(2, "Laptop", 1200.0),
        ]);
        let options = ChartOptions::new(&ReportConfig::default(), series);

        let out = render_chart(&options);

        let phone = out.find("Phone").expect("phone row");
        let laptop = out.find("Laptop").expect("laptop row");
        assert!(phone < laptop);
        assert!(out.starts_with("Products in selected Category [column]"));
        assert!(out.contains("1200.00"));
    }

    #[test]
    fn empty_series_renders_empty_chart() {
        let options = ChartOptions::new(&ReportConfig::default(), project(&[]));
        let out = render_chart(&options);
        assert!(out.contains("(no data)"));
    }

    #[test]
    fn report_area_states() {
        let config = ReportConfig::default();
        let mut snapshot = DashboardSnapshot::default();
        assert!(render_report(&snapshot, &config).contains(EMPTY_CHART_HINT));

        snapshot.report_loading = true;
        assert_eq!(render_report(&snapshot, &config), "Running report...\n");
    }
}
