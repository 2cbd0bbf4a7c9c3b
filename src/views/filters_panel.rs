//! Filters Panel
//!
//! Text rendering of the category dropdown, the product multi-select, the
//! run-report button state and any component errors.

use std::fmt::Write;

use crate::state::snapshot::DashboardSnapshot;
use crate::utils::format::{format_price, truncate};

const TITLE_WIDTH: usize = 32;

/// Render the category dropdown options, marking the selected one
pub fn render_categories(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();

    if snapshot.catalog.is_loading() {
        out.push_str("  (loading categories...)\n");
        return out;
    }
    if snapshot.categories.is_empty() {
        out.push_str("  (no categories)\n");
        return out;
    }

    let marker = |selected: bool| if selected { '*' } else { ' ' };
    let _ = writeln!(
        out,
        " {} {:<24} Select Category",
        marker(snapshot.selected_category.is_none()),
        "none"
    );
    for category in &snapshot.categories {
        let selected = snapshot.selected_category.as_ref() == Some(&category.id);
        let _ = writeln!(
            out,
            " {} {:<24} {}",
            marker(selected),
            category.id,
            category.display_name
        );
    }
    out
}

/// Render the product checkbox list
pub fn render_products(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();

    if snapshot.selected_category.is_none() {
        out.push_str("  (select a category first)\n");
        return out;
    }
    if snapshot.products.is_loading() {
        out.push_str("  (loading products...)\n");
        return out;
    }
    if snapshot.loaded_products.is_empty() {
        out.push_str("  (no products)\n");
        return out;
    }

    for product in &snapshot.loaded_products {
        let check = if snapshot.is_selected(product.id) { "[x]" } else { "[ ]" };
        let _ = writeln!(
            out,
            "  {} {:>5}  {:<width$} {:>10}",
            check,
            product.id,
            truncate(&product.title, TITLE_WIDTH),
            format_price(product.price),
            width = TITLE_WIDTH
        );
    }
    out
}

/// Render the one-screen filter summary
pub fn render_filters(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::from("Filters\n");

    let category = match snapshot.selected_category_entry() {
        Some(entry) => format!("{} ({})", entry.display_name, entry.id),
        None => match &snapshot.selected_category {
            Some(id) => id.to_string(),
            None => "Select Category".to_string(),
        },
    };
    let _ = writeln!(out, "  Category: {category}");

    let products = if !snapshot.products_enabled() {
        "-".to_string()
    } else if snapshot.selected_product_ids.is_empty() {
        format!("all {} products", snapshot.loaded_products.len())
    } else {
        snapshot
            .loaded_products
            .iter()
            .filter(|p| snapshot.is_selected(p.id))
            .map(|p| p.title.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = writeln!(out, "  Products: {products}");

    let report = if snapshot.report_loading {
        "running..."
    } else if snapshot.can_run_report() {
        "ready (run)"
    } else {
        "disabled"
    };
    let _ = writeln!(out, "  Report:   {report}");

    for err in snapshot.errors() {
        let _ = writeln!(out, "  ! {err}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::product::{Product, ProductId};
    use crate::state::load_state::LoadState;

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            categories: vec![
                Category::new("electronics", "Electronics", "memory://electronics"),
                Category::new("books", "Books", "memory://books"),
            ],
            catalog: LoadState::Loaded,
            selected_category: Some("electronics".into()),
            loaded_products: vec![
                Product::new(1, "Phone", 500.0),
                Product::new(2, "Laptop", 1200.0),
            ],
            products: LoadState::Loaded,
            ..Default::default()
        }
    }

    #[test]
    fn categories_mark_selection() {
        let out = render_categories(&snapshot());
        assert!(out.contains("* electronics"));
        assert!(out.contains("  books"));
    }

    #[test]
    fn products_show_checkboxes() {
        let mut snapshot = snapshot();
        snapshot.selected_product_ids.insert(ProductId(2));

        let out = render_products(&snapshot);

        assert!(out.contains("[ ]     1  Phone"));
        assert!(out.contains("[x]     2  Laptop"));
        assert!(out.contains("1200.00"));
    }

    #[test]
    fn products_disabled_without_category() {
        let out = render_products(&DashboardSnapshot::default());
        assert!(out.contains("select a category first"));
    }

    #[test]
    fn filters_summarize_selection() {
        let mut snapshot = snapshot();
        let out = render_filters(&snapshot);
        assert!(out.contains("Category: Electronics (electronics)"));
        assert!(out.contains("all 2 products"));
        assert!(out.contains("ready (run)"));

        snapshot.selected_product_ids.insert(ProductId(2));
        snapshot.report_loading = true;
        let out = render_filters(&snapshot);
        assert!(out.contains("Products: Laptop"));
        assert!(out.contains("running..."));
    }

    #[test]
    fn filters_list_errors() {
        let snapshot = DashboardSnapshot {
            catalog: LoadState::failed(crate::error::Error::CatalogUnavailable {
                source: Box::new(crate::error::Error::Invalid {
                    message: "timeout".into(),
                }),
            }),
            ..Default::default()
        };

        let out = render_filters(&snapshot);

        assert!(out.contains("! Catalog unavailable: Invalid: timeout"));
        assert!(out.contains("Report:   disabled"));
    }
}
