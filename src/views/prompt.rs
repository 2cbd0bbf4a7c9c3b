//! Prompt - Terminal Input and Change Notices
//!
//! Parses typed lines into dashboard commands, and turns snapshot
//! transitions into the text printed back to the user.

use crate::domain::category::CategoryId;
use crate::domain::config::ReportConfig;
use crate::domain::product::ProductId;
use crate::eventing::command::DashboardCommand;
use crate::state::snapshot::DashboardSnapshot;
use crate::views::{render_categories, render_dashboard, render_products, render_report};

pub const HELP: &str = "\
Commands:
  categories        list categories
  select <id>       select a category
  none              clear the category selection
  products          list products of the selected category
  pick <id>...      select products (no ids = all)
  run               run the report
  show              show filters and chart
  clear             reset filters and chart
  reload            reload the category catalog
  help              this text
  quit              exit
";

/// Screens that only read the latest snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Categories,
    Products,
    Dashboard,
}

/// What a typed line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Command(DashboardCommand),
    Show(Screen),
    Help,
    Quit,
    Nothing,
}

/// Parse one input line
pub fn parse_line(line: &str) -> Result<PromptAction, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(PromptAction::Nothing);
    };

    let action = match verb {
        "categories" | "cats" => PromptAction::Show(Screen::Categories),
        "products" | "prods" => PromptAction::Show(Screen::Products),
        "show" => PromptAction::Show(Screen::Dashboard),
        "select" => {
            let Some(id) = words.next() else {
                return Err("usage: select <category id>".to_string());
            };
            PromptAction::Command(DashboardCommand::SelectCategory(Some(CategoryId::from(id))))
        }
        "none" => PromptAction::Command(DashboardCommand::SelectCategory(None)),
        "pick" => {
            let ids = words
                .map(|word| {
                    word.parse::<u64>()
                        .map(ProductId)
                        .map_err(|_| format!("not a product id: {word}"))
                })
                .collect::<Result<Vec<_>, _>>()?;
            PromptAction::Command(DashboardCommand::SelectProducts(ids))
        }
        "run" => PromptAction::Command(DashboardCommand::RunReport),
        "clear" => PromptAction::Command(DashboardCommand::Clear),
        "reload" => PromptAction::Command(DashboardCommand::ReloadCatalog),
        "help" | "?" => PromptAction::Help,
        "quit" | "exit" | "q" => PromptAction::Quit,
        other => return Err(format!("unknown command: {other} (try `help`)")),
    };
    Ok(action)
}

/// Render a read-only screen
pub fn render_screen(screen: Screen, snapshot: &DashboardSnapshot, config: &ReportConfig) -> String {
    match screen {
        Screen::Categories => render_categories(snapshot),
        Screen::Products => render_products(snapshot),
        Screen::Dashboard => render_dashboard(snapshot, config),
    }
}

/// Text to print when `next` differs notably from `prev`
pub fn describe_transition(
    prev: &DashboardSnapshot,
    next: &DashboardSnapshot,
    config: &ReportConfig,
) -> Option<String> {
    let mut notes = Vec::new();

    if next.catalog.is_loaded() && !prev.catalog.is_loaded() {
        notes.push(format!(
            "{} categories available (type `categories`)\n",
            next.categories.len()
        ));
    }
    if next.catalog.is_error() && !prev.catalog.is_error() {
        notes.push("Catalog unavailable (type `reload` to retry)\n".to_string());
    }

    if next.products.is_loaded() && prev.products.is_loading() {
        notes.push(render_products(next));
    }
    if !prev.products.is_error() {
        if let Some(err) = next.products.error() {
            notes.push(format!("! {err}\n"));
        }
    }

    if prev.report_loading && !next.report_loading {
        match next.report_status.error() {
            Some(err) => notes.push(format!("! {err}\n")),
            None if next.report.is_some() => notes.push(render_report(next, config)),
            None => notes.push("Report cancelled\n".to_string()),
        }
    }

    if notes.is_empty() {
        None
    } else {
        Some(notes.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::load_state::LoadState;

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_line("select laptops"),
            Ok(PromptAction::Command(DashboardCommand::SelectCategory(Some(
                "laptops".into()
            ))))
        );
        assert_eq!(
            parse_line("  pick 2 7 "),
            Ok(PromptAction::Command(DashboardCommand::SelectProducts(vec![
                ProductId(2),
                ProductId(7)
            ])))
        );
        assert_eq!(
            parse_line("none"),
            Ok(PromptAction::Command(DashboardCommand::SelectCategory(None)))
        );
        assert_eq!(parse_line(""), Ok(PromptAction::Nothing));
        assert_eq!(parse_line("q"), Ok(PromptAction::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_line("select").is_err());
        assert!(parse_line("pick 1 x").is_err());
        assert!(parse_line("frobnicate").is_err());
    }

    #[test]
    fn notices_catalog_and_report_transitions() {
        let config = ReportConfig::default();
        let prev = DashboardSnapshot {
            catalog: LoadState::Loading,
            ..Default::default()
        };
        let next = DashboardSnapshot {
            catalog: LoadState::Loaded,
            ..Default::default()
        };
        let note = describe_transition(&prev, &next, &config).expect("note");
        assert!(note.contains("0 categories available"));

        let prev = DashboardSnapshot {
            report_loading: true,
            ..next.clone()
        };
        let note = describe_transition(&prev, &next, &config).expect("note");
        assert!(note.contains("Report cancelled"));

        assert!(describe_transition(&next, &next, &config).is_none());
    }
}
