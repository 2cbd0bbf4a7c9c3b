//! View Components
//!
//! Terminal rendering of dashboard snapshots.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌───────────────────────────────┐
//! │ Filters                        │
//! │   Category / Products / Report │
//! │   ! errors                     │
//! ├───────────────────────────────┤
//! │ Chart                          │
//! │   label   price  ██████        │
//! └───────────────────────────────┘
//! ```

mod chart_panel;
mod filters_panel;
mod prompt;

pub use chart_panel::*;
pub use filters_panel::*;
pub use prompt::*;

use crate::domain::config::ReportConfig;
use crate::state::snapshot::DashboardSnapshot;

/// Render the whole dashboard screen
pub fn render_dashboard(snapshot: &DashboardSnapshot, config: &ReportConfig) -> String {
    let mut out = render_filters(snapshot);
    out.push('\n');
    out.push_str(&render_report(snapshot, config));
    out
}
