//! State - Dashboard State Modules
//!
//! Each module owns one piece of state; `DashboardState` composes them and
//! `DashboardSnapshot` is the immutable copy handed to observers.

pub mod catalog_state;
pub mod dashboard_state;
pub mod load_state;
pub mod report_state;
pub mod selection_state;
pub mod snapshot;
