//! Domain - Pure Data Structures
//!
//! These types carry no runtime or channel dependencies and represent the
//! reporting domain: catalog entries, products, chart data and reports.

pub mod category;
pub mod chart;
pub mod config;
pub mod product;
pub mod report;
