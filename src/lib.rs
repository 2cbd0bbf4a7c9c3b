//! Price Dashboard Library
//!
//! Filter/selection state machine and report pipeline for a category/product
//! price dashboard: pick a category, optionally narrow to some of its
//! products, run a report and chart price by product.

pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

pub use error::{Error, Result};
pub use features::dashboard::{Dashboard, DashboardHandle};
