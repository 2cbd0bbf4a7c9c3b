//! Features - Vertical Feature Slices
//!
//! `dashboard` owns the state and drives the services; `report` holds the
//! report computation it triggers.

pub mod dashboard;
pub mod report;
