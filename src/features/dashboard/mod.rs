//! Dashboard feature: the single state owner and its handle.

mod controller;

pub use controller::*;
