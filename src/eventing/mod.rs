//! Eventing - Messages from the presentation layer to the dashboard task.

pub mod command;
