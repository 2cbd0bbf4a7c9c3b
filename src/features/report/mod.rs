//! Report feature: effective-set capture, cancellable computation task.

mod pipeline;

pub use pipeline::*;
