//! Service Events
//!
//! Resolutions of asynchronous operations, delivered back to the dashboard
//! task. Every event carries the generation it was started under so that
//! results from a superseded selection can be dropped on arrival.

use uuid::Uuid;

use crate::domain::category::{Category, CategoryId};
use crate::domain::product::Product;
use crate::domain::report::ReportResult;
use crate::error::Result;

/// Monotonically increasing request generation
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Generation(u64);

impl Generation {
    /// Advance to the next generation
    pub fn bump(&mut self) -> Generation {
        self.0 += 1;
        *self
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tag identifying one report run
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReportTicket {
    /// Selection generation at invocation time
    pub generation: Generation,
    pub run_id: Uuid,
}

impl ReportTicket {
    pub fn new(generation: Generation) -> Self {
        Self {
            generation,
            run_id: Uuid::new_v4(),
        }
    }
}

/// Events emitted by the service layer
#[derive(Debug)]
pub enum ServiceEvent {
    /// Category catalog fetch resolved
    CatalogLoaded {
        generation: Generation,
        result: Result<Vec<Category>>,
    },

    /// Product fetch for a category resolved
    ProductsLoaded {
        generation: Generation,
        category: CategoryId,
        result: Result<Vec<Product>>,
    },

    /// Report computation finished
    ReportFinished {
        ticket: ReportTicket,
        result: Result<ReportResult>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_bump_is_monotonic() {
        let mut generation = Generation::default();
        let first = generation.bump();
        let second = generation.bump();
        assert!(second > first);
        assert_eq!(generation, second);
        assert_eq!(second.value(), 2);
    }

    #[test]
    fn tickets_for_same_generation_are_distinct_runs() {
        let generation = Generation::default();
        let a = ReportTicket::new(generation);
        let b = ReportTicket::new(generation);
        assert_ne!(a, b);
    }
}
