//! LoadState - Per-Component Status Flag

use std::sync::Arc;

use crate::error::Error;

/// Loading status of one component, as shown to the presentation layer
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Not loading
    #[default]
    Idle,
    /// Currently loading
    Loading,
    /// Successfully loaded
    Loaded,
    /// Failed to load
    Error(Arc<Error>),
}

impl LoadState {
    /// Check if currently loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if loaded successfully
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    /// Check if there was an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Get the error if any
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    pub(crate) fn failed(err: Error) -> Self {
        Self::Error(Arc::new(err))
    }
}
