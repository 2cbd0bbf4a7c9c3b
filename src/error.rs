//! Error types for the price dashboard
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! The three component failures (catalog, products, report) are recovered by
//! the dashboard and surfaced through `LoadState::Error`, never propagated
//! past it.

use snafu::Snafu;

use crate::domain::category::CategoryId;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config file, terminal)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Transport-level HTTP failure
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// Non-success HTTP status
    #[snafu(display("HTTP {status} from {url}"))]
    HttpStatus { url: String, status: u16 },

    /// Channel send error
    #[snafu(display("Channel send error: {message}"))]
    ChannelSend { message: String },

    /// The dashboard task has stopped
    #[snafu(display("Dashboard closed"))]
    ChannelClosed,

    /// Category id not present in the loaded catalog
    #[snafu(display("Unknown category: {category}"))]
    UnknownCategory { category: CategoryId },

    /// Category catalog fetch failed
    #[snafu(display("Catalog unavailable: {source}"))]
    CatalogUnavailable { source: Box<Error> },

    /// Product fetch failed for the currently selected category
    #[snafu(display("Products unavailable for {category}: {source}"))]
    ProductsUnavailable {
        category: CategoryId,
        source: Box<Error>,
    },

    /// Report computation step failed
    #[snafu(display("Report failed: {message}"))]
    ReportFailed { message: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
