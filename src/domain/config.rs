//! Config - Application Configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    DEFAULT_CATEGORIES_URL, DEFAULT_CHART_KIND, DEFAULT_CHART_TITLE, DEFAULT_LOG_FILE_PREFIX,
    DEFAULT_LOG_LEVEL, DEFAULT_REPORT_LATENCY_MS, DEFAULT_SERIES_LABEL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_Y_AXIS_TITLE,
};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Remote data source
    pub source: SourceConfig,
    /// Report pipeline and chart labels
    pub report: ReportConfig,
    /// Logging
    pub log: LogConfig,
}

/// Category/product source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Endpoint returning the category catalog
    pub categories_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Use the built-in fixture catalog instead of the network
    pub offline: bool,
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            categories_url: DEFAULT_CATEGORIES_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            offline: false,
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Simulated computation latency in milliseconds
    pub latency_ms: u64,
    pub chart_kind: String,
    pub title: String,
    pub y_axis_title: String,
    pub series_label: String,
}

impl ReportConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_REPORT_LATENCY_MS,
            chart_kind: DEFAULT_CHART_KIND.to_string(),
            title: DEFAULT_CHART_TITLE.to_string(),
            y_axis_title: DEFAULT_Y_AXIS_TITLE.to_string(),
            series_label: DEFAULT_SERIES_LABEL.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by RUST_LOG
    pub level: String,
    /// File name prefix for the rolling log file
    pub file_prefix: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file_prefix: DEFAULT_LOG_FILE_PREFIX.to_string(),
        }
    }
}
