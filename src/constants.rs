//! Dashboard Constants
//!
//! Centralized defaults shared by configuration, services and views.

/// Default category catalog endpoint
pub const DEFAULT_CATEGORIES_URL: &str = "https://dummyjson.com/products/categories";

/// HTTP request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Simulated report computation latency
pub const DEFAULT_REPORT_LATENCY_MS: u64 = 3000;

/// Chart labels
pub const DEFAULT_CHART_KIND: &str = "column";
pub const DEFAULT_CHART_TITLE: &str = "Products in selected Category";
pub const DEFAULT_Y_AXIS_TITLE: &str = "Price ($)";
pub const DEFAULT_SERIES_LABEL: &str = "Price";

/// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE_PREFIX: &str = "price-dashboard.log";

/// Application directory naming
pub const APP_QUALIFIER: &str = "io";
pub const APP_ORGANIZATION: &str = "price-dashboard";
pub const APP_NAME: &str = "price-dashboard";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Width of the longest bar in the terminal chart, in cells
pub const CHART_BAR_WIDTH: usize = 40;
