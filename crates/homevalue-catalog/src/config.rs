//! Catalog configuration.

use std::time::Duration;

/// Simulated latencies of the mock catalog API.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Delay before `list` returns (default: 500 ms).
    pub list_delay: Duration,
    /// Delay before `get` returns (default: 600 ms).
    pub get_delay: Duration,
    /// Delay before `request_quote` returns (default: 800 ms).
    pub quote_delay: Duration,
}

impl CatalogConfig {
    /// No artificial latency.
    pub fn immediate() -> Self {
        Self {
            list_delay: Duration::ZERO,
            get_delay: Duration::ZERO,
            quote_delay: Duration::ZERO,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            list_delay: Duration::from_millis(500),
            get_delay: Duration::from_millis(600),
            quote_delay: Duration::from_millis(800),
        }
    }
}
