//! Application Configuration
//!
//! Built once at startup from the environment and injected into use cases.
//! Nothing here is re-read after construction.

use chrono::Duration;

/// Account application configuration
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Identity token time-to-live
    pub token_ttl: Duration,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            token_ttl: Duration::hours(24),
        }
    }
}
