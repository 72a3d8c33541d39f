//! Contract harness configuration loaded from environment variables.

use std::time::Duration;

use crate::client::DEFAULT_TIMEOUT;

pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

/// All configuration for a harness run.
///
/// Loaded from env vars after `dotenv::dotenv().ok()`; CLI flags override it.
/// All values have defaults pointing at the public pet store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Base endpoint of the service under test (`PETSTORE_BASE_URL`).
    /// default: `"https://petstore.swagger.io/v2"`
    pub base_url: String,

    /// Per-request timeout (`PETSTORE_TIMEOUT_SECS`).
    /// default: 10 seconds
    pub timeout: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or unparseable values
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup("PETSTORE_BASE_URL").unwrap_or(defaults.base_url),
            timeout: lookup("PETSTORE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}
