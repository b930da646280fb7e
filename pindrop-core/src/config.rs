//! API configuration.
//!
//! Configuration is built once at startup and threaded explicitly into every
//! component; nothing reads the environment mid-function. Tests inject
//! fixtures (e.g. a mock server URL) without process-global mutation.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "PINDROP_API_URL";

/// Default API base URL when no override is set.
const DEFAULT_API_URL: &str = "https://api.pindrop.cloud";

/// Second-level-domain suffix appended to listed gateway sub-domains.
const DEFAULT_GATEWAY_SUFFIX: &str = ".pindrop.cloud";

/// Remote API configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Pindrop API (scheme included, no trailing slash)
    pub api_url: String,
    /// Suffix forming a full gateway host from a listed sub-domain
    pub gateway_suffix: String,
    /// Timeout in seconds for the short-lived credential check
    pub auth_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            gateway_suffix: DEFAULT_GATEWAY_SUFFIX.into(),
            auth_timeout_seconds: 3,
        }
    }
}

impl ApiConfig {
    /// Creates a config pointed at the given API base URL.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    /// Builds the config from the process environment.
    ///
    /// `PINDROP_API_URL` overrides the API base URL; everything else uses
    /// the defaults.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Joins an endpoint path onto the API base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
