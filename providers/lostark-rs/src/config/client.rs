//! HTTP Client Configuration
//!
//! Settings for the Lost Ark REST client and its rate-limit gate.

use crate::error::LostArkError;
use crate::ratelimit::DEFAULT_RESET_GRACE;
use std::time::Duration;

/// Default Lost Ark developer API endpoint
pub const DEFAULT_BASE_URL: &str = "https://developer-lostark.game.onstove.com";

/// Lost Ark client configuration
///
/// ## Environment Variables
///
/// - `LOSTARK_BASE_URL`: API base URL (default: https://developer-lostark.game.onstove.com)
/// - `LOSTARK_TIMEOUT_SECS`: Per-request timeout in seconds (default: 10)
/// - `LOSTARK_RESET_GRACE_MS`: Delay past the reported window reset before
///   queued requests are released (default: 1000)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL without trailing slash
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Compensates for skew between `X-RateLimit-Reset` and the actual reset
    pub reset_grace: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: format!("lostark-provider/{}", env!("CARGO_PKG_VERSION")),
            reset_grace: DEFAULT_RESET_GRACE,
        }
    }
}

impl ClientConfig {
    /// Load client configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `LostArkError::Config` if a variable is set to an invalid value
    pub fn from_env() -> Result<Self, LostArkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LostArkError> {
        let mut config = Self::default();

        if let Some(base_url) = lookup("LOSTARK_BASE_URL") {
            let base_url = base_url.trim().trim_end_matches('/');
            reqwest::Url::parse(base_url).map_err(|e| {
                LostArkError::Config(format!("LOSTARK_BASE_URL is not a valid URL: {}", e))
            })?;
            config.base_url = base_url.to_string();
        }

        if let Some(secs) = lookup("LOSTARK_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                LostArkError::Config(format!("LOSTARK_TIMEOUT_SECS must be an integer, got {:?}", secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(millis) = lookup("LOSTARK_RESET_GRACE_MS") {
            let millis: u64 = millis.trim().parse().map_err(|_| {
                LostArkError::Config(format!(
                    "LOSTARK_RESET_GRACE_MS must be an integer, got {:?}",
                    millis
                ))
            })?;
            config.reset_grace = Duration::from_millis(millis);
        }

        Ok(config)
    }

    /// Overrides the base URL (useful for tests against a local server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
