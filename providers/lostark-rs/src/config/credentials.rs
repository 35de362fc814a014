//! API Credential Management
//!
//! Secure handling of the Lost Ark API token loaded from environment variables.
//! The token is never logged at INFO/WARN levels and is masked when displayed.

use crate::error::LostArkError;
use std::fmt;

/// Environment variable holding the Lost Ark developer portal JWT
pub const TOKEN_ENV: &str = "LOSTARK_API_TOKEN";

/// Secure string wrapper that masks sensitive data in logs
///
/// Debug output shows only `SecretString(***)` and Display shows the
/// truncated form `first4...last4`.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: String) -> Self {
        SecretString(value)
    }

    /// Returns a reference to the inner string
    ///
    /// **Security Warning**: Only use this when building the Authorization header.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Returns a masked version of the secret for safe logging
    ///
    /// Format: `first4...last4` (e.g., "eyJ0...Xk9A")
    pub fn masked(&self) -> String {
        let s = &self.0;
        if s.len() <= 8 || !s.is_ascii() {
            return "***".to_string();
        }
        format!("{}...{}", &s[..4], &s[s.len() - 4..])
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretString(***)")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        SecretString::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        SecretString::new(s.to_string())
    }
}

/// Lost Ark API credentials
#[derive(Clone, Debug)]
pub struct Credentials {
    /// Bearer token issued by the Lost Ark developer portal
    pub api_token: SecretString,
}

impl Credentials {
    /// Wraps an already known token, trimming surrounding whitespace
    pub fn new(api_token: impl Into<String>) -> Result<Self, LostArkError> {
        let api_token = api_token.into().trim().to_string();
        if api_token.is_empty() {
            return Err(LostArkError::Config(
                "API token is empty after trimming whitespace".to_string(),
            ));
        }

        Ok(Self {
            api_token: SecretString::new(api_token),
        })
    }

    /// Loads credentials from the `LOSTARK_API_TOKEN` environment variable
    pub fn from_env() -> Result<Self, LostArkError> {
        let api_token = std::env::var(TOKEN_ENV).map_err(|_| {
            LostArkError::Config(format!(
                "{} not set. Issue a token at https://developer-lostark.game.onstove.com",
                TOKEN_ENV
            ))
        })?;

        Self::new(api_token).map_err(|_| {
            LostArkError::Config(format!("{} is empty after trimming whitespace", TOKEN_ENV))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_masked() {
        let secret = SecretString::from("eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9");
        assert_eq!(format!("{:?}", secret), "SecretString(***)");
        assert_eq!(secret.to_string(), "eyJ0...NiJ9");
        assert_eq!(SecretString::from("short").to_string(), "***");
    }

    #[test]
    fn test_credentials_trim_and_reject_empty() {
        let credentials = Credentials::new("  token-value-123 \n").unwrap();
        assert_eq!(credentials.api_token.expose_secret(), "token-value-123");

        let err = Credentials::new("   ").unwrap_err();
        assert_eq!(err.error_type(), "config_error");
    }
}
