//! Client settings
//!
//! Settings are supplied explicitly by the embedding application; nothing is
//! read from ambient environment state. The application resolves its own
//! origin and host and passes them in, `api_url` defaults to the hosted
//! backend endpoint.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::PasskeyError;

/// Hosted backend endpoint used when no `api_url` override is given
pub const DEFAULT_API_URL: &str = "https://api.passbridge.dev";

/// Immutable per-client configuration, set once at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Backend base URL
    pub api_url: String,
    /// Public API key identifying the embedding application to the backend
    pub api_key: String,
    /// Origin attached to both calls of every ceremony (e.g. <https://app.example.com>)
    pub origin: String,
    /// Relying party id, usually the application's host name
    pub rp_id: String,
}

impl ClientSettings {
    /// Create settings against the hosted backend endpoint
    #[must_use]
    pub fn new(api_key: &str, origin: &str, rp_id: &str) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.to_string(),
            origin: origin.to_string(),
            rp_id: rp_id.to_string(),
        }
    }

    /// Point the client at a self-hosted backend
    #[must_use]
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_string();
        self
    }

    /// Validate the settings
    ///
    /// # Errors
    /// Returns `PasskeyError::Configuration` if the API key or relying party
    /// id is empty, or if the backend URL or origin does not parse as a URL.
    pub fn validate(&self) -> Result<(), PasskeyError> {
        if self.api_key.trim().is_empty() {
            return Err(PasskeyError::Configuration(
                "API key cannot be empty".to_string(),
            ));
        }
        if self.rp_id.trim().is_empty() {
            return Err(PasskeyError::Configuration(
                "Relying party id cannot be empty".to_string(),
            ));
        }
        Url::parse(&self.api_url)
            .map_err(|e| PasskeyError::Configuration(format!("invalid api_url: {e}")))?;
        Url::parse(&self.origin)
            .map_err(|e| PasskeyError::Configuration(format!("invalid origin: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url() {
        let settings = ClientSettings::new("pb_key", "https://app.example.com", "example.com");
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_api_url_override() {
        let settings = ClientSettings::new("pb_key", "https://app.example.com", "example.com")
            .with_api_url("https://passkeys.internal.example.com");
        assert_eq!(settings.api_url, "https://passkeys.internal.example.com");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let settings = ClientSettings::new("  ", "https://app.example.com", "example.com");
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, PasskeyError::Configuration(_)));
    }

    #[test]
    fn test_empty_rp_id_rejected() {
        let settings = ClientSettings::new("pb_key", "https://app.example.com", "");
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let settings = ClientSettings::new("pb_key", "not a url", "example.com");
        assert!(settings.validate().is_err());
    }
}
