//! Backend REST contract
//!
//! The relying-party backend issues challenges on begin and verifies
//! ceremony responses on complete; challenge issuance, verification, and
//! storage all live on its side. This module carries the four JSON calls
//! the core uses: [`BackendApi`] is the seam the driver depends on,
//! [`HttpBackend`] the production implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::PasskeyError;
use crate::requests::{
    BeginRegistrationRequest, BeginSigninRequest, CompleteRegistrationRequest,
    CompleteSigninRequest,
};
use crate::settings::ClientSettings;
use crate::types::{
    AuthenticationOptions, BeginCeremonyResponse, RegistrationOptions, SigninCompleteResponse,
};

/// Header carrying the backend API key on every call
pub const API_KEY_HEADER: &str = "ApiKey";

/// The four request/response contracts the ceremony driver uses
#[async_trait]
pub trait BackendApi {
    /// POST /register/begin
    ///
    /// # Errors
    /// Returns `PasskeyError::Transport` on network failure or a
    /// non-success backend response.
    async fn begin_registration(
        &self,
        request: &BeginRegistrationRequest,
    ) -> Result<BeginCeremonyResponse<RegistrationOptions>, PasskeyError>;

    /// POST /register/complete
    ///
    /// # Errors
    /// Returns `PasskeyError::Transport` on network failure or a
    /// non-success backend response.
    async fn complete_registration(
        &self,
        request: &CompleteRegistrationRequest,
    ) -> Result<serde_json::Value, PasskeyError>;

    /// POST /signin/begin
    ///
    /// # Errors
    /// Returns `PasskeyError::Transport` on network failure or a
    /// non-success backend response.
    async fn begin_signin(
        &self,
        request: &BeginSigninRequest,
    ) -> Result<BeginCeremonyResponse<AuthenticationOptions>, PasskeyError>;

    /// POST /signin/complete
    ///
    /// # Errors
    /// Returns `PasskeyError::Transport` on network failure or a
    /// non-success backend response.
    async fn complete_signin(
        &self,
        request: &CompleteSigninRequest,
    ) -> Result<SigninCompleteResponse, PasskeyError>;
}

/// `reqwest`-backed implementation of the backend contract
///
/// Every call is a JSON POST carrying the `ApiKey` header.
pub struct HttpBackend {
    http_client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HttpBackend {
    #[must_use]
    pub fn new(settings: &ClientSettings) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        }
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, PasskeyError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{path}", self.api_url);
        log::debug!("POST {url}");

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| PasskeyError::Transport(format!("request to {path} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(PasskeyError::Transport(format!(
                "{path} returned {status}: {detail}"
            )));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| PasskeyError::Transport(format!("invalid response from {path}: {e}")))
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn begin_registration(
        &self,
        request: &BeginRegistrationRequest,
    ) -> Result<BeginCeremonyResponse<RegistrationOptions>, PasskeyError> {
        self.post_json("/register/begin", request).await
    }

    async fn complete_registration(
        &self,
        request: &CompleteRegistrationRequest,
    ) -> Result<serde_json::Value, PasskeyError> {
        self.post_json("/register/complete", request).await
    }

    async fn begin_signin(
        &self,
        request: &BeginSigninRequest,
    ) -> Result<BeginCeremonyResponse<AuthenticationOptions>, PasskeyError> {
        self.post_json("/signin/begin", request).await
    }

    async fn complete_signin(
        &self,
        request: &CompleteSigninRequest,
    ) -> Result<SigninCompleteResponse, PasskeyError> {
        self.post_json("/signin/complete", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped_from_api_url() {
        let settings = ClientSettings::new("pb_key", "https://app.example.com", "example.com")
            .with_api_url("https://passkeys.example.com/");
        let backend = HttpBackend::new(&settings);
        assert_eq!(backend.api_url, "https://passkeys.example.com");
    }
}
