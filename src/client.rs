//! Credential ceremony driver
//!
//! Orchestrates the two-phase begin/complete protocol against the backend
//! around a single platform credential invocation:
//! begin -> transcode-in -> platform ceremony -> transcode-out -> complete.
//! Each public entry point drives one ceremony to completion or to a single
//! terminal error; there are no partial retries, a failed ceremony is
//! restarted from scratch by the caller.

use crate::api::{BackendApi, HttpBackend};
use crate::authenticator::PlatformAuthenticator;
use crate::errors::PasskeyError;
use crate::requests::{
    BeginRegistrationRequest, BeginSigninRequest, CompleteRegistrationRequest,
    CompleteSigninRequest, SigninMethod,
};
use crate::settings::ClientSettings;
use crate::types::{DecodedAuthenticationOptions, DecodedRegistrationOptions};

/// Client-side orchestrator for passkey registration and sign-in ceremonies
pub struct PasskeyClient<A, B = HttpBackend> {
    settings: ClientSettings,
    authenticator: A,
    backend: B,
}

impl<A> PasskeyClient<A, HttpBackend>
where
    A: PlatformAuthenticator,
{
    /// Create a client talking to the backend named by the settings
    ///
    /// # Errors
    /// Returns `PasskeyError::Configuration` if the settings are invalid.
    pub fn new(settings: ClientSettings, authenticator: A) -> Result<Self, PasskeyError> {
        settings.validate()?;
        let backend = HttpBackend::new(&settings);
        Ok(Self {
            settings,
            authenticator,
            backend,
        })
    }
}

impl<A, B> PasskeyClient<A, B>
where
    A: PlatformAuthenticator + Sync,
    B: BackendApi + Sync,
{
    /// Create a client over a custom backend transport
    ///
    /// # Errors
    /// Returns `PasskeyError::Configuration` if the settings are invalid.
    pub fn with_backend(
        settings: ClientSettings,
        authenticator: A,
        backend: B,
    ) -> Result<Self, PasskeyError> {
        settings.validate()?;
        Ok(Self {
            settings,
            authenticator,
            backend,
        })
    }

    /// The platform capability this client drives
    #[must_use]
    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// The backend transport this client talks to
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether the executing environment supports public-key credentials
    #[must_use]
    pub fn is_capability_supported(&self) -> bool {
        self.authenticator.is_supported()
    }

    /// Whether a built-in platform authenticator is available
    ///
    /// Short-circuits to `false` without probing when the credential
    /// capability itself is unsupported.
    pub async fn is_platform_authenticator_available(&self) -> bool {
        if !self.authenticator.is_supported() {
            return false;
        }
        self.authenticator.is_platform_authenticator_available().await
    }

    /// Register a new credential
    ///
    /// `token` is the opaque registration proof issued by the caller's own
    /// backend integration, forwarded verbatim; `nickname` is the
    /// user-facing label stored with the credential.
    ///
    /// # Errors
    /// - `PasskeyError::UnsupportedPlatform` before any network call when
    ///   the credential capability is absent
    /// - `PasskeyError::Transport` when begin or complete fails
    /// - `PasskeyError::Encoding` on a malformed ceremony option field
    /// - `PasskeyError::CeremonyAborted` when the platform produces no
    ///   credential
    pub async fn register(
        &self,
        token: &str,
        nickname: &str,
    ) -> Result<serde_json::Value, PasskeyError> {
        match self.run_registration(token, nickname).await {
            Ok(payload) => Ok(payload),
            Err(e) => {
                log::error!("registration ceremony failed: {e}");
                Err(e)
            }
        }
    }

    /// Sign in with a known user id
    ///
    /// # Errors
    /// Same taxonomy as [`Self::register`].
    pub async fn sign_in_with_user_id(
        &self,
        user_id: &str,
    ) -> Result<serde_json::Value, PasskeyError> {
        self.sign_in(SigninMethod::UserId(user_id.to_string())).await
    }

    /// Sign in with a registered alias
    ///
    /// # Errors
    /// Same taxonomy as [`Self::register`].
    pub async fn sign_in_with_alias(&self, alias: &str) -> Result<serde_json::Value, PasskeyError> {
        self.sign_in(SigninMethod::Alias(alias.to_string())).await
    }

    async fn sign_in(&self, method: SigninMethod) -> Result<serde_json::Value, PasskeyError> {
        match self.run_signin(&method).await {
            Ok(data) => Ok(data),
            Err(e) => {
                log::error!("sign-in ceremony failed: {e}");
                Err(e)
            }
        }
    }

    fn ensure_supported(&self) -> Result<(), PasskeyError> {
        if self.authenticator.is_supported() {
            Ok(())
        } else {
            Err(PasskeyError::UnsupportedPlatform)
        }
    }

    async fn run_registration(
        &self,
        token: &str,
        nickname: &str,
    ) -> Result<serde_json::Value, PasskeyError> {
        self.ensure_supported()?;

        let begin = self
            .backend
            .begin_registration(&BeginRegistrationRequest::new(token, &self.settings))
            .await?;
        log::debug!("registration session {} begun", begin.session_id);

        let options = DecodedRegistrationOptions::from_wire(&begin.data)?;
        let attestation = self
            .authenticator
            .create_credential(&options)
            .await?
            .ok_or_else(|| {
                PasskeyError::CeremonyAborted("platform returned no credential".to_string())
            })?;

        let request = CompleteRegistrationRequest::new(
            begin.session_id,
            &attestation,
            nickname,
            &self.settings,
        );
        self.backend.complete_registration(&request).await
    }

    async fn run_signin(&self, method: &SigninMethod) -> Result<serde_json::Value, PasskeyError> {
        self.ensure_supported()?;

        let begin = self
            .backend
            .begin_signin(&BeginSigninRequest::new(method, &self.settings))
            .await?;
        log::debug!("sign-in session {} begun", begin.session_id);

        let options = DecodedAuthenticationOptions::from_wire(&begin.data)?;
        let assertion = self
            .authenticator
            .get_credential(&options)
            .await?
            .ok_or_else(|| {
                PasskeyError::CeremonyAborted("platform returned no assertion".to_string())
            })?;

        let request = CompleteSigninRequest::new(begin.session_id, &assertion, &self.settings);
        let verified = self.backend.complete_signin(&request).await?;
        Ok(verified.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockAuthenticator, MockBackend};

    fn settings() -> ClientSettings {
        ClientSettings::new("pb_public_key", "https://app.example.com", "example.com")
    }

    #[test]
    fn test_invalid_settings_rejected_at_construction() {
        let settings = ClientSettings::new("", "https://app.example.com", "example.com");
        let result = PasskeyClient::with_backend(
            settings,
            MockAuthenticator::supported(),
            MockBackend::new(),
        );
        assert!(matches!(result, Err(PasskeyError::Configuration(_))));
    }

    #[test]
    fn test_capability_supported_passthrough() {
        let client = PasskeyClient::with_backend(
            settings(),
            MockAuthenticator::unsupported(),
            MockBackend::new(),
        )
        .unwrap();
        assert!(!client.is_capability_supported());
    }

    #[tokio::test]
    async fn test_platform_probe_short_circuits_when_unsupported() {
        // The mock reports an available platform authenticator, but the
        // capability guard must win without ever probing.
        let mut authenticator = MockAuthenticator::unsupported();
        authenticator.platform_available = true;
        let client =
            PasskeyClient::with_backend(settings(), authenticator, MockBackend::new()).unwrap();
        assert!(!client.is_platform_authenticator_available().await);
    }

    #[tokio::test]
    async fn test_register_unsupported_platform_fails_fast() {
        let backend = MockBackend::new();
        let client = PasskeyClient::with_backend(
            settings(),
            MockAuthenticator::unsupported(),
            backend,
        )
        .unwrap();

        let err = client.register("token_1", "laptop").await.unwrap_err();
        assert!(matches!(err, PasskeyError::UnsupportedPlatform));
        assert!(client.backend().recorded_calls().is_empty(), "no network call expected");
    }
}
