//! Mock objects and scripted implementations for testing
//!
//! Mocks for the two external seams: the platform credential capability and
//! the backend REST contract. Both record what the driver hands them so
//! tests can assert on transcoded values and call ordering.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::BackendApi;
use crate::authenticator::PlatformAuthenticator;
use crate::errors::PasskeyError;
use crate::requests::{
    BeginRegistrationRequest, BeginSigninRequest, CompleteRegistrationRequest,
    CompleteSigninRequest,
};
use crate::testing::fixtures::TestFixtures;
use crate::types::{
    AssertionResult, AttestationResult, AuthenticationOptions, BeginCeremonyResponse,
    DecodedAuthenticationOptions, DecodedRegistrationOptions, RegistrationOptions,
    SigninCompleteResponse,
};

/// Scripted outcome for a mock platform ceremony
#[derive(Clone, Debug)]
pub enum MockCeremonyOutcome {
    /// Resolve with the fixture credential
    Produce,
    /// Resolve without a credential (user dismissal, platform timeout)
    NoResult,
    /// Reject the ceremony outright
    Reject(String),
}

/// Scripted platform credential capability
pub struct MockAuthenticator {
    pub supported: bool,
    pub platform_available: bool,
    pub outcome: MockCeremonyOutcome,
    /// Binary challenges seen by `create_credential`
    pub creation_challenges: Mutex<Vec<Vec<u8>>>,
    /// Binary challenges seen by `get_credential`
    pub assertion_challenges: Mutex<Vec<Vec<u8>>>,
}

impl MockAuthenticator {
    /// An authenticator that supports the capability and produces the
    /// fixture credential
    #[must_use]
    pub fn supported() -> Self {
        Self {
            supported: true,
            platform_available: true,
            outcome: MockCeremonyOutcome::Produce,
            creation_challenges: Mutex::new(Vec::new()),
            assertion_challenges: Mutex::new(Vec::new()),
        }
    }

    /// An environment without the public-key credential capability
    #[must_use]
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            platform_available: false,
            outcome: MockCeremonyOutcome::NoResult,
            creation_challenges: Mutex::new(Vec::new()),
            assertion_challenges: Mutex::new(Vec::new()),
        }
    }

    /// Override the scripted ceremony outcome
    #[must_use]
    pub fn with_outcome(mut self, outcome: MockCeremonyOutcome) -> Self {
        self.outcome = outcome;
        self
    }
}

#[async_trait]
impl PlatformAuthenticator for MockAuthenticator {
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn is_platform_authenticator_available(&self) -> bool {
        self.platform_available
    }

    async fn create_credential(
        &self,
        options: &DecodedRegistrationOptions,
    ) -> Result<Option<AttestationResult>, PasskeyError> {
        self.creation_challenges
            .lock()
            .unwrap()
            .push(options.challenge.clone());
        match &self.outcome {
            MockCeremonyOutcome::Produce => Ok(Some(TestFixtures::attestation_result())),
            MockCeremonyOutcome::NoResult => Ok(None),
            MockCeremonyOutcome::Reject(reason) => {
                Err(PasskeyError::CeremonyAborted(reason.clone()))
            }
        }
    }

    async fn get_credential(
        &self,
        options: &DecodedAuthenticationOptions,
    ) -> Result<Option<AssertionResult>, PasskeyError> {
        self.assertion_challenges
            .lock()
            .unwrap()
            .push(options.challenge.clone());
        match &self.outcome {
            MockCeremonyOutcome::Produce => Ok(Some(TestFixtures::assertion_result())),
            MockCeremonyOutcome::NoResult => Ok(None),
            MockCeremonyOutcome::Reject(reason) => {
                Err(PasskeyError::CeremonyAborted(reason.clone()))
            }
        }
    }
}

/// One backend call recorded by [`MockBackend`]
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub path: String,
    pub body: serde_json::Value,
}

/// Scripted backend transport recording every issued call
///
/// Calls without a scripted response fail with the transport error kind,
/// which doubles as the network-failure path in tests.
#[derive(Default)]
pub struct MockBackend {
    registration_ceremony: Option<BeginCeremonyResponse<RegistrationOptions>>,
    signin_ceremony: Option<BeginCeremonyResponse<AuthenticationOptions>>,
    registration_success: Option<serde_json::Value>,
    signin_success: Option<serde_json::Value>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockBackend {
    /// A backend with no scripted responses; every call fails as transport
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the begin-registration response
    #[must_use]
    pub fn with_registration_ceremony(
        mut self,
        ceremony: BeginCeremonyResponse<RegistrationOptions>,
    ) -> Self {
        self.registration_ceremony = Some(ceremony);
        self.registration_success = Some(serde_json::json!({ "status": "ok" }));
        self
    }

    /// Script the begin-signin response
    #[must_use]
    pub fn with_signin_ceremony(
        mut self,
        ceremony: BeginCeremonyResponse<AuthenticationOptions>,
    ) -> Self {
        self.signin_ceremony = Some(ceremony);
        self.signin_success = Some(serde_json::json!("verify_token"));
        self
    }

    /// Override the opaque success value returned by complete-signin
    #[must_use]
    pub fn with_signin_success(mut self, value: serde_json::Value) -> Self {
        self.signin_success = Some(value);
        self
    }

    /// Everything the driver sent, in order
    ///
    /// # Panics
    /// Panics if the recording mutex is poisoned.
    #[must_use]
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record<B: serde::Serialize>(&self, path: &str, body: &B) {
        self.calls.lock().unwrap().push(RecordedCall {
            path: path.to_string(),
            body: serde_json::to_value(body).unwrap(),
        });
    }

    fn unscripted(path: &str) -> PasskeyError {
        PasskeyError::Transport(format!("no scripted response for {path}"))
    }
}

#[async_trait]
impl BackendApi for MockBackend {
    async fn begin_registration(
        &self,
        request: &BeginRegistrationRequest,
    ) -> Result<BeginCeremonyResponse<RegistrationOptions>, PasskeyError> {
        self.record("/register/begin", request);
        self.registration_ceremony
            .clone()
            .ok_or_else(|| Self::unscripted("/register/begin"))
    }

    async fn complete_registration(
        &self,
        request: &CompleteRegistrationRequest,
    ) -> Result<serde_json::Value, PasskeyError> {
        self.record("/register/complete", request);
        self.registration_success
            .clone()
            .ok_or_else(|| Self::unscripted("/register/complete"))
    }

    async fn begin_signin(
        &self,
        request: &BeginSigninRequest,
    ) -> Result<BeginCeremonyResponse<AuthenticationOptions>, PasskeyError> {
        self.record("/signin/begin", request);
        self.signin_ceremony
            .clone()
            .ok_or_else(|| Self::unscripted("/signin/begin"))
    }

    async fn complete_signin(
        &self,
        request: &CompleteSigninRequest,
    ) -> Result<SigninCompleteResponse, PasskeyError> {
        self.record("/signin/complete", request);
        self.signin_success
            .clone()
            .map(|data| SigninCompleteResponse { data })
            .ok_or_else(|| Self::unscripted("/signin/complete"))
    }
}
