//! Pre-built test data for ceremony flows

use crate::settings::ClientSettings;
use crate::types::{
    AssertionResult, AttestationResult, AuthenticationOptions, BeginCeremonyResponse,
    CredentialDescriptor, RegistrationOptions, RelyingParty, UserEntity,
};

/// Central factory for test data
pub struct TestFixtures;

impl TestFixtures {
    /// Settings pointing at a self-hosted test backend
    #[must_use]
    pub fn settings() -> ClientSettings {
        ClientSettings::new(
            "pb_public_test_key",
            "https://app.example.com",
            "example.com",
        )
        .with_api_url("https://passkeys.test.example.com")
    }

    /// Registration options with the given base64url challenge
    #[must_use]
    pub fn registration_options(challenge: &str) -> RegistrationOptions {
        RegistrationOptions {
            challenge: challenge.to_string(),
            rp: RelyingParty {
                id: "example.com".to_string(),
                name: "Example".to_string(),
            },
            user: UserEntity {
                id: "BAUG".to_string(), // [4, 5, 6]
                name: "jane@example.com".to_string(),
                display_name: "Jane".to_string(),
            },
            pub_key_cred_params: Vec::new(),
            timeout: Some(60000),
            attestation: Some("none".to_string()),
            authenticator_selection: None,
            exclude_credentials: vec![CredentialDescriptor {
                r#type: "public-key".to_string(),
                id: "Bwg".to_string(), // [7, 8]
                transports: Some(vec!["internal".to_string()]),
            }],
        }
    }

    /// Sign-in options with the given base64url challenge
    #[must_use]
    pub fn authentication_options(challenge: &str) -> AuthenticationOptions {
        AuthenticationOptions {
            challenge: challenge.to_string(),
            timeout: Some(60000),
            rp_id: "example.com".to_string(),
            allow_credentials: vec![CredentialDescriptor {
                r#type: "public-key".to_string(),
                id: "BAUG".to_string(), // [4, 5, 6]
                transports: None,
            }],
            user_verification: Some("preferred".to_string()),
        }
    }

    /// Begin-registration envelope for the given session id and challenge
    #[must_use]
    pub fn registration_ceremony(
        session_id: &str,
        challenge: &str,
    ) -> BeginCeremonyResponse<RegistrationOptions> {
        BeginCeremonyResponse {
            session_id: session_id.to_string(),
            data: Self::registration_options(challenge),
        }
    }

    /// Begin-signin envelope for the given session id and challenge
    #[must_use]
    pub fn signin_ceremony(
        session_id: &str,
        challenge: &str,
    ) -> BeginCeremonyResponse<AuthenticationOptions> {
        BeginCeremonyResponse {
            session_id: session_id.to_string(),
            data: Self::authentication_options(challenge),
        }
    }

    /// Attestation result a scripted authenticator hands back
    #[must_use]
    pub fn attestation_result() -> AttestationResult {
        AttestationResult {
            id: "CgsM".to_string(),
            raw_id: vec![10, 11, 12],
            r#type: "public-key".to_string(),
            extensions: None,
            attestation_object: vec![0xa3, 0x63, 0x66, 0x6d, 0x74],
            client_data_json: br#"{"type":"webauthn.create"}"#.to_vec(),
        }
    }

    /// Assertion result a scripted authenticator hands back
    #[must_use]
    pub fn assertion_result() -> AssertionResult {
        AssertionResult {
            id: "CgsM".to_string(),
            raw_id: vec![10, 11, 12],
            r#type: "public-key".to_string(),
            extensions: None,
            authenticator_data: vec![0x49, 0x96, 0x02, 0xd2],
            client_data_json: br#"{"type":"webauthn.get"}"#.to_vec(),
            signature: vec![0x30, 0x45, 0x02, 0x20],
            user_handle: Some(vec![4, 5, 6]),
        }
    }
}
