//! Request bodies for the backend ceremony contract
//!
//! Every binary field crossing into these bodies is re-encoded to
//! padding-free base64url via the transcoder; relying-party id and origin
//! are attached identically to the begin and complete calls of one ceremony.

use serde::{Deserialize, Serialize};

use crate::encoding;
use crate::settings::ClientSettings;
use crate::types::{AssertionResult, AttestationResult};

/// Selector carried by a sign-in ceremony
///
/// Exactly one identity hint exists per ceremony; the variant decides which
/// key appears in the begin-signin body, the other is omitted entirely.
#[derive(Clone, Debug)]
pub enum SigninMethod {
    /// Sign in with a known user id
    UserId(String),
    /// Sign in with a registered alias (e.g. an email address)
    Alias(String),
}

/// Body of POST /register/begin
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BeginRegistrationRequest {
    pub token: String, // Opaque registration proof, forwarded verbatim
    pub relying_party_id: String,
    pub origin: String,
}

impl BeginRegistrationRequest {
    #[must_use]
    pub fn new(token: &str, settings: &ClientSettings) -> Self {
        Self {
            token: token.to_string(),
            relying_party_id: settings.rp_id.clone(),
            origin: settings.origin.clone(),
        }
    }
}

/// Body of POST /signin/begin
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BeginSigninRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub relying_party_id: String,
    pub origin: String,
}

impl BeginSigninRequest {
    #[must_use]
    pub fn new(method: &SigninMethod, settings: &ClientSettings) -> Self {
        let (user_id, alias) = match method {
            SigninMethod::UserId(user_id) => (Some(user_id.clone()), None),
            SigninMethod::Alias(alias) => (None, Some(alias.clone())),
        };
        Self {
            user_id,
            alias,
            relying_party_id: settings.rp_id.clone(),
            origin: settings.origin.clone(),
        }
    }
}

/// Attestation payload nested inside the registration credential
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AttestationData {
    pub attestation_object: String, // Base64URL-encoded attestation object
    pub client_data_json: String,   // Base64URL-encoded client data JSON
}

/// Registration credential rebuilt with text-encoded binary fields
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AttestationPayload {
    pub id: String,
    pub raw_id: String, // Base64URL-encoded raw credential ID
    pub r#type: String, // Always "public-key"
    pub extensions: Option<serde_json::Value>,
    pub response: AttestationData,
}

impl AttestationPayload {
    #[must_use]
    pub fn from_result(result: &AttestationResult) -> Self {
        Self {
            id: result.id.clone(),
            raw_id: encoding::encode_to_base64url(&result.raw_id),
            r#type: result.r#type.clone(),
            extensions: result.extensions.clone(),
            response: AttestationData {
                attestation_object: encoding::encode_to_base64url(&result.attestation_object),
                client_data_json: encoding::encode_to_base64url(&result.client_data_json),
            },
        }
    }
}

/// Body of POST /register/complete
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRegistrationRequest {
    pub session_id: String,
    pub response: AttestationPayload,
    pub nickname: String,
    pub relying_party_id: String,
    pub origin: String,
}

impl CompleteRegistrationRequest {
    #[must_use]
    pub fn new(
        session_id: String,
        result: &AttestationResult,
        nickname: &str,
        settings: &ClientSettings,
    ) -> Self {
        Self {
            session_id,
            response: AttestationPayload::from_result(result),
            nickname: nickname.to_string(),
            relying_party_id: settings.rp_id.clone(),
            origin: settings.origin.clone(),
        }
    }
}

/// Assertion payload nested inside the sign-in credential
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssertionData {
    pub authenticator_data: String, // Base64URL-encoded authenticator data
    pub client_data_json: String,   // Base64URL-encoded client data JSON
    pub signature: String,          // Base64URL-encoded assertion signature
}

/// Sign-in credential rebuilt with text-encoded binary fields
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssertionPayload {
    pub id: String,
    pub raw_id: String, // Base64URL-encoded raw credential ID
    pub r#type: String, // Always "public-key"
    pub extensions: Option<serde_json::Value>,
    pub response: AssertionData,
}

impl AssertionPayload {
    #[must_use]
    pub fn from_result(result: &AssertionResult) -> Self {
        Self {
            id: result.id.clone(),
            raw_id: encoding::encode_to_base64url(&result.raw_id),
            r#type: result.r#type.clone(),
            extensions: result.extensions.clone(),
            response: AssertionData {
                authenticator_data: encoding::encode_to_base64url(&result.authenticator_data),
                client_data_json: encoding::encode_to_base64url(&result.client_data_json),
                signature: encoding::encode_to_base64url(&result.signature),
            },
        }
    }
}

/// Body of POST /signin/complete
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CompleteSigninRequest {
    pub session_id: String,
    pub response: AssertionPayload,
    pub relying_party_id: String,
    pub origin: String,
}

impl CompleteSigninRequest {
    #[must_use]
    pub fn new(session_id: String, result: &AssertionResult, settings: &ClientSettings) -> Self {
        Self {
            session_id,
            response: AssertionPayload::from_result(result),
            relying_party_id: settings.rp_id.clone(),
            origin: settings.origin.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ClientSettings {
        ClientSettings::new("pb_public_key", "https://app.example.com", "example.com")
    }

    fn attestation_result() -> AttestationResult {
        AttestationResult {
            id: "AQID".to_string(),
            raw_id: vec![1, 2, 3],
            r#type: "public-key".to_string(),
            extensions: None,
            attestation_object: vec![0xa0],
            client_data_json: b"{}".to_vec(),
        }
    }

    #[test]
    fn test_begin_signin_body_with_user_id() {
        let request = BeginSigninRequest::new(
            &SigninMethod::UserId("u1".to_string()),
            &settings(),
        );
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["userId"], "u1");
        assert_eq!(body["relyingPartyId"], "example.com");
        assert_eq!(body["origin"], "https://app.example.com");
        assert!(body.get("alias").is_none(), "alias key must be absent");
    }

    #[test]
    fn test_begin_signin_body_with_alias() {
        let request = BeginSigninRequest::new(
            &SigninMethod::Alias("jane@example.com".to_string()),
            &settings(),
        );
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["alias"], "jane@example.com");
        assert!(body.get("userId").is_none(), "userId key must be absent");
    }

    #[test]
    fn test_complete_registration_body_shape() {
        let request = CompleteRegistrationRequest::new(
            "session_1".to_string(),
            &attestation_result(),
            "work laptop",
            &settings(),
        );
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["sessionId"], "session_1");
        assert_eq!(body["nickname"], "work laptop");
        assert_eq!(body["response"]["rawId"], "AQID");
        assert_eq!(body["response"]["type"], "public-key");
        assert_eq!(body["response"]["response"]["attestationObject"], "oA");
        assert_eq!(body["response"]["response"]["clientDataJson"], "e30");
        assert_eq!(body["relyingPartyId"], "example.com");
    }

    #[test]
    fn test_complete_signin_body_shape() {
        let result = AssertionResult {
            id: "BAUG".to_string(),
            raw_id: vec![4, 5, 6],
            r#type: "public-key".to_string(),
            extensions: Some(serde_json::json!({})),
            authenticator_data: vec![9],
            client_data_json: b"{}".to_vec(),
            signature: vec![7, 7],
            user_handle: None,
        };
        let request = CompleteSigninRequest::new("session_2".to_string(), &result, &settings());
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["sessionId"], "session_2");
        assert_eq!(body["response"]["rawId"], "BAUG");
        assert_eq!(body["response"]["response"]["signature"], "Bwc");
        assert_eq!(body["response"]["response"]["clientDataJson"], "e30");
        assert_eq!(body["origin"], "https://app.example.com");
    }
}
