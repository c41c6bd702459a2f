//! Data model for passkey ceremonies
//!
//! Ceremony options exist in two representations: the text form as issued by
//! the backend (binary fields as base64url strings) and the decoded form
//! handed to the platform credential subsystem (binary fields as byte
//! buffers). The decoded form is always constructed fresh from the text
//! form; the two never alias.

use serde::{Deserialize, Serialize};

use crate::encoding;
use crate::errors::PasskeyError;

/// Relying party information
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RelyingParty {
    pub id: String,   // Domain name (e.g., "example.com")
    pub name: String, // Display name
}

/// User entity as issued by the backend
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    pub id: String,           // Base64URL-encoded user handle
    pub name: String,         // Username (e.g., email)
    pub display_name: String, // Display name
}

/// Public key credential parameters
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PublicKeyCredentialParameters {
    pub r#type: String, // Always "public-key"
    pub alg: i32,       // Algorithm identifier (-7 for ES256, -257 for RS256)
}

/// Authenticator selection criteria
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorSelectionCriteria {
    pub authenticator_attachment: Option<String>, // "platform", "cross-platform"
    #[serde(default)]
    pub require_resident_key: bool, // Whether resident key is required
    #[serde(default)]
    pub resident_key: Option<String>, // "required", "preferred", "discouraged"
    pub user_verification: String, // "required", "preferred", "discouraged"
}

/// Credential descriptor with a base64url-encoded id
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CredentialDescriptor {
    pub r#type: String, // Always "public-key"
    pub id: String,     // Base64URL-encoded credential ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<String>>, // "internal", "usb", "nfc", "ble", "hybrid"
}

/// Registration ceremony options as issued by the backend
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationOptions {
    pub challenge: String, // Base64URL-encoded random challenge
    pub rp: RelyingParty,  // Relying party information
    pub user: UserEntity,  // User information
    #[serde(default)]
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>, // Allowed algorithms
    #[serde(default)]
    pub timeout: Option<u32>, // Timeout in milliseconds
    #[serde(default)]
    pub attestation: Option<String>, // "none", "indirect", "direct"
    #[serde(default)]
    pub authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    #[serde(default)]
    pub exclude_credentials: Vec<CredentialDescriptor>, // Already-registered credentials
}

/// Sign-in ceremony options as issued by the backend
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationOptions {
    pub challenge: String, // Base64URL-encoded random challenge
    #[serde(default)]
    pub timeout: Option<u32>, // Timeout in milliseconds
    pub rp_id: String,     // Relying party ID
    #[serde(default)]
    pub allow_credentials: Vec<CredentialDescriptor>, // Allowed credentials
    #[serde(default)]
    pub user_verification: Option<String>, // "required", "preferred", "discouraged"
}

/// Envelope for both begin calls: the ceremony session plus the options
///
/// The session id correlates the begin and complete calls of one ceremony
/// and is consumed by exactly one complete call.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BeginCeremonyResponse<T> {
    pub session_id: String, // Server-issued opaque session correlator
    pub data: T,            // Ceremony options, text form
}

/// Envelope for the complete-signin response
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SigninCompleteResponse {
    pub data: serde_json::Value, // Opaque success value returned to the caller
}

/// User entity in the binary form required by the platform capability
#[derive(Clone, Debug)]
pub struct DecodedUserEntity {
    pub id: Vec<u8>,
    pub name: String,
    pub display_name: String,
}

/// Credential descriptor in the binary form required by the platform capability
#[derive(Clone, Debug)]
pub struct DecodedCredentialDescriptor {
    pub r#type: String,
    pub id: Vec<u8>,
    pub transports: Option<Vec<String>>,
}

impl DecodedCredentialDescriptor {
    fn from_wire(descriptor: &CredentialDescriptor) -> Result<Self, PasskeyError> {
        Ok(Self {
            r#type: descriptor.r#type.clone(),
            id: encoding::decode_challenge(&descriptor.id)?,
            transports: descriptor.transports.clone(),
        })
    }
}

/// Registration ceremony options in the binary form required by the platform
/// capability
#[derive(Clone, Debug)]
pub struct DecodedRegistrationOptions {
    pub challenge: Vec<u8>,
    pub rp: RelyingParty,
    pub user: DecodedUserEntity,
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    pub timeout: Option<u32>,
    pub attestation: Option<String>,
    pub authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    pub exclude_credentials: Vec<DecodedCredentialDescriptor>,
}

impl DecodedRegistrationOptions {
    /// Build the binary form from the backend-issued text form
    ///
    /// # Errors
    /// Returns `PasskeyError::Encoding` if the challenge, the user id, or
    /// any excluded credential id is not valid base64url.
    pub fn from_wire(options: &RegistrationOptions) -> Result<Self, PasskeyError> {
        let exclude_credentials = options
            .exclude_credentials
            .iter()
            .map(DecodedCredentialDescriptor::from_wire)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            challenge: encoding::decode_challenge(&options.challenge)?,
            rp: options.rp.clone(),
            user: DecodedUserEntity {
                id: encoding::decode_challenge(&options.user.id)?,
                name: options.user.name.clone(),
                display_name: options.user.display_name.clone(),
            },
            pub_key_cred_params: options.pub_key_cred_params.clone(),
            timeout: options.timeout,
            attestation: options.attestation.clone(),
            authenticator_selection: options.authenticator_selection.clone(),
            exclude_credentials,
        })
    }
}

/// Sign-in ceremony options in the binary form required by the platform
/// capability
#[derive(Clone, Debug)]
pub struct DecodedAuthenticationOptions {
    pub challenge: Vec<u8>,
    pub timeout: Option<u32>,
    pub rp_id: String,
    pub allow_credentials: Vec<DecodedCredentialDescriptor>,
    pub user_verification: Option<String>,
}

impl DecodedAuthenticationOptions {
    /// Build the binary form from the backend-issued text form
    ///
    /// # Errors
    /// Returns `PasskeyError::Encoding` if the challenge or any allowed
    /// credential id is not valid base64url.
    pub fn from_wire(options: &AuthenticationOptions) -> Result<Self, PasskeyError> {
        let allow_credentials = options
            .allow_credentials
            .iter()
            .map(DecodedCredentialDescriptor::from_wire)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            challenge: encoding::decode_challenge(&options.challenge)?,
            timeout: options.timeout,
            rp_id: options.rp_id.clone(),
            allow_credentials,
            user_verification: options.user_verification.clone(),
        })
    }
}

/// Credential returned by the platform capability after a registration
/// ceremony
#[derive(Clone, Debug)]
pub struct AttestationResult {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub r#type: String, // Always "public-key"
    pub extensions: Option<serde_json::Value>, // Client extension results
    pub attestation_object: Vec<u8>,
    pub client_data_json: Vec<u8>,
}

/// Assertion returned by the platform capability after a sign-in ceremony
#[derive(Clone, Debug)]
pub struct AssertionResult {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub r#type: String, // Always "public-key"
    pub extensions: Option<serde_json::Value>, // Client extension results
    pub authenticator_data: Vec<u8>,
    pub client_data_json: Vec<u8>,
    pub signature: Vec<u8>,
    pub user_handle: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration_options() -> RegistrationOptions {
        serde_json::from_value(serde_json::json!({
            "challenge": "AQID",
            "rp": { "id": "example.com", "name": "Example" },
            "user": { "id": "BAUG", "name": "jane@example.com", "displayName": "Jane" },
            "pubKeyCredParams": [ { "type": "public-key", "alg": -7 } ],
            "timeout": 60000,
            "attestation": "none",
            "excludeCredentials": [ { "type": "public-key", "id": "Bwg" } ]
        }))
        .unwrap()
    }

    #[test]
    fn test_decode_registration_options() {
        let decoded = DecodedRegistrationOptions::from_wire(&registration_options()).unwrap();
        assert_eq!(decoded.challenge, vec![1, 2, 3]);
        assert_eq!(decoded.user.id, vec![4, 5, 6]);
        assert_eq!(decoded.user.display_name, "Jane");
        assert_eq!(decoded.exclude_credentials.len(), 1);
        assert_eq!(decoded.exclude_credentials[0].id, vec![7, 8]);
        assert_eq!(decoded.timeout, Some(60000));
    }

    #[test]
    fn test_decode_registration_options_bad_challenge() {
        let mut options = registration_options();
        options.challenge = "not base64url!".to_string();
        let err = DecodedRegistrationOptions::from_wire(&options).unwrap_err();
        assert!(matches!(err, PasskeyError::Encoding(_)));
    }

    #[test]
    fn test_decode_registration_options_bad_exclude_id() {
        let mut options = registration_options();
        options.exclude_credentials[0].id = "+/=".to_string();
        assert!(DecodedRegistrationOptions::from_wire(&options).is_err());
    }

    #[test]
    fn test_decode_authentication_options() {
        let options: AuthenticationOptions = serde_json::from_value(serde_json::json!({
            "challenge": "AQID",
            "rpId": "example.com",
            "allowCredentials": [
                { "type": "public-key", "id": "BAUG", "transports": ["internal"] }
            ],
            "userVerification": "preferred"
        }))
        .unwrap();

        let decoded = DecodedAuthenticationOptions::from_wire(&options).unwrap();
        assert_eq!(decoded.challenge, vec![1, 2, 3]);
        assert_eq!(decoded.rp_id, "example.com");
        assert_eq!(decoded.allow_credentials[0].id, vec![4, 5, 6]);
        assert_eq!(
            decoded.allow_credentials[0].transports,
            Some(vec!["internal".to_string()])
        );
        assert_eq!(decoded.user_verification.as_deref(), Some("preferred"));
    }

    #[test]
    fn test_begin_ceremony_response_envelope() {
        let envelope: BeginCeremonyResponse<AuthenticationOptions> =
            serde_json::from_value(serde_json::json!({
                "sessionId": "session_abc",
                "data": { "challenge": "AQID", "rpId": "example.com" }
            }))
            .unwrap();
        assert_eq!(envelope.session_id, "session_abc");
        assert_eq!(envelope.data.challenge, "AQID");
        assert!(envelope.data.allow_credentials.is_empty());
    }
}
