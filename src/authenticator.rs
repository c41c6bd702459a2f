//! Platform credential capability seam
//!
//! The host platform's secure credential store and user-verification UI
//! (biometric, PIN, security key) sit behind this trait. The driver treats
//! it as an opaque capability exposing a create and a get operation over a
//! decoded ceremony descriptor; timeouts and cancellation are whatever the
//! platform natively supports.

use async_trait::async_trait;

use crate::errors::PasskeyError;
use crate::types::{
    AssertionResult, AttestationResult, DecodedAuthenticationOptions, DecodedRegistrationOptions,
};

/// Platform public-key credential capability
#[async_trait]
pub trait PlatformAuthenticator {
    /// Whether the executing environment exposes the public-key credential
    /// capability at all. Pure and synchronous.
    fn is_supported(&self) -> bool;

    /// Probe for a built-in platform authenticator (e.g. a fingerprint
    /// reader). May involve a fast hardware or OS query.
    async fn is_platform_authenticator_available(&self) -> bool;

    /// Run the attestation (credential creation) ceremony
    ///
    /// May suspend indefinitely while the user interacts with the
    /// verification prompt. Returns `Ok(None)` when the platform finishes
    /// without producing a credential (user dismissal, platform timeout).
    ///
    /// # Errors
    /// Implementations report an outright platform rejection as
    /// `PasskeyError::CeremonyAborted`.
    async fn create_credential(
        &self,
        options: &DecodedRegistrationOptions,
    ) -> Result<Option<AttestationResult>, PasskeyError>;

    /// Run the assertion (credential lookup) ceremony
    ///
    /// Same suspension and cancellation semantics as [`Self::create_credential`].
    ///
    /// # Errors
    /// Implementations report an outright platform rejection as
    /// `PasskeyError::CeremonyAborted`.
    async fn get_credential(
        &self,
        options: &DecodedAuthenticationOptions,
    ) -> Result<Option<AssertionResult>, PasskeyError>;
}
