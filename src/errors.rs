//! Error types for passkey ceremony operations
//!
//! This module defines the error taxonomy shared by the transcoding,
//! transport, and ceremony layers.

use std::fmt;

/// Errors that can occur while driving a passkey ceremony
#[derive(Debug)]
pub enum PasskeyError {
    /// The executing environment does not expose the public-key credential
    /// capability; fatal without a different device or browser
    UnsupportedPlatform,

    /// Malformed binary/text field during transcoding; indicates a protocol
    /// mismatch between backend and client
    Encoding(String),

    /// The platform ceremony ended without producing a credential (user
    /// dismissal, hardware error); the caller may retry the ceremony fresh
    CeremonyAborted(String),

    /// Network failure or non-success backend response at begin or complete
    Transport(String),

    /// Invalid client settings detected at construction
    Configuration(String),
}

impl fmt::Display for PasskeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasskeyError::UnsupportedPlatform => {
                write!(f, "Public-key credentials are not supported on this platform")
            }
            PasskeyError::Encoding(msg) => write!(f, "Encoding error: {msg}"),
            PasskeyError::CeremonyAborted(msg) => write!(f, "Ceremony aborted: {msg}"),
            PasskeyError::Transport(msg) => write!(f, "Transport error: {msg}"),
            PasskeyError::Configuration(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for PasskeyError {}
