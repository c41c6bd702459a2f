#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![deny(warnings)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the passbridge crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod authenticator;
pub mod client;
pub mod encoding;
pub mod errors;
pub mod requests;
pub mod settings;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Re-export commonly used items
pub use authenticator::PlatformAuthenticator;
pub use client::PasskeyClient;
pub use errors::PasskeyError;
pub use requests::SigninMethod;
pub use settings::ClientSettings;
