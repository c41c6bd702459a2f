//! Testing utilities for passbridge
//!
//! This module consolidates the mock collaborators and fixtures used by the
//! unit and integration suites. It is compiled for `cfg(test)` and for the
//! `testing` cargo feature, which integration tests enable explicitly.
//!
//! ## Organization
//!
//! - [`fixtures`] - Pre-built wire options, platform results, and settings
//! - [`mock`] - Scripted implementations of the two external seams

pub mod fixtures;
pub mod mock;

// Re-export commonly used items for convenience
pub use fixtures::TestFixtures;
pub use mock::{MockAuthenticator, MockBackend, MockCeremonyOutcome, RecordedCall};
