//! Error types for request signing.

use thiserror::Error;

/// Errors that can occur while signing a parameter set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SigningError {
    #[error("Signing secret must not be empty")]
    EmptySecret,
}
