//! Error surface of the client crate.

use flow_core::{ConfigError, ValidationError};
use flow_signing::SigningError;
use thiserror::Error;

/// Errors surfaced to applications by any gateway operation.
///
/// Every failure propagates unchanged from the layer that raised it; the
/// engine never retries and never swallows.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gateway error (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the client crate.
pub type FlowResult<T> = Result<T, FlowError>;
