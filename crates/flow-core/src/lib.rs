//! # Flow Core
//!
//! Core types for the Flow payment gateway SDK.
//!
//! This crate provides:
//! - Client configuration ([`FlowConfig`])
//! - The request parameter model ([`Params`], [`ParamValue`])
//! - The list response envelope ([`ListEnvelope`]) and shared paging filter
//! - Validation errors raised before a request is ever built
//!
//! It performs no I/O and no cryptography; signing lives in `flow-signing`
//! and dispatch in `flow-client`.

pub mod config;
pub mod envelope;
pub mod params;
pub mod validation;

pub use config::{ConfigError, FlowConfig};
pub use envelope::{ListEnvelope, ListFilter};
pub use params::{ParamValue, Params};
pub use validation::ValidationError;
