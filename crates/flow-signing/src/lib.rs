//! # Flow Signing
//!
//! Parameter canonicalization and request signing for the Flow gateway.
//!
//! Every authenticated request carries an HMAC-SHA256 signature computed
//! over a canonical form of its parameters. The canonical form is the
//! parameters sorted by key in ascending byte order, each key concatenated
//! immediately with its value, with no delimiter:
//!
//! ```text
//! { couponId: "C1", apiKey: "K1" }  ->  "apiKeyK1couponIdC1"
//! ```
//!
//! The gateway recomputes the same string on its side, so the two
//! serializations must match byte for byte.
//!
//! ## Example
//!
//! ```rust
//! use flow_core::Params;
//! use flow_signing::Signer;
//!
//! let signer = Signer::new("my-secret");
//!
//! let mut params = Params::new();
//! params.insert("apiKey", "K1");
//! params.insert("couponId", "C1");
//!
//! let signature = signer.sign(&params).unwrap();
//! assert_eq!(signature.len(), 64);
//! ```

pub mod canonical;
pub mod error;
pub mod signer;

pub use canonical::canonical_string;
pub use error::SigningError;
pub use signer::Signer;
