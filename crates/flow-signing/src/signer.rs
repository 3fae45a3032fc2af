//! HMAC-SHA256 request signing.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use flow_core::Params;

use crate::canonical::canonical_string;
use crate::error::SigningError;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer for gateway requests.
///
/// Signs exactly the parameters it is given: it never injects the API key
/// or the signature field itself, because call sites differ on whether the
/// key is part of the signed set and the digest changes either way.
///
/// Pure and stateless; safe to share across concurrent requests.
///
/// # Example
///
/// ```rust
/// use flow_core::Params;
/// use flow_signing::Signer;
///
/// let signer = Signer::new("S");
///
/// let mut params = Params::new();
/// params.insert("couponId", "C1");
/// params.insert("apiKey", "K1");
///
/// let signature = signer.sign(&params).unwrap();
/// assert_eq!(
///     signature,
///     "2e32c3caee2ca45d79245784ece7995d4f677b84d303e0aa84c7ca100079399c"
/// );
/// ```
#[derive(Clone)]
pub struct Signer {
    secret: String,
}

impl Signer {
    /// Create a signer from a secret key.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Sign a parameter set.
    ///
    /// Canonicalizes the parameters, then computes HMAC-SHA256 over the
    /// canonical string with the secret as key. Returns the lowercase hex
    /// digest (64 characters).
    ///
    /// # Errors
    ///
    /// Returns `SigningError::EmptySecret` if the secret is empty.
    pub fn sign(&self, params: &Params) -> Result<String, SigningError> {
        if self.secret.is_empty() {
            return Err(SigningError::EmptySecret);
        }

        let message = canonical_string(params);
        Ok(self.digest(&message))
    }

    /// Check a signature against a parameter set.
    ///
    /// Used for confirmation callbacks, which the gateway signs with the
    /// same scheme. Comparison is constant-time.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::EmptySecret` if the secret is empty.
    pub fn verify(&self, params: &Params, signature: &str) -> Result<bool, SigningError> {
        let expected = self.sign(params)?;
        Ok(constant_time_eq(&expected, signature))
    }

    fn digest(&self, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
