//! Request parameter model.
//!
//! Every gateway operation builds a [`Params`] value, which is the single
//! shared construction step behind both canonicalization (signing) and wire
//! encoding. Keys iterate in ascending byte order by construction, and
//! absent optional values are omitted entirely rather than serialized as
//! empty strings, so the signer and the encoder can never disagree about
//! which entries exist.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A scalar parameter value, coerced to its wire string form.
///
/// Floats are deliberately not representable: their string form is
/// ambiguous (precision, locale, scientific notation) and any mismatch with
/// the gateway silently invalidates every signature. Integral amounts use
/// standard decimal formatting; callers with fractional values must pass a
/// pre-formatted string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::UInt(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::UInt(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::UInt(value as u64)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// An ordered set of request parameters.
///
/// Backed by a `BTreeMap`, so iteration order is ascending byte-wise key
/// order regardless of insertion order. Two sets with identical key/value
/// content are equal and canonicalize identically.
///
/// # Example
///
/// ```rust
/// use flow_core::Params;
///
/// let mut params = Params::new();
/// params.insert("couponId", "C1");
/// params.insert("apiKey", "K1");
///
/// let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, vec!["apiKey", "couponId"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<String, String>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, coercing the value to its string form.
    ///
    /// Inserting an existing key replaces its value; keys are always unique.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.entries.insert(key.into(), value.into().to_string());
        self
    }

    /// Insert a parameter only if the value is present.
    ///
    /// `None` omits the key entirely. The omission happens here, in the one
    /// place both the signer and the encoder read from, so an absent value
    /// can never be signed as one thing and sent as another.
    pub fn insert_opt<V: Into<ParamValue>>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Insert a structured value as its JSON string form.
    ///
    /// Batch operations carry row lists as a single JSON-encoded parameter;
    /// the signature is computed over that string, so serialization happens
    /// once, before signing.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json::Error` if serialization fails.
    pub fn insert_json<T: Serialize>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<&mut Self, serde_json::Error> {
        let encoded = serde_json::to_string(value)?;
        self.entries.insert(key.into(), encoded);
        Ok(self)
    }

    /// Look up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the set contains `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending byte-wise key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_iteration_sorted_by_bytes() {
        let mut params = Params::new();
        params.insert("zebra", "1");
        params.insert("apple", "2");
        params.insert("Mango", "3"); // uppercase sorts before lowercase

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Mango", "apple", "zebra"]);
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let mut a = Params::new();
        a.insert("b", "2");
        a.insert("a", "1");

        let mut b = Params::new();
        b.insert("a", "1");
        b.insert("b", "2");

        assert_eq!(a, b);
    }

    #[test]
    fn test_numeric_coercion() {
        let mut params = Params::new();
        params.insert("amount", 5000_i64);
        params.insert("limit", 10_u32);
        assert_eq!(params.get("amount"), Some("5000"));
        assert_eq!(params.get("limit"), Some("10"));
    }

    #[test]
    fn test_bool_coercion() {
        let mut params = Params::new();
        params.insert("active", true);
        assert_eq!(params.get("active"), Some("true"));
    }

    #[test]
    fn test_insert_opt_none_omits_key() {
        let mut params = Params::new();
        params.insert_opt("filter", None::<&str>);
        params.insert_opt("limit", Some(10_u32));

        assert!(!params.contains_key("filter"));
        assert_eq!(params.get("limit"), Some("10"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_replaces() {
        let mut params = Params::new();
        params.insert("status", "1");
        params.insert("status", "2");
        assert_eq!(params.get("status"), Some("2"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_insert_json() {
        #[derive(Serialize)]
        struct Row {
            id: u32,
            name: String,
        }

        let rows = vec![
            Row {
                id: 1,
                name: "one".to_string(),
            },
            Row {
                id: 2,
                name: "two".to_string(),
            },
        ];

        let mut params = Params::new();
        params.insert_json("batchRows", &rows).unwrap();
        assert_eq!(
            params.get("batchRows"),
            Some(r#"[{"id":1,"name":"one"},{"id":2,"name":"two"}]"#)
        );
    }

    #[test]
    fn test_from_iterator() {
        let params: Params = [("b", "2"), ("a", "1")].into_iter().collect();
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
