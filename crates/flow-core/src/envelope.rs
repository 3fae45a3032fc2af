//! List response envelope and shared paging filter.

use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Envelope returned by every list-style endpoint.
///
/// Carries pagination metadata alongside the items; server-provided item
/// order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListEnvelope<T> {
    pub total: u64,

    #[serde(rename = "hasMore")]
    pub has_more: bool,

    pub data: Vec<T>,
}

/// Common filter accepted by list endpoints.
///
/// All fields are optional; absent fields are omitted from the request
/// entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
}

impl ListFilter {
    /// Write the present fields into a parameter set.
    pub fn apply(&self, params: &mut Params) {
        params.insert_opt("start", self.start);
        params.insert_opt("limit", self.limit);
        params.insert_opt("filter", self.filter.clone());
        params.insert_opt("status", self.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_envelope_deserializes() {
        let json = r#"{"total": 2, "hasMore": false, "data": ["a", "b"]}"#;
        let envelope: ListEnvelope<String> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.total, 2);
        assert!(!envelope.has_more);
        assert_eq!(envelope.data, vec!["a", "b"]);
    }

    #[test]
    fn test_envelope_preserves_order() {
        let json = r#"{"total": 3, "hasMore": true, "data": [3, 1, 2]}"#;
        let envelope: ListEnvelope<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data, vec![3, 1, 2]);
    }

    #[test]
    fn test_filter_apply_omits_absent() {
        let filter = ListFilter {
            start: Some(5),
            limit: None,
            filter: Some("gold".to_string()),
            status: None,
        };

        let mut params = Params::new();
        filter.apply(&mut params);

        assert_eq!(params.get("start"), Some("5"));
        assert_eq!(params.get("filter"), Some("gold"));
        assert!(!params.contains_key("limit"));
        assert!(!params.contains_key("status"));
    }

    #[test]
    fn test_default_filter_is_empty() {
        let mut params = Params::new();
        ListFilter::default().apply(&mut params);
        assert!(params.is_empty());
    }
}
