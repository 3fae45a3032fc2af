//! Cross-module tests for the parameter model.

use flow_core::{ListFilter, Params};
use pretty_assertions::assert_eq;

#[test]
fn identical_content_yields_identical_sets() {
    let mut a = Params::new();
    a.insert("currency", "CLP");
    a.insert("amount", 1500_i64);
    a.insert("apiKey", "K1");

    let mut b = Params::new();
    b.insert("apiKey", "K1");
    b.insert("amount", "1500");
    b.insert("currency", "CLP");

    // Coercion happens at insertion, so an i64 and its decimal string
    // produce the same entry.
    assert_eq!(a, b);
}

#[test]
fn filter_round_trips_through_params() {
    let filter = ListFilter {
        start: Some(0),
        limit: Some(25),
        filter: None,
        status: Some(1),
    };

    let mut params = Params::new();
    params.insert("planId", "plan-gold");
    filter.apply(&mut params);

    let pairs: Vec<(&str, &str)> = params.iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("limit", "25"),
            ("planId", "plan-gold"),
            ("start", "0"),
            ("status", "1"),
        ]
    );
}

#[test]
fn structured_field_is_a_single_scalar_entry() {
    let rows = serde_json::json!([{"a": 1}, {"a": 2}]);

    let mut params = Params::new();
    params.insert_json("batchRows", &rows).unwrap();

    assert_eq!(params.len(), 1);
    assert_eq!(params.get("batchRows"), Some(r#"[{"a":1},{"a":2}]"#));
}
