//! Conformance tests for canonicalization and signing.
//!
//! Digests here were computed independently with a reference HMAC-SHA256
//! implementation over the documented canonical form.

use flow_core::Params;
use flow_signing::{canonical_string, Signer};
use pretty_assertions::assert_eq;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchRow {
    customer_id: String,
    commerce_order: String,
    subject: String,
    amount: i64,
}

fn batch_rows() -> Vec<BatchRow> {
    vec![
        BatchRow {
            customer_id: "cus_001".to_string(),
            commerce_order: "ord-1".to_string(),
            subject: "monthly".to_string(),
            amount: 1000,
        },
        BatchRow {
            customer_id: "cus_002".to_string(),
            commerce_order: "ord-2".to_string(),
            subject: "monthly".to_string(),
            amount: 2500,
        },
    ]
}

#[test]
fn customer_get_vector() {
    let signer = Signer::new("test-secret");

    let mut params = Params::new();
    params.insert("customerId", "cus_001");
    params.insert("apiKey", "test-key");

    assert_eq!(
        canonical_string(&params),
        "apiKeytest-keycustomerIdcus_001"
    );
    assert_eq!(
        signer.sign(&params).unwrap(),
        "bf13186a4eaa07e818af26cffbcd137ea66b1e84c7b65ca53266aa5c686cccf4"
    );
}

#[test]
fn plan_create_vector() {
    let signer = Signer::new("my-secret");

    let mut params = Params::new();
    params.insert("planId", "plan-gold");
    params.insert("amount", 5000_i64);
    params.insert("urlCallback", "https://example.com/hook");
    params.insert("apiKey", "api-key-1");

    assert_eq!(
        canonical_string(&params),
        "amount5000apiKeyapi-key-1planIdplan-goldurlCallbackhttps://example.com/hook"
    );
    assert_eq!(
        signer.sign(&params).unwrap(),
        "e30a3555ba466dc91333fcc2cbee26cd3de42ddb8ca18745196d1d5593e78612"
    );
}

#[test]
fn batch_rows_signed_over_json_string() {
    let signer = Signer::new("test-secret");

    let mut params = Params::new();
    params.insert("apiKey", "test-key");
    params.insert_json("batchRows", &batch_rows()).unwrap();

    assert_eq!(
        signer.sign(&params).unwrap(),
        "c2683aae4e1dd2988393ca24515ff399b56eac2895f3a8e6071182f782f1cb1a"
    );
}

#[test]
fn batch_row_order_changes_signature() {
    let signer = Signer::new("test-secret");

    let rows = batch_rows();
    let swapped: Vec<&BatchRow> = vec![&rows[1], &rows[0]];

    let mut params = Params::new();
    params.insert("apiKey", "test-key");
    params.insert_json("batchRows", &swapped).unwrap();

    // Reversed row order: the JSON string differs, so the digest differs.
    assert_eq!(
        signer.sign(&params).unwrap(),
        "2610bc603cca3310b6d2953aa74be9ac41e5142ec3289e887c1f4248b42f4576"
    );
}

#[test]
fn construction_order_never_affects_digest() {
    let signer = Signer::new("secret");

    let forward: Params = [
        ("amount", "1500"),
        ("apiKey", "K1"),
        ("commerceOrder", "o-1"),
        ("currency", "CLP"),
        ("subject", "test"),
    ]
    .into_iter()
    .collect();

    let reversed: Params = [
        ("subject", "test"),
        ("currency", "CLP"),
        ("commerceOrder", "o-1"),
        ("apiKey", "K1"),
        ("amount", "1500"),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        signer.sign(&forward).unwrap(),
        signer.sign(&reversed).unwrap()
    );
}

#[test]
fn representative_pairs_never_collide() {
    // Injectivity fixtures: nearby parameter sets must canonicalize apart.
    let cases = [
        (("couponId", "C1"), ("couponId", "C2")),
        (("key", "1"), ("key", "10")),
        (("start", "1"), ("limit", "1")),
    ];

    for ((k1, v1), (k2, v2)) in cases {
        let mut a = Params::new();
        a.insert(k1, v1);
        let mut b = Params::new();
        b.insert(k2, v2);
        assert_ne!(
            canonical_string(&a),
            canonical_string(&b),
            "{}{} vs {}{}",
            k1,
            v1,
            k2,
            v2
        );
    }
}
