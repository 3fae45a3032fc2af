//! Canonical parameter serialization.

use flow_core::Params;

/// Serialize a parameter set to its canonical string.
///
/// # Rules
///
/// - Entries ordered by key, ascending byte-wise comparison
/// - Each key concatenated immediately with its value
/// - No delimiter between entries, no percent-encoding
///
/// Values are already string-coerced inside [`Params`], and absent optional
/// parameters were never inserted, so two sets with identical content always
/// produce the identical canonical string regardless of construction order.
///
/// # Example
///
/// ```rust
/// use flow_core::Params;
/// use flow_signing::canonical_string;
///
/// let mut params = Params::new();
/// params.insert("couponId", "C1");
/// params.insert("apiKey", "K1");
///
/// assert_eq!(canonical_string(&params), "apiKeyK1couponIdC1");
/// ```
pub fn canonical_string(params: &Params) -> String {
    let mut out = String::new();
    for (key, value) in params.iter() {
        out.push_str(key);
        out.push_str(value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sorted_concatenation() {
        let mut params = Params::new();
        params.insert("couponId", "C1");
        params.insert("apiKey", "K1");
        assert_eq!(canonical_string(&params), "apiKeyK1couponIdC1");
    }

    #[test]
    fn test_order_independence() {
        let mut a = Params::new();
        a.insert("z", "3");
        a.insert("a", "1");
        a.insert("m", "2");

        let mut b = Params::new();
        b.insert("m", "2");
        b.insert("z", "3");
        b.insert("a", "1");

        assert_eq!(canonical_string(&a), canonical_string(&b));
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(canonical_string(&Params::new()), "");
    }

    #[test]
    fn test_numeric_values_decimal_form() {
        let mut params = Params::new();
        params.insert("amount", 5000_i64);
        params.insert("apiKey", "K1");
        assert_eq!(canonical_string(&params), "amount5000apiKeyK1");
    }

    #[test]
    fn test_omitted_value_absent_from_canonical_form() {
        let mut with = Params::new();
        with.insert("apiKey", "K1");
        with.insert_opt("filter", None::<&str>);

        let mut without = Params::new();
        without.insert("apiKey", "K1");

        assert_eq!(canonical_string(&with), canonical_string(&without));
        assert_eq!(canonical_string(&with), "apiKeyK1");
    }

    #[test]
    fn test_value_change_changes_string() {
        let mut a = Params::new();
        a.insert("apiKey", "K1");
        a.insert("couponId", "C1");

        let mut b = Params::new();
        b.insert("apiKey", "K1");
        b.insert("couponId", "C2");

        assert_ne!(canonical_string(&a), canonical_string(&b));
    }

    #[test]
    fn test_key_change_changes_string() {
        let mut a = Params::new();
        a.insert("apiKey", "K1");
        a.insert("couponId", "C1");

        let mut b = Params::new();
        b.insert("apiKey", "K1");
        b.insert("invoiceId", "C1");

        assert_ne!(canonical_string(&a), canonical_string(&b));
    }

    #[test]
    fn test_unicode_values_pass_through() {
        let mut params = Params::new();
        params.insert("name", "Señor Pérez");
        assert_eq!(canonical_string(&params), "nameSeñor Pérez");
    }
}
