//! Parameter validation.
//!
//! Each operation exposes a closed, typed parameter record; these helpers
//! reject bad records at the boundary, before anything is canonicalized or
//! signed.

use thiserror::Error;

/// Errors raised when caller-supplied parameters fail schema constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Field must not be empty: {0}")]
    EmptyField(String),

    #[error("Invalid field value: {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Amount must be positive: {field}")]
    NonPositiveAmount { field: String },
}

/// Require a non-empty string field.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field.to_string()));
    }
    Ok(())
}

/// Require a strictly positive amount.
pub fn require_positive(field: &str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NonPositiveAmount {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Require a value inside an inclusive range.
pub fn require_in_range(field: &str, value: u32, min: u32, max: u32) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Require an absolute http(s) URL.
pub fn require_url(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field.to_string()));
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            reason: "must be an absolute http(s) URL".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("couponId", "C1").is_ok());
        assert!(matches!(
            require_non_empty("couponId", ""),
            Err(ValidationError::EmptyField(_))
        ));
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("amount", 1).is_ok());
        assert!(matches!(
            require_positive("amount", 0),
            Err(ValidationError::NonPositiveAmount { .. })
        ));
        assert!(matches!(
            require_positive("amount", -5),
            Err(ValidationError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn test_require_in_range() {
        assert!(require_in_range("interval", 1, 1, 4).is_ok());
        assert!(require_in_range("interval", 4, 1, 4).is_ok());
        assert!(matches!(
            require_in_range("interval", 5, 1, 4),
            Err(ValidationError::InvalidValue { .. })
        ));
        assert!(matches!(
            require_in_range("interval", 0, 1, 4),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_require_url() {
        assert!(require_url("urlCallback", "https://example.com/hook").is_ok());
        assert!(require_url("urlCallback", "http://example.com/hook").is_ok());
        assert!(matches!(
            require_url("urlCallback", "example.com/hook"),
            Err(ValidationError::InvalidValue { .. })
        ));
        assert!(matches!(
            require_url("urlCallback", ""),
            Err(ValidationError::EmptyField(_))
        ));
    }
}
