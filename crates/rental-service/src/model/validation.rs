//! Field checks shared by the create and update paths of every store.
//!
//! Lengths are counted in characters, not bytes.

use thiserror::Error;

/// A field that failed its schema bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Checks that `value` holds between `min` and `max` characters, inclusive.
pub fn text_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min {
        return Err(ValidationError::new(
            field,
            format!("must be at least {min} characters, got {len}"),
        ));
    }
    if len > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max} characters, got {len}"),
        ));
    }
    Ok(())
}

/// Checks that `value` is a finite number within `[min, max]`.
pub fn number_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(field, "must be a finite number"));
    }
    if value < min || value > max {
        return Err(ValidationError::new(
            field,
            format!("must be between {min} and {max}, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_length_is_inclusive_and_counts_chars() {
        assert!(text_length("name", "abc", 3, 5).is_ok());
        assert!(text_length("name", "abcde", 3, 5).is_ok());
        assert!(text_length("name", "ab", 3, 5).is_err());
        assert!(text_length("name", "abcdef", 3, 5).is_err());
        // four characters, eight bytes
        assert!(text_length("name", "ÅÄÖÜ", 3, 4).is_ok());
    }

    #[test]
    fn number_range_rejects_nan_and_out_of_bounds() {
        assert!(number_range("rate", 0.0, 0.0, 255.0).is_ok());
        assert!(number_range("rate", 255.0, 0.0, 255.0).is_ok());
        assert!(number_range("rate", -0.5, 0.0, 255.0).is_err());
        assert!(number_range("rate", 255.5, 0.0, 255.0).is_err());
        assert!(number_range("rate", f64::NAN, 0.0, 255.0).is_err());
    }

    #[test]
    fn error_names_the_field() {
        let err = text_length("phone", "1", 5, 50).unwrap_err();
        assert_eq!(err.field, "phone");
        assert!(err.to_string().starts_with("invalid phone"));
    }
}
