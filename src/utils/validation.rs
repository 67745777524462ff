use crate::utils::error::{PwgenError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a non-negative integer literal made only of ASCII digits.
///
/// Signs, whitespace, separators and empty input are rejected, as are
/// literals that do not fit in `usize`.
pub fn parse_digits(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(PwgenError::InvalidRequestError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(PwgenError::InvalidRequestError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("4"), Some(4));
        assert_eq!(parse_digits("0"), Some(0));
        assert_eq!(parse_digits("0012"), Some(12));
        assert_eq!(parse_digits(""), None);
        assert_eq!(parse_digits("-5"), None);
        assert_eq!(parse_digits("+5"), None);
        assert_eq!(parse_digits("1.5"), None);
        assert_eq!(parse_digits("1 2"), None);
        assert_eq!(parse_digits("ten"), None);
        assert_eq!(parse_digits("٣"), None);
    }

    #[test]
    fn test_parse_digits_overflow_is_rejected() {
        assert_eq!(parse_digits("99999999999999999999999999999"), None);
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("length", 4, 4).is_ok());
        assert!(validate_positive_number("length", 3, 4).is_err());
        assert!(validate_positive_number("count", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("pool", &b"ab"[..]).is_ok());
        assert!(validate_non_empty::<u8>("pool", &[]).is_err());
    }
}
