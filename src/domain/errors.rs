//! Domain validation errors.

use std::fmt;

/// Reasons a contact field fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty.
    MissingField(&'static str),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Field '{}' is required", field),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number (expected 10 or 11 digits): {}", phone)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::MissingField("nome").to_string(),
            "Field 'nome' is required"
        );
        assert_eq!(
            ValidationError::InvalidEmail("x".to_string()).to_string(),
            "Invalid email address: x"
        );
        assert!(ValidationError::InvalidPhone("123".to_string())
            .to_string()
            .contains("10 or 11 digits"));
    }
}
