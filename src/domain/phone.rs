//! PhoneNumber value object and phone formatting.

use super::errors::ValidationError;
use super::whitespace::is_form_whitespace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ten or eleven ASCII digits: area code plus an 8 or 9 digit subscriber number.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]{10}|[0-9]{11})$").expect("phone pattern is a valid regex")
});

/// Number of leading digits that form the area code.
const AREA_CODE_LEN: usize = 2;

/// Remove every whitespace character (see [`is_form_whitespace`]).
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| !is_form_whitespace(*c)).collect()
}

/// Whether `raw` normalizes to exactly 10 or 11 digits.
pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_RE.is_match(&normalize_phone(raw))
}

/// Split a normalized phone into area code and subscriber number.
fn split_area_code(normalized: &str) -> (&str, &str) {
    let cut = normalized
        .char_indices()
        .nth(AREA_CODE_LEN)
        .map(|(idx, _)| idx)
        .unwrap_or(normalized.len());
    normalized.split_at(cut)
}

/// Format a phone for read-only display: `(AA) NNNN-NNNN` or `(AA) NNNNN-NNNN`.
///
/// Subscriber numbers that are neither 8 nor 9 characters long are passed
/// through without a hyphen.
///
/// ```
/// use contatos_mcp_server::domain::phone::to_human_phone;
///
/// assert_eq!(to_human_phone("11987654321"), "(11) 98765-4321");
/// assert_eq!(to_human_phone("11 8765 4321"), "(11) 8765-4321");
/// ```
pub fn to_human_phone(raw: &str) -> String {
    let normalized = normalize_phone(raw);
    let (area_code, subscriber) = split_area_code(&normalized);

    let hyphen_at = match subscriber.chars().count() {
        8 => Some(4),
        9 => Some(5),
        _ => None,
    };

    let subscriber = match hyphen_at {
        Some(n) => {
            // Only reached for 8/9 character subscribers, so `n` is in range.
            let cut = subscriber
                .char_indices()
                .nth(n)
                .map(|(idx, _)| idx)
                .unwrap_or(subscriber.len());
            let (head, tail) = subscriber.split_at(cut);
            format!("{}-{}", head, tail)
        }
        None => subscriber.to_string(),
    };

    format!("({}) {}", area_code, subscriber)
}

/// A type-safe wrapper for phone numbers.
///
/// Holds the normalized digits of a number that passed validation.
///
/// # Example
///
/// ```
/// use contatos_mcp_server::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("11 98765 4321").unwrap();
/// assert_eq!(phone.as_str(), "11987654321");
/// assert_eq!(phone.area_code(), "11");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Whitespace anywhere is ignored
    /// - The remaining characters must be exactly 10 or 11 ASCII digits
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let normalized = normalize_phone(&phone);

        if !PHONE_RE.is_match(&normalized) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(normalized))
    }

    /// Get the normalized digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The two digit area code.
    pub fn area_code(&self) -> &str {
        split_area_code(&self.0).0
    }

    /// The 8 or 9 digit subscriber number.
    pub fn subscriber(&self) -> &str {
        split_area_code(&self.0).1
    }

    /// Display form, see [`to_human_phone`].
    pub fn to_human(&self) -> String {
        to_human_phone(&self.0)
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
