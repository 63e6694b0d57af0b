use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of digits in a valid phone number.
pub const PHONE_DIGITS: usize = 10;

/// Returns true if `phone` is exactly ten ASCII digits with nothing else.
/// Formatting characters (spaces, dashes, parentheses, `+`) are rejected, not stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// A customer phone number that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(input: &str) -> Result<Self, InvalidPhoneError> {
        if is_valid_phone(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(InvalidPhoneError)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = InvalidPhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_phone(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidPhoneError)
        }
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPhoneError;

impl fmt::Display for InvalidPhoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "phone number must be {} digits", PHONE_DIGITS)
    }
}

impl std::error::Error for InvalidPhoneError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ten_digits() {
        assert!(is_valid_phone("7051234567"));
        assert!(is_valid_phone("0000000000"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("705123456"));
        assert!(!is_valid_phone("70512345678"));
    }

    #[test]
    fn test_rejects_formatting_characters() {
        assert!(!is_valid_phone("(705)123456"));
        assert!(!is_valid_phone("705-123-4567"));
        assert!(!is_valid_phone("705 123 456"));
        assert!(!is_valid_phone("+705123456"));
        assert!(!is_valid_phone(" 7051234567"));
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(!is_valid_phone("٧٠٥١٢٣٤٥٦٧"));
    }

    #[test]
    fn test_parse_phone_number() {
        let phone = PhoneNumber::parse("7051234567").unwrap();
        assert_eq!(phone.as_str(), "7051234567");
        assert_eq!(phone.to_string(), "7051234567");
        assert_eq!(PhoneNumber::parse("705-1234567"), Err(InvalidPhoneError));
    }

    #[test]
    fn test_deserialize_rejects_invalid_phone() {
        let ok: Result<PhoneNumber, _> = serde_json::from_str("\"7051234567\"");
        assert!(ok.is_ok());
        let bad: Result<PhoneNumber, _> = serde_json::from_str("\"12345\"");
        assert!(bad.is_err());
    }
}
