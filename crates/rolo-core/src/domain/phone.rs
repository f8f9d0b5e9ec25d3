use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PHONE_DIGITS: usize = 10;

/// Phone number, stored as exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.len() != PHONE_DIGITS || !trimmed.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(CoreError::InvalidPhone(raw.to_string()));
        }
        Ok(Phone(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Phone::parse(raw)
    }
}

impl TryFrom<String> for Phone {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Phone::parse(&raw)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

#[cfg(test)]
mod tests {
    use super::Phone;

    #[test]
    fn phone_accepts_ten_digits() {
        let phone = Phone::parse("4155551212").unwrap();
        assert_eq!(phone.as_str(), "4155551212");
    }

    #[test]
    fn phone_trims_surrounding_whitespace() {
        let phone = Phone::parse(" 4155551212 ").unwrap();
        assert_eq!(phone.as_str(), "4155551212");
    }

    #[test]
    fn phone_rejects_wrong_length() {
        assert!(Phone::parse("415555121").is_err());
        assert!(Phone::parse("41555512123").is_err());
        assert!(Phone::parse("").is_err());
    }

    #[test]
    fn phone_rejects_non_digits() {
        assert!(Phone::parse("415555121a").is_err());
        assert!(Phone::parse("415 555 12").is_err());
        assert!(Phone::parse("+415555121").is_err());
    }
}
