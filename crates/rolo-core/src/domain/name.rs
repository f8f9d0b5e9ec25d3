use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Contact name, the unique key of a record. Letters only, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
            return Err(CoreError::InvalidName(raw.to_string()));
        }
        Ok(Name(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Name::parse(raw)
    }
}

impl TryFrom<String> for Name {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Name::parse(&raw)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

// Lets a BTreeMap<Name, _> be probed with a plain &str.
impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}
