use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Birthday, parsed from and rendered as DD.MM.YYYY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map(Birthday)
            .map_err(|_| CoreError::InvalidBirthday(raw.to_string()))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Birthday::parse(raw)
    }
}

impl TryFrom<String> for Birthday {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Birthday::parse(&raw)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}
