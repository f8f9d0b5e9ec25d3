use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid name (letters only): {0}")]
    InvalidName(String),
    #[error("invalid phone (exactly 10 digits): {0}")]
    InvalidPhone(String),
    #[error("invalid date format, use DD.MM.YYYY: {0}")]
    InvalidBirthday(String),
    #[error("phone not found: {0}")]
    PhoneNotFound(String),
    #[error("invalid upcoming-days window: {0}")]
    InvalidWithinDays(i64),
}
