pub mod upcoming;

pub use upcoming::{
    next_occurrence, roll_forward_weekend, upcoming_birthdays, validate_within_days,
    BirthdayReminder, DEFAULT_WITHIN_DAYS, MAX_WITHIN_DAYS,
};
