use crate::domain::{AddressBook, Birthday, Name};
use crate::error::CoreError;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

pub const DEFAULT_WITHIN_DAYS: i64 = 7;
pub const MAX_WITHIN_DAYS: i64 = 366;

/// A birthday falling inside the reminder window, with the date already
/// rolled forward off the weekend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayReminder {
    pub name: Name,
    pub remind_on: NaiveDate,
}

pub fn validate_within_days(days: i64) -> Result<i64, CoreError> {
    if (1..=MAX_WITHIN_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(CoreError::InvalidWithinDays(days))
    }
}

/// Collects every record whose birthday occurs within `within_days` of
/// `today`, sorted by name. The caller supplies the clock.
pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    within_days: i64,
) -> Vec<BirthdayReminder> {
    let mut reminders = Vec::new();
    for record in book.iter() {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let Some(occurrence) = next_occurrence(today, birthday) else {
            continue;
        };
        if occurrence.signed_duration_since(today).num_days() > within_days {
            continue;
        }
        reminders.push(BirthdayReminder {
            name: record.name().clone(),
            remind_on: roll_forward_weekend(occurrence),
        });
    }
    reminders
}

/// This year's occurrence of the birthday if it has not passed yet,
/// otherwise next year's. A Feb 29 birthday clamps to Feb 28 in non-leap
/// candidate years.
pub fn next_occurrence(today: NaiveDate, birthday: Birthday) -> Option<NaiveDate> {
    let occurrence = occurrence_in_year(today.year(), birthday.month(), birthday.day())?;
    if occurrence < today {
        occurrence_in_year(today.year() + 1, birthday.month(), birthday.day())
    } else {
        Some(occurrence)
    }
}

/// Saturday occurrences shift to the following Monday, Sunday occurrences
/// to the next day; weekdays pass through unchanged.
pub fn roll_forward_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}

fn occurrence_in_year(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if month == 2 && day == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}
