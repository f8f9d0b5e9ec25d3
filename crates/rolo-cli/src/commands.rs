use chrono::Local;
use rolo_core::domain::{Birthday, Name, Phone, Record, DATE_FORMAT};
use rolo_core::error::CoreError;
use rolo_core::rules::upcoming_birthdays;
use rolo_core::AddressBook;
use std::io::{self, Write};
use thiserror::Error;

/// Everything a command can go wrong with. Each variant's message is the
/// reply shown to the user; nothing here ever aborts the session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Give me name and phone please.")]
    MalformedInput,
    #[error("No person under such name/nickname")]
    UnknownName,
    #[error("No contacts saved. First you need to add at least one contact")]
    EmptyBook,
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Picks which of a record's phones `change` should edit. Injected so the
/// dispatch logic stays non-interactive; the console implementation prompts
/// by index.
pub trait PhoneSelector {
    fn pick(&mut self, name: &str, phones: &[Phone]) -> Result<usize, CommandError>;
}

pub struct ConsolePhoneSelector;

impl PhoneSelector for ConsolePhoneSelector {
    fn pick(&mut self, name: &str, phones: &[Phone]) -> Result<usize, CommandError> {
        println!("The contact {name} has the following phones:");
        for (index, phone) in phones.iter().enumerate() {
            println!("{index}: {phone}");
        }
        let choices = (0..phones.len())
            .map(|index| index.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        print!("Choose the number of the phone to edit ({choices}): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .map_err(|err| CommandError::InvalidSelection(err.to_string()))?;
        let raw = line.trim();
        let index: usize = raw
            .parse()
            .map_err(|_| CommandError::InvalidSelection(raw.to_string()))?;
        if index >= phones.len() {
            return Err(CommandError::InvalidSelection(raw.to_string()));
        }
        Ok(index)
    }
}

pub struct Session<'a> {
    pub book: &'a mut AddressBook,
    pub upcoming_days: i64,
}

/// Runs one parsed command against the book. Every error is recovered here
/// and turned into the reply string.
pub fn dispatch(
    session: &mut Session<'_>,
    command: &str,
    args: &[String],
    selector: &mut dyn PhoneSelector,
) -> String {
    let result = match command {
        "add" => add_contact(session, args),
        "change" => change_contact(session, args, selector),
        "delete" => delete_contact(session, args),
        "phone" => show_phone(session, args),
        "all" => show_all(session),
        "add-birthday" => add_birthday(session, args),
        "show-birthday" => show_birthday(session, args),
        "birthdays" => upcoming(session),
        _ => return "Invalid command.".to_string(),
    };
    match result {
        Ok(reply) => reply,
        Err(err) => err.to_string(),
    }
}

fn arg<'a>(args: &'a [String], index: usize) -> Result<&'a str, CommandError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MalformedInput)
}

fn add_contact(session: &mut Session<'_>, args: &[String]) -> Result<String, CommandError> {
    // Validate both fields before touching the book.
    let name = Name::parse(arg(args, 0)?)?;
    let phone = Phone::parse(arg(args, 1)?)?;

    match session.book.find_mut(name.as_str()) {
        Some(record) => {
            record.add_phone(phone);
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(name);
            record.add_phone(phone);
            session.book.upsert(record);
            Ok("Contact added.".to_string())
        }
    }
}

fn change_contact(
    session: &mut Session<'_>,
    args: &[String],
    selector: &mut dyn PhoneSelector,
) -> Result<String, CommandError> {
    let name = arg(args, 0)?.to_string();
    let new = Phone::parse(arg(args, 1)?)?;

    let record = session
        .book
        .find_mut(&name)
        .ok_or(CommandError::UnknownName)?;
    let phones = record.phones();
    let old = match phones.len() {
        0 => return Ok("No phones to edit".to_string()),
        1 => phones[0].as_str().to_string(),
        _ => {
            let index = selector.pick(&name, phones)?;
            phones[index].as_str().to_string()
        }
    };

    let new_display = new.to_string();
    record.edit_phone(&old, new)?;
    Ok(format!(
        "Contact updated. Number {old} was replaced with {new_display}."
    ))
}

fn delete_contact(session: &mut Session<'_>, args: &[String]) -> Result<String, CommandError> {
    let name = arg(args, 0)?;
    match session.book.remove(name) {
        Some(_) => Ok(format!("Contact {name} deleted.")),
        None => Ok(format!("{name} does not exist")),
    }
}

fn show_phone(session: &mut Session<'_>, args: &[String]) -> Result<String, CommandError> {
    let name = arg(args, 0)?;
    let record = session.book.find(name).ok_or(CommandError::UnknownName)?;
    Ok(format_record(record))
}

fn show_all(session: &mut Session<'_>) -> Result<String, CommandError> {
    if session.book.is_empty() {
        return Ok("There are no contacts, wanna add some?".to_string());
    }
    Ok(session
        .book
        .iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn add_birthday(session: &mut Session<'_>, args: &[String]) -> Result<String, CommandError> {
    let name = arg(args, 0)?;
    let birthday = Birthday::parse(arg(args, 1)?)?;
    let record = session
        .book
        .find_mut(name)
        .ok_or(CommandError::UnknownName)?;
    record.set_birthday(birthday);
    Ok(format!("Birthday added for {name}"))
}

fn show_birthday(session: &mut Session<'_>, args: &[String]) -> Result<String, CommandError> {
    let name = arg(args, 0)?;
    let record = session.book.find(name).ok_or(CommandError::UnknownName)?;
    match record.birthday() {
        Some(birthday) => Ok(format!("The birthday of {name} is {birthday}")),
        None => Ok(format!("No birthday information found for {name}")),
    }
}

fn upcoming(session: &mut Session<'_>) -> Result<String, CommandError> {
    if session.book.is_empty() {
        return Err(CommandError::EmptyBook);
    }
    let today = Local::now().date_naive();
    let reminders = upcoming_birthdays(session.book, today, session.upcoming_days);
    if reminders.is_empty() {
        return Ok("No birthdays".to_string());
    }
    Ok(reminders
        .iter()
        .map(|reminder| {
            format!(
                "{}: {}",
                reminder.name,
                reminder.remind_on.format(DATE_FORMAT)
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

fn format_record(record: &Record) -> String {
    let phones = record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join("; ");
    match record.birthday() {
        Some(birthday) => format!(
            "Contact name: {}, phones: {phones}, birthday: {birthday}",
            record.name()
        ),
        None => format!("Contact name: {}, phones: {phones}", record.name()),
    }
}
