use crate::commands::{dispatch, PhoneSelector, Session};
use crate::view::View;
use anyhow::Result;
use std::io;
use tracing::debug;

/// Splits a line into a lowercased command and its arguments. Blank lines
/// parse to `None`.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_ascii_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

/// Reads commands until the user closes the session or stdin hits EOF.
/// Returns cleanly in both cases; the caller saves the book afterwards.
pub fn run(
    session: &mut Session<'_>,
    view: &mut dyn View,
    selector: &mut dyn PhoneSelector,
) -> Result<()> {
    view.show("Welcome to the assistant bot!");
    let mut line = String::new();
    loop {
        view.prompt("Enter a command: ");
        line.clear();
        let read = io::stdin().read_line(&mut line)?;
        if read == 0 {
            // EOF behaves like an explicit close.
            view.show("Goodbye!");
            return Ok(());
        }

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };
        debug!(command = %command, args = args.len(), "dispatch");

        match command.as_str() {
            "close" | "exit" | "bb" => {
                view.show("Goodbye!");
                return Ok(());
            }
            "hello" | "qq" => view.show("How can I help you?"),
            _ => {
                let reply = dispatch(session, &command, &args, selector);
                view.show(&reply);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_input;

    #[test]
    fn parse_input_lowercases_the_command_only() {
        let (command, args) = parse_input("ADD Bob 1234567890").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["Bob".to_string(), "1234567890".to_string()]);
    }

    #[test]
    fn parse_input_collapses_whitespace() {
        let (command, args) = parse_input("  phone   Bob  ").unwrap();
        assert_eq!(command, "phone");
        assert_eq!(args, vec!["Bob".to_string()]);
    }

    #[test]
    fn parse_input_rejects_blank_lines() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \n").is_none());
    }
}
