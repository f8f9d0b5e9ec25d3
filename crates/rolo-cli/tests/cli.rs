use assert_cmd::Command;
use chrono::{Datelike, Days, Local};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_script(temp: &TempDir, book_path: &Path, script: &str) -> String {
    let output = Command::cargo_bin("rolo")
        .expect("binary")
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .args(["--book-path", book_path.to_str().expect("book path")])
        .write_stdin(script.to_string())
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

#[test]
fn add_show_and_persist_across_sessions() {
    let temp = TempDir::new().expect("temp dir");
    let book_path = temp.path().join("addressbook.json");

    let out = run_script(
        &temp,
        &book_path,
        "hello\nadd Bob 1234567890\nadd Bob 0987654321\nall\nexit\n",
    );
    assert!(out.contains("Welcome to the assistant bot!"));
    assert!(out.contains("How can I help you?"));
    assert!(out.contains("Contact added."));
    assert!(out.contains("Contact updated."));
    assert!(out.contains("Contact name: Bob, phones: 1234567890; 0987654321"));
    assert!(out.contains("Goodbye!"));

    // A fresh session sees the persisted book.
    let out = run_script(&temp, &book_path, "phone Bob\nclose\n");
    assert!(out.contains("1234567890; 0987654321"));

    let raw = fs::read_to_string(&book_path).expect("book file");
    let value: Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value["version"], 1);
    assert_eq!(value["contacts"].as_array().expect("contacts").len(), 1);
}

#[test]
fn invalid_phone_never_creates_a_contact() {
    let temp = TempDir::new().expect("temp dir");
    let book_path = temp.path().join("addressbook.json");

    let out = run_script(&temp, &book_path, "add Bob 123\nall\nbb\n");
    assert!(out.contains("invalid phone"));
    assert!(out.contains("There are no contacts, wanna add some?"));
}

#[test]
fn change_substitutes_a_single_phone() {
    let temp = TempDir::new().expect("temp dir");
    let book_path = temp.path().join("addressbook.json");

    let out = run_script(
        &temp,
        &book_path,
        "add Bob 1234567890\nchange Bob 5555555555\nphone Bob\nexit\n",
    );
    assert!(out.contains("Number 1234567890 was replaced with 5555555555."));
    assert!(out.contains("Contact name: Bob, phones: 5555555555"));
}

#[test]
fn delete_reports_missing_contact() {
    let temp = TempDir::new().expect("temp dir");
    let book_path = temp.path().join("addressbook.json");

    let out = run_script(&temp, &book_path, "delete Ghost\nexit\n");
    assert!(out.contains("Ghost does not exist"));
}

#[test]
fn unrecognized_input_is_invalid_command() {
    let temp = TempDir::new().expect("temp dir");
    let book_path = temp.path().join("addressbook.json");

    let out = run_script(&temp, &book_path, "frobnicate now\nexit\n");
    assert!(out.contains("Invalid command."));
}

#[test]
fn birthday_commands_round_trip() {
    let temp = TempDir::new().expect("temp dir");
    let book_path = temp.path().join("addressbook.json");

    // A birthday one day out is always inside the default window. Leap day
    // would not parse with a 1990 year, so it slides to March 1.
    let tomorrow = Local::now().date_naive() + Days::new(1);
    let (day, month) = if tomorrow.month() == 2 && tomorrow.day() == 29 {
        (1, 3)
    } else {
        (tomorrow.day(), tomorrow.month())
    };
    let birthday = format!("{day:02}.{month:02}.1990");

    let script = format!(
        "add Bob 1234567890\nadd-birthday Bob {birthday}\nshow-birthday Bob\nbirthdays\nexit\n"
    );
    let out = run_script(&temp, &book_path, &script);
    assert!(out.contains(&format!("The birthday of Bob is {birthday}")));
    assert!(out.contains("Bob: "));
}

#[test]
fn eof_saves_and_exits_cleanly() {
    let temp = TempDir::new().expect("temp dir");
    let book_path = temp.path().join("addressbook.json");

    let out = run_script(&temp, &book_path, "add Bob 1234567890\n");
    assert!(out.contains("Goodbye!"));
    assert!(book_path.exists());
}
