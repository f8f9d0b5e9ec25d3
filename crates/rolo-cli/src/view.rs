use std::io::{self, Write};

/// Output contract for the REPL. The dispatcher only talks to the user
/// through this trait; the binary ships exactly one console implementation,
/// and any other front end provides its own.
pub trait View {
    fn show(&mut self, message: &str);
    fn prompt(&mut self, message: &str);
}

pub struct ConsoleView;

impl View for ConsoleView {
    fn show(&mut self, message: &str) {
        println!("{message}");
    }

    fn prompt(&mut self, message: &str) {
        print!("{message}");
        let _ = io::stdout().flush();
    }
}
