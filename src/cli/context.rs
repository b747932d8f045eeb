use std::io::{self, Write};
use std::str::FromStr;

use crate::error::MeetError;
use crate::model::Person;
use crate::ops::meeting_ops::MeetingManager;
use crate::validation;

pub struct CLIContext {
    pub manager: MeetingManager,
}

impl CLIContext {
    pub fn new(manager: MeetingManager) -> Self {
        Self { manager }
    }

    pub fn current_person(&self) -> &Person {
        self.manager.current_person()
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        Self::read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Keep asking until a non-blank answer is given.
    pub fn prompt_required(prompt: &str, field: &str) -> Option<String> {
        loop {
            let answer = Self::read_line(prompt)?;
            match validation::non_blank(&answer, field) {
                Ok(value) => return Some(value),
                Err(e) => println!("Invalid input ({}). Please try again!", e),
            }
        }
    }

    /// Keep asking until the answer parses as `T`.
    pub fn prompt_parsed<T>(&self, prompt: &str) -> Option<T>
    where
        T: FromStr<Err = MeetError>,
    {
        self.prompt_with(prompt, |s| s.parse())
    }

    /// Keep asking until `parse` accepts the trimmed answer.
    pub fn prompt_with<T, F>(&self, prompt: &str, parse: F) -> Option<T>
    where
        F: Fn(&str) -> Result<T, MeetError>,
    {
        loop {
            let answer = self.prompt(prompt)?;
            match parse(&answer) {
                Ok(value) => return Some(value),
                Err(e) => println!("Invalid input ({}). Please try again!", e),
            }
        }
    }

    /// Ask for a first and last name.
    pub fn prompt_person(&self, role: &str) -> Option<Person> {
        let first = Self::prompt_required(&format!("First name of {}: ", role), "first name")?;
        let last = Self::prompt_required(&format!("Last name of {}: ", role), "last name")?;
        Some(Person::new(first, last))
    }

    /// Print a rejection or failure.
    pub fn print_error(&self, e: &MeetError) {
        println!("Error: {}", e);
    }
}
