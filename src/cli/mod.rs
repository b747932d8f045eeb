pub mod context;
pub mod meeting_commands;

use std::path::Path;

use crate::db::MeetingRepo;
use crate::model::Person;
use crate::ops::meeting_ops::MeetingManager;
use context::CLIContext;

/// Run the interactive loop against the data file at `path`.
pub fn run(path: &Path) {
    let repo = match MeetingRepo::open(path) {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!("Error loading meetings: {}", e);
            return;
        }
    };

    let person = match login() {
        Some(p) => p,
        None => return,
    };

    let mut ctx = CLIContext::new(MeetingManager::new(repo, person));
    print_welcome(ctx.current_person());
    repl_loop(&mut ctx);
}

fn login() -> Option<Person> {
    println!("To use this application, you must login first!");
    println!();
    let first = CLIContext::prompt_required("First name: ", "first name")?;
    let last = CLIContext::prompt_required("Last name: ", "last name")?;
    Some(Person::new(first, last))
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match CLIContext::read_line("Type in the operation: ") {
            Some(s) => s,
            None => break,
        };

        let command = input.trim().to_lowercase();
        if command.is_empty() {
            continue;
        }

        match command.as_str() {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,
            "create" => meeting_commands::create(ctx),
            "delete" => meeting_commands::delete(ctx),
            "list" | "ls" => meeting_commands::list(ctx),
            "add person" | "add-person" => meeting_commands::add_person(ctx),
            "remove person" | "remove-person" => meeting_commands::remove_person(ctx),
            _ => println!("Unrecognized command. Type 'help' for commands."),
        }
    }
}

fn print_welcome(person: &Person) {
    println!("-------------------------------------------------------------------");
    println!(
        "Welcome to the meeting management application, {}!",
        person.first_name
    );
    print_help();
    println!("-------------------------------------------------------------------");
}

fn print_help() {
    println!(r#"Choose one of the following operations:
  create          create a meeting with you as the responsible person
  delete          delete a meeting you are responsible for
  list            view meetings, optionally filtered
  add person      add an attendee to a meeting
  remove person   remove an attendee from a meeting
  help            show this help
  quit            quit this program"#);
}
