//! Interactive command loop.
//!
//! Thin dispatch glue around the command operations: reads lines from
//! stdin, splits them into a verb and arguments, runs the matching
//! operation, and renders success messages and errors as user-facing
//! text. The book is loaded once at startup and saved on exit.

use crate::commands;
use crate::config::Config;
use crate::error::{CommandError, CommandResult};
use crate::storage;
use chrono::Local;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Split an input line into a lowercased verb and its arguments.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?.trim().to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((verb, args))
}

/// Map a command error to the text shown to the user.
///
/// This is the only place errors become strings; the operations
/// themselves never print.
pub fn render_error(err: &CommandError) -> String {
    match err {
        CommandError::Validation(e) => format!("{}, try again", e),
        CommandError::ContactNotFound(_) => {
            "This contact does not exist or phonebook is empty.".to_string()
        }
        CommandError::PhoneNotFound(phone) => {
            format!("Phone number {} not found for this contact.", phone)
        }
        CommandError::MissingArgument(what) => format!("Invalid input: missing {}.", what),
    }
}

fn report(result: CommandResult<String>) {
    match result {
        Ok(message) => println!("{}", message),
        Err(err) => println!("{}", render_error(&err)),
    }
}

/// Run the assistant until `close`, `exit`, or end of input.
///
/// The book file is held only for the duration of the load and the final
/// save; the in-memory book is the single source of truth in between.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut book = storage::load(&config.book_path)?;
    info!("Loaded {} contacts", book.len());

    println!("Welcome to the assistant bot!");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input counts as a clean shutdown.
            break;
        }

        let Some((verb, args)) = parse_input(&line) else {
            continue;
        };

        match verb.as_str() {
            "close" | "exit" => {
                println!("Good bye!");
                break;
            }
            "hello" => println!("How can I help you?"),
            "add" => report(commands::add_contact(&args, &mut book)),
            "change" => report(commands::change_contact(&args, &mut book)),
            "phone" => report(commands::show_phones(&args, &book)),
            "all" => report(commands::show_all(&book)),
            "add-birthday" => report(commands::add_birthday(&args, &mut book)),
            "show-birthday" => report(commands::show_birthday(&args, &book)),
            "birthdays" => report(commands::birthdays(
                &book,
                Local::now().date_naive(),
                config.horizon_days,
            )),
            _ => println!("Invalid command."),
        }
    }

    storage::save(&config.book_path, &book)?;
    info!("Saved {} contacts", book.len());
    Ok(())
}
