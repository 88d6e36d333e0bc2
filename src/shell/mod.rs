//! Interactive command shell.
//!
//! A thin, synchronous line loop over the address book: it parses one
//! command per line, calls into [`AddressBook`]/[`Record`], and prints the
//! outcome. Every failure is reported and the session continues; nothing in
//! here terminates the process.

use crate::book::AddressBook;
use crate::models::Record;
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use tracing::debug;

const HELP: &str = "\
Commands:
  add <name> [YYYY-MM-DD]            create a contact (birthday optional)
  add-phone <name> <phone>           add a 10-digit phone
  remove-phone <name> <phone>        remove a phone
  edit-phone <name> <old> <new>      replace a phone
  phone <name>                       show a contact
  birthday <name>                    days until next birthday
  delete <name>                      remove a contact
  search <query>                     match names (any case) or phone digits
  show-all [page-size]               list everything, one page per line
  help                               this text
  exit | close                       save and quit";

/// What a single dispatched command produced.
enum Outcome {
    Reply(String),
    Exit,
}

/// Run the command loop until end-of-input or an exit command.
///
/// Reader and writer are generic so tests can drive the shell without a
/// terminal. Saving is the caller's job; the loop only mutates the book.
pub fn run(
    book: &mut AddressBook,
    default_page_size: NonZeroUsize,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    writeln!(output, "rolodex ready, 'help' lists commands")?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(command = line, "dispatching");
        match dispatch(book, default_page_size, line) {
            Outcome::Reply(reply) => writeln!(output, "{reply}")?,
            Outcome::Exit => break,
        }
    }
    Ok(())
}

fn dispatch(book: &mut AddressBook, default_page_size: NonZeroUsize, line: &str) -> Outcome {
    let mut parts = line.split_whitespace();
    // non-empty by the caller's trim check
    let command = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    let reply = match (command, args.as_slice()) {
        ("add", [name]) => add_contact(book, name, None),
        ("add", [name, birthday]) => add_contact(book, name, Some(birthday)),
        ("add-phone", [name, phone]) => with_record(book, name, |record| {
            match record.add_phone(phone) {
                Ok(()) => format!("phone {phone} added"),
                Err(err) => err.to_string(),
            }
        }),
        ("remove-phone", [name, phone]) => with_record(book, name, |record| {
            record.remove_phone(phone);
            format!("phone {phone} removed")
        }),
        ("edit-phone", [name, old, new]) => with_record(book, name, |record| {
            match record.edit_phone(old, new) {
                Ok(()) => format!("phone {old} changed to {new}"),
                Err(err) => err.to_string(),
            }
        }),
        ("phone", [name]) => match book.find(name) {
            Some(record) => record.to_string(),
            None => format!("no contact named {name}"),
        },
        ("birthday", [name]) => match book.find(name) {
            Some(record) => match record.days_to_birthday() {
                Some(days) => format!("{days} day(s) until {name}'s birthday"),
                None => format!("{name} has no birthday set"),
            },
            None => format!("no contact named {name}"),
        },
        ("delete", [name]) => {
            if book.delete(name) {
                format!("{name} deleted")
            } else {
                format!("no contact named {name}")
            }
        }
        ("search", [query]) => {
            let hits = book.search(query);
            if hits.is_empty() {
                "nothing found".to_string()
            } else {
                hits.iter()
                    .map(|r| r.to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        ("show-all", rest) => show_all(book, default_page_size, rest),
        ("help", _) => HELP.to_string(),
        ("exit" | "close", _) => return Outcome::Exit,
        _ => format!("unrecognized command: {line:?} ('help' lists commands)"),
    };
    Outcome::Reply(reply)
}

fn add_contact(book: &mut AddressBook, name: &str, birthday: Option<&str>) -> String {
    match Record::new(name, birthday) {
        Ok(record) => {
            let name = record.name().to_string();
            book.add_record(record);
            format!("{name} added")
        }
        Err(err) => err.to_string(),
    }
}

fn with_record(
    book: &mut AddressBook,
    name: &str,
    action: impl FnOnce(&mut Record) -> String,
) -> String {
    match book.find_mut(name) {
        Some(record) => action(record),
        None => format!("no contact named {name}"),
    }
}

fn show_all(book: &AddressBook, default_page_size: NonZeroUsize, args: &[&str]) -> String {
    let page_size = match args {
        [] => default_page_size,
        [raw] => match raw.parse::<NonZeroUsize>() {
            Ok(size) => size,
            Err(_) => return format!("page size must be a positive number, got {raw:?}"),
        },
        _ => return "usage: show-all [page-size]".to_string(),
    };

    if book.is_empty() {
        return "address book is empty".to_string();
    }
    book.paginate(page_size).collect::<Vec<_>>().join("\n")
}
