//! Text commands for the interactive shell.
//!
//! A line is split on whitespace; the first word (or the first two, for
//! `show all` and `good bye`) selects the command and is matched
//! case-insensitively. Arguments are passed through as typed, so contact
//! names keep their case.

use abook::error::{AbookError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Create { name: String, birthday: Option<String> },
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Remove { name: String, phone: String },
    Phone { name: String },
    Birthday { name: String, date: String },
    Days { name: String },
    Delete { name: String },
    Search { query: String },
    ShowAll { page_size: Option<usize> },
    Exit,
}

impl Command {
    /// Whether running the command can change the book.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Create { .. }
                | Command::Add { .. }
                | Command::Change { .. }
                | Command::Remove { .. }
                | Command::Birthday { .. }
                | Command::Delete { .. }
        )
    }
}

pub const USAGE: &[(&str, &str)] = &[
    ("hello", "greet"),
    ("create <name> [DD.MM.YYYY]", "create an empty contact"),
    ("add <name> <phone>", "add a phone, creating the contact if needed"),
    ("change <name> <old> <new>", "replace a phone"),
    ("remove <name> <phone>", "remove a phone"),
    ("phone <name>", "show a contact"),
    ("birthday <name> <DD.MM.YYYY>", "set a birthday"),
    ("days <name>", "days until the next birthday"),
    ("delete <name>", "delete a contact"),
    ("found <query>", "search names and phones"),
    ("show all [page size]", "list every contact, page by page"),
    ("help", "this list"),
    ("good bye | close | exit", "save and quit"),
];

/// Parses one line. Blank lines give `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((first, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let keyword = first.to_lowercase();
    let second = rest.first().map(|s| s.to_lowercase());

    let command = match (keyword.as_str(), second.as_deref()) {
        ("show", Some("all")) => {
            let page_size = match &rest[1..] {
                [] => None,
                [n] => Some(parse_page_size(n)?),
                _ => return Err(usage("show all [page size]")),
            };
            Command::ShowAll { page_size }
        }
        ("good", Some("bye")) if rest.len() == 1 => Command::Exit,
        ("close" | "exit", _) if rest.is_empty() => Command::Exit,
        ("hello", _) if rest.is_empty() => Command::Hello,
        ("help", _) if rest.is_empty() => Command::Help,
        ("create", _) => match rest {
            [name] => Command::Create {
                name: name.to_string(),
                birthday: None,
            },
            [name, date] => Command::Create {
                name: name.to_string(),
                birthday: Some(date.to_string()),
            },
            _ => return Err(usage("create <name> [DD.MM.YYYY]")),
        },
        ("add", _) => match rest {
            [name, phone] => Command::Add {
                name: name.to_string(),
                phone: phone.to_string(),
            },
            _ => return Err(usage("add <name> <phone>")),
        },
        ("change", _) => match rest {
            [name, old, new] => Command::Change {
                name: name.to_string(),
                old: old.to_string(),
                new: new.to_string(),
            },
            _ => return Err(usage("change <name> <old phone> <new phone>")),
        },
        ("remove", _) => match rest {
            [name, phone] => Command::Remove {
                name: name.to_string(),
                phone: phone.to_string(),
            },
            _ => return Err(usage("remove <name> <phone>")),
        },
        ("phone", _) => Command::Phone {
            name: single(rest, "phone <name>")?,
        },
        ("birthday", _) => match rest {
            [name, date] => Command::Birthday {
                name: name.to_string(),
                date: date.to_string(),
            },
            _ => return Err(usage("birthday <name> <DD.MM.YYYY>")),
        },
        ("days", _) => Command::Days {
            name: single(rest, "days <name>")?,
        },
        ("delete", _) => Command::Delete {
            name: single(rest, "delete <name>")?,
        },
        ("found" | "search", _) => Command::Search {
            query: single(rest, "found <query>")?,
        },
        _ => return Err(AbookError::Api(format!("Invalid command: {}", line.trim()))),
    };

    Ok(Some(command))
}

fn single(rest: &[&str], form: &str) -> Result<String> {
    match rest {
        [value] => Ok(value.to_string()),
        _ => Err(usage(form)),
    }
}

fn parse_page_size(s: &str) -> Result<usize> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AbookError::Api(format!("Invalid page size: {}", s))),
    }
}

fn usage(form: &str) -> AbookError {
    AbookError::Api(format!("Usage: {}", form))
}
