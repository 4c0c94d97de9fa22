//! # CLI Layer
//!
//! This module is **one possible UI client** for abook, not the application
//! itself. It is the only place that:
//! - Parses arguments and text commands
//! - Writes to stdout/stderr
//! - Decides when a session saves
//!
//! Two ways in:
//! - **One-shot**: `abook add john 1234567890` runs a single command, prints
//!   the result and saves if the book changed.
//! - **Shell**: `abook` (or `abook shell`) starts the interactive console,
//!   which saves when the user quits or input ends, if anything changed.
//!
//! Both funnel into [`execute`], so a clap subcommand and the matching shell
//! line behave identically.

use super::console::{ConsoleInterface, UserInterface};
use super::parser::{Command, USAGE};
use super::render::render_result;
use super::setup::Cli;
use abook::api::AbookApi;
use abook::error::Result;
use abook::init::initialize;
use abook::store::DataStore;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub(super) enum Reply {
    Continue(String),
    Exit(String),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.file.as_deref())?;
    let page_size = ctx.config.page_size;

    match cli.command.and_then(|c| c.into_command()) {
        Some(command) => handle_one_shot(&mut ctx.api, command, page_size),
        None => {
            let stdin = std::io::stdin();
            let mut console =
                ConsoleInterface::new(ctx.api, stdin.lock(), std::io::stdout(), page_size);
            console.process_commands()
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_one_shot<S: DataStore>(
    api: &mut AbookApi<S>,
    command: Command,
    page_size: usize,
) -> Result<()> {
    let mutating = command.is_mutating();
    match execute(api, command, page_size)? {
        Reply::Continue(text) | Reply::Exit(text) => {
            if !text.is_empty() {
                println!("{}", text);
            }
        }
    }
    if mutating {
        api.save()?;
    }
    Ok(())
}

/// Runs one parsed command against the API and renders its outcome.
pub(super) fn execute<S: DataStore>(
    api: &mut AbookApi<S>,
    command: Command,
    default_page_size: usize,
) -> Result<Reply> {
    let result = match command {
        Command::Hello => return Ok(Reply::Continue("How can I help you?".to_string())),
        Command::Help => return Ok(Reply::Continue(render_help())),
        Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        Command::Create { name, birthday } => api.create(&name, birthday.as_deref())?,
        Command::Add { name, phone } => api.add_phone(&name, &phone)?,
        Command::Change { name, old, new } => api.edit_phone(&name, &old, &new)?,
        Command::Remove { name, phone } => api.remove_phone(&name, &phone)?,
        Command::Phone { name } => api.find(&name)?,
        Command::Birthday { name, date } => api.set_birthday(&name, &date)?,
        Command::Days { name } => api.days_to_birthday(&name)?,
        Command::Delete { name } => api.delete(&name)?,
        Command::Search { query } => api.search(&query)?,
        Command::ShowAll { page_size } => api.list_all(page_size.unwrap_or(default_page_size))?,
    };
    Ok(Reply::Continue(render_result(&result)))
}

fn render_help() -> String {
    let mut out = String::from("Commands:\n");
    for (form, about) in USAGE {
        out.push_str(&format!("  {:<30} {}\n", form, about));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use abook::error::ErrorKind;
    use abook::store::memory::InMemoryStore;

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Continue(t) | Reply::Exit(t) => t,
        }
    }

    #[test]
    fn exit_is_signalled() {
        let mut api = AbookApi::new(InMemoryStore::new());
        assert!(matches!(
            execute(&mut api, Command::Exit, 5).unwrap(),
            Reply::Exit(_)
        ));
    }

    #[test]
    fn show_all_uses_default_page_size() {
        colored::control::set_override(false);
        let mut api = AbookApi::new(InMemoryStore::new());
        for i in 0..7 {
            api.add_phone(&format!("c{i}"), "1234567890").unwrap();
        }
        let out = text(execute(&mut api, Command::ShowAll { page_size: None }, 3).unwrap());
        assert!(out.contains("Page 3/3"));

        let out = text(
            execute(
                &mut api,
                Command::ShowAll {
                    page_size: Some(10),
                },
                3,
            )
            .unwrap(),
        );
        assert!(out.contains("Page 1/1"));
    }

    #[test]
    fn errors_propagate() {
        let mut api = AbookApi::new(InMemoryStore::new());
        let err = execute(
            &mut api,
            Command::Phone {
                name: "ghost".into(),
            },
            5,
        )
        .err()
        .unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn help_lists_every_command() {
        let help = render_help();
        for (form, _) in USAGE {
            assert!(help.contains(form));
        }
    }

    #[test]
    fn one_shot_saves_only_mutations() {
        let mut api = AbookApi::new(InMemoryStore::new());
        let add = Command::Add {
            name: "john".into(),
            phone: "1234567890".into(),
        };
        handle_one_shot(&mut api, add, 5).unwrap();
        assert_eq!(api.store().save_count(), 1);

        let show = Command::Phone {
            name: "john".into(),
        };
        handle_one_shot(&mut api, show, 5).unwrap();
        assert_eq!(api.store().save_count(), 1);
    }
}
