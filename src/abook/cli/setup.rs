use super::parser::Command;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "abook", bin_name = "abook", version)]
#[command(about = "Console address book: contacts, phones and birthdays", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address book file (default: address_book.json in the data dir)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty contact
    #[command(alias = "new")]
    Create {
        name: String,

        /// Birthday as DD.MM.YYYY
        #[arg(short, long)]
        birthday: Option<String>,
    },

    /// Add a phone to a contact, creating the contact if needed
    Add { name: String, phone: String },

    /// Replace one of a contact's phones
    Change {
        name: String,
        old: String,
        new: String,
    },

    /// Remove a phone from a contact
    Remove { name: String, phone: String },

    /// Show a contact
    #[command(alias = "show")]
    Phone { name: String },

    /// Set a contact's birthday (DD.MM.YYYY)
    Birthday { name: String, date: String },

    /// Days until a contact's next birthday
    Days { name: String },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { name: String },

    /// Search names and phones for a substring
    #[command(alias = "found")]
    Search { query: String },

    /// List every contact, page by page
    #[command(alias = "ls", alias = "all")]
    List {
        /// Contacts per page (default from config)
        #[arg(short = 'n', long, value_parser = parse_page_size)]
        page_size: Option<usize>,
    },

    /// Start the interactive shell (the default)
    Shell,
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("`{}` is not a positive number", s)),
    }
}

impl Commands {
    /// The equivalent shell command; `None` for `shell` itself.
    pub fn into_command(self) -> Option<Command> {
        let command = match self {
            Commands::Create { name, birthday } => Command::Create { name, birthday },
            Commands::Add { name, phone } => Command::Add { name, phone },
            Commands::Change { name, old, new } => Command::Change { name, old, new },
            Commands::Remove { name, phone } => Command::Remove { name, phone },
            Commands::Phone { name } => Command::Phone { name },
            Commands::Birthday { name, date } => Command::Birthday { name, date },
            Commands::Days { name } => Command::Days { name },
            Commands::Delete { name } => Command::Delete { name },
            Commands::Search { query } => Command::Search { query },
            Commands::List { page_size } => Command::ShowAll { page_size },
            Commands::Shell => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("abook").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_shell() {
        assert!(parse(&[]).command.is_none());
        assert_eq!(parse(&["shell"]).command.unwrap().into_command(), None);
    }

    #[test]
    fn maps_to_shell_commands() {
        let cli = parse(&["add", "john", "1234567890"]);
        assert_eq!(
            cli.command.unwrap().into_command(),
            Some(Command::Add {
                name: "john".into(),
                phone: "1234567890".into()
            })
        );

        let cli = parse(&["found", "jo"]);
        assert_eq!(
            cli.command.unwrap().into_command(),
            Some(Command::Search { query: "jo".into() })
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["list", "-n", "2", "--file", "/tmp/book.json", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/book.json")));
        assert_eq!(
            cli.command.unwrap().into_command(),
            Some(Command::ShowAll { page_size: Some(2) })
        );
    }

    #[test]
    fn rejects_zero_page_size() {
        assert!(Cli::try_parse_from(["abook", "list", "-n", "0"]).is_err());
    }
}
