use super::commands::{execute, Reply};
use super::parser;
use super::render::render_error;
use abook::api::AbookApi;
use abook::error::Result;
use abook::store::DataStore;
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "Please enter a command: ";

/// A front end that drives the address book from user input.
///
/// The console is the only implementation shipped. Other front ends (a GUI,
/// a web page, a chat bot) would implement this trait on top of the same
/// [`AbookApi`].
pub trait UserInterface {
    /// Reads and runs commands until the user quits or input ends.
    fn process_commands(&mut self) -> Result<()>;

    fn show_message(&mut self, message: &str) -> Result<()>;
}

/// Line-oriented shell over any reader/writer pair.
pub struct ConsoleInterface<S: DataStore, R: BufRead, W: Write> {
    api: AbookApi<S>,
    input: R,
    output: W,
    page_size: usize,
    /// A command changed the book since the session started.
    dirty: bool,
}

impl<S: DataStore, R: BufRead, W: Write> ConsoleInterface<S, R, W> {
    pub fn new(api: AbookApi<S>, input: R, output: W, page_size: usize) -> Self {
        Self {
            api,
            input,
            output,
            page_size,
            dirty: false,
        }
    }

    #[cfg(test)]
    fn into_parts(self) -> (AbookApi<S>, W) {
        (self.api, self.output)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<S: DataStore, R: BufRead, W: Write> UserInterface for ConsoleInterface<S, R, W> {
    fn process_commands(&mut self) -> Result<()> {
        while let Some(line) = self.read_line()? {
            let command = match parser::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    self.show_message(&render_error(&e))?;
                    continue;
                }
            };
            debug!(?command, "running");

            let mutating = command.is_mutating();
            match execute(&mut self.api, command, self.page_size) {
                Ok(Reply::Continue(text)) => {
                    self.dirty |= mutating;
                    self.show_message(&text)?;
                }
                Ok(Reply::Exit(text)) => {
                    self.show_message(&text)?;
                    break;
                }
                Err(e) => self.show_message(&render_error(&e))?,
            }
        }

        if self.dirty {
            self.api.save()?;
        }
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> Result<()> {
        if !message.is_empty() {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }
}
