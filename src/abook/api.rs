//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every front end.
//!
//! `AbookApi` owns the [`AddressBook`] for the lifetime of a session together
//! with the [`DataStore`] it came from. The book is read from the store when
//! the API is built and written back by [`AbookApi::save`]; in between, every
//! operation works on memory only.
//!
//! ## Generic Over DataStore
//!
//! - Production: `AbookApi<FileStore>`
//! - Testing: `AbookApi<InMemoryStore>`
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation**: it returns [`CmdResult`] values, never strings for a
//!   terminal

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::store::DataStore;
use chrono::Local;
use std::path::Path;
use tracing::warn;

pub struct AbookApi<S: DataStore> {
    store: S,
    book: AddressBook,
    /// The store held something that could not be read.
    load_failed: bool,
}

impl<S: DataStore> AbookApi<S> {
    /// Builds the API around `store`, reading the book from it. A store that
    /// cannot be read yields an empty book, and its contents are backed up
    /// before the first save replaces them.
    pub fn new(store: S) -> Self {
        let (book, load_failed) = match store.load_book() {
            Ok(book) => (book, false),
            Err(e) => {
                warn!(error = %e, "could not read address book, starting empty");
                (AddressBook::new(), true)
            }
        };
        Self {
            store,
            book,
            load_failed,
        }
    }

    pub fn create(&mut self, name: &str, birthday: Option<&str>) -> Result<CmdResult> {
        commands::create::run(&mut self.book, name, birthday)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.book, name, phone)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.book, name, phone)
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        commands::change::run(&mut self.book, name, old, new)
    }

    pub fn set_birthday(&mut self, name: &str, date: &str) -> Result<CmdResult> {
        commands::birthday::run(&mut self.book, name, date)
    }

    pub fn find(&self, name: &str) -> Result<CmdResult> {
        commands::show::run(&self.book, name)
    }

    pub fn delete(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.book, query)
    }

    pub fn list_all(&self, page_size: usize) -> Result<CmdResult> {
        commands::list::run(&self.book, page_size)
    }

    pub fn days_to_birthday(&self, name: &str) -> Result<CmdResult> {
        commands::days::run(&self.book, name, Local::now().date_naive())
    }

    /// Replaces the in-memory book with the one stored at `path`.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<CmdResult> {
        self.book = AddressBook::load(path.as_ref());
        Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Loaded {} contacts from {}.",
            self.book.len(),
            path.as_ref().display()
        ))))
    }

    /// Writes the book to `path`, leaving the backing store untouched.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<CmdResult> {
        self.book.save(path.as_ref())?;
        Ok(CmdResult::default().with_message(CmdMessage::success(format!(
            "Saved {} contacts to {}.",
            self.book.len(),
            path.as_ref().display()
        ))))
    }

    /// Writes the book back to the store it was read from.
    pub fn save(&mut self) -> Result<()> {
        if self.load_failed {
            if let Some(backup) = self.store.backup()? {
                warn!(backup = %backup.display(), "kept a copy of the unreadable address book");
            }
        }
        self.store.save_book(&self.book)?;
        self.load_failed = false;
        Ok(())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
