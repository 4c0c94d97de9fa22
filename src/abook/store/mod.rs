//! # Storage Layer
//!
//! The [`DataStore`] trait is where the address book meets persistence. The
//! rest of the crate only ever sees a whole [`AddressBook`]: it is read once
//! when a session starts and written back once when it ends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file holding the full
//!   name -> record mapping.
//! - [`memory::InMemoryStore`]: keeps the last saved snapshot in memory, for
//!   tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── address_book.json   # { "<name>": { "name", "phones", "birthday" }, ... }
//! └── config.json         # AbookConfig
//! ```

use crate::book::AddressBook;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Whole-book persistence.
pub trait DataStore {
    /// Read the stored book. A store with nothing saved yet returns an empty
    /// book; a store whose contents cannot be read returns an error.
    fn load_book(&self) -> Result<AddressBook>;

    /// Replace the stored book with `book`.
    fn save_book(&mut self, book: &AddressBook) -> Result<()>;

    /// Copy the stored book aside before it gets overwritten. Returns where
    /// the copy went, or `None` when there was nothing to copy.
    fn backup(&mut self) -> Result<Option<PathBuf>>;

    /// Where the book lives, for stores backed by a file.
    fn location(&self) -> Option<&Path>;
}
