use super::DataStore;
use crate::book::AddressBook;
use crate::error::{AbookError, Result};
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: AddressBook,
    saves: usize,
    backups: usize,
    unreadable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            saved: book,
            ..Self::default()
        }
    }

    /// A store whose `load_book` always fails, like a hand-broken file.
    pub fn unreadable(book: AddressBook) -> Self {
        Self {
            saved: book,
            unreadable: true,
            ..Self::default()
        }
    }

    pub fn backup_count(&self) -> usize {
        self.backups
    }

    /// Number of times `save_book` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn saved(&self) -> &AddressBook {
        &self.saved
    }
}

impl DataStore for InMemoryStore {
    fn load_book(&self) -> Result<AddressBook> {
        if self.unreadable {
            return Err(AbookError::Io(std::io::Error::other("unreadable store")));
        }
        Ok(self.saved.clone())
    }

    fn save_book(&mut self, book: &AddressBook) -> Result<()> {
        self.saved = book.clone();
        self.saves += 1;
        self.unreadable = false;
        Ok(())
    }

    fn backup(&mut self) -> Result<Option<PathBuf>> {
        self.backups += 1;
        Ok(None)
    }

    fn location(&self) -> Option<&Path> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut record = Record::new(&format!("contact{:02}", i + 1)).unwrap();
                record.add_phone(&format!("{:010}", i + 1)).unwrap();
                self.book.add_record(record);
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            self.book
                .add_record(Record::with_birthday(name, birthday).unwrap());
            self
        }

        pub fn into_store(self) -> InMemoryStore {
            InMemoryStore::with_book(self.book)
        }
    }
}
