//! # Address Book
//!
//! [`AddressBook`] is the in-memory store of all contacts, keyed by name.
//!
//! Records live in an ordered map, so every walk over the book (paging,
//! search, the saved file) sees contacts sorted by name and is reproducible
//! from run to run.
//!
//! Persistence is whole-book: [`AddressBook::save`] writes a full snapshot,
//! [`AddressBook::load`] reads one back. Loading never fails; a missing or
//! unreadable file yields an empty book so that startup is never blocked.

use crate::error::Result;
use crate::model::Record;
use crate::store::fs::FileStore;
use crate::store::DataStore;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, Record>")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name.value().to_string();
        if self.records.insert(key, record).is_some() {
            debug!("replaced existing record");
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Removes the record for `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            debug!(name, "deleted record");
        }
        removed
    }

    /// Pages over the book `page_size` records at a time. A page size of zero
    /// is treated as one.
    pub fn iterate(&self, page_size: usize) -> Pages<'_> {
        Pages {
            records: self.records.values().collect(),
            page_size: page_size.max(1),
            offset: 0,
        }
    }

    /// Records whose name, or any phone, contains `query`. Case-sensitive;
    /// the empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.records
            .values()
            .filter(|r| {
                r.name.value().contains(query) || r.phones.iter().any(|p| p.value().contains(query))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the whole book to `path`, replacing whatever was there.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        FileStore::new(path.as_ref()).save_book(self)
    }

    /// Reads a book from `path`. Any failure (missing, empty or corrupt
    /// file) gives an empty book.
    pub fn load<P: AsRef<Path>>(path: P) -> AddressBook {
        let path = path.as_ref();
        match FileStore::new(path).load_book() {
            Ok(book) => book,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read address book, starting empty");
                AddressBook::new()
            }
        }
    }
}

impl From<BTreeMap<String, Record>> for AddressBook {
    /// Entries are re-keyed by their record's name, so a stale key in a
    /// hand-edited file cannot break the key/name correspondence.
    fn from(map: BTreeMap<String, Record>) -> Self {
        let mut book = AddressBook::new();
        for (_, record) in map {
            book.add_record(record);
        }
        book
    }
}

impl Serialize for AddressBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

/// Iterator returned by [`AddressBook::iterate`].
///
/// The set of records is fixed when the iterator is created. Once exhausted
/// it stays exhausted; call `iterate` again to start over.
pub struct Pages<'a> {
    records: Vec<&'a Record>,
    page_size: usize,
    offset: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.records.len() {
            return None;
        }
        let end = (self.offset + self.page_size).min(self.records.len());
        let page = self.records[self.offset..end].to_vec();
        self.offset = end;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len() - self.offset;
        let pages = remaining.div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut r = Record::new(name).unwrap();
        for p in phones {
            r.add_phone(p).unwrap();
        }
        r
    }

    fn book_of(n: usize) -> AddressBook {
        let mut book = AddressBook::new();
        for i in 0..n {
            book.add_record(record(&format!("contact{i:02}"), &[]));
        }
        book
    }

    #[test]
    fn john_scenario() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("john").unwrap());
        book.find_mut("john").unwrap().add_phone("1234567890").unwrap();

        let john = book.find("john").unwrap();
        let phones: Vec<_> = john.phones.iter().map(|p| p.value()).collect();
        assert_eq!(phones, ["1234567890"]);

        assert!(book.find_mut("john").unwrap().add_phone("12345").is_err());
        assert_eq!(book.find("john").unwrap().phones.len(), 1);
    }

    #[test]
    fn add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        book.add_record(record("john", &["1111111111"]));
        book.add_record(record("john", &["2222222222"]));

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("john").unwrap().phones[0].value(), "2222222222");
    }

    #[test]
    fn delete_missing_on_empty_book() {
        let mut book = AddressBook::new();
        assert!(book.delete("missing_name").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn delete_removes_record() {
        let mut book = book_of(2);
        assert!(book.delete("contact00").is_some());
        assert!(book.find("contact00").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn pages_cover_every_record_once() {
        for (n, k) in [(0, 5), (1, 5), (5, 5), (12, 5), (7, 1), (3, 10)] {
            let book = book_of(n);
            let pages: Vec<_> = book.iterate(k).collect();

            assert_eq!(pages.len(), n.div_ceil(k), "n={n} k={k}");
            if let Some((last, full)) = pages.split_last() {
                assert!(full.iter().all(|p| p.len() == k));
                assert!(!last.is_empty() && last.len() <= k);
            }

            let names: Vec<_> = pages.iter().flatten().map(|r| r.name.value()).collect();
            let unique: HashSet<_> = names.iter().collect();
            assert_eq!(names.len(), n);
            assert_eq!(unique.len(), n);
        }
    }

    #[test]
    fn exhausted_pages_stay_exhausted() {
        let book = book_of(3);
        let mut pages = book.iterate(2);
        assert_eq!(pages.len(), 2);
        assert!(pages.next().is_some());
        assert!(pages.next().is_some());
        assert!(pages.next().is_none());
        assert!(pages.next().is_none());

        assert_eq!(book.iterate(2).count(), 2);
    }

    #[test]
    fn zero_page_size_yields_single_record_pages() {
        let book = book_of(3);
        assert_eq!(book.iterate(0).count(), 3);
    }

    #[test]
    fn search_matches_name_or_phone() {
        let mut book = AddressBook::new();
        book.add_record(record("john", &["1234567890"]));
        book.add_record(record("johanna", &["5555555555"]));
        book.add_record(record("bob", &["0987654321"]));

        let names = |q: &str| -> Vec<String> {
            book.search(q)
                .iter()
                .map(|r| r.name.value().to_string())
                .collect()
        };

        assert_eq!(names("joh"), ["johanna", "john"]);
        assert_eq!(names("0987"), ["bob"]);
        assert_eq!(names("John"), Vec::<String>::new());
        assert_eq!(names("").len(), 3);
        assert!(names("zzz").is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");

        let mut book = AddressBook::new();
        book.add_record(record("john", &["1234567890", "1111111111"]));
        book.add_record(Record::with_birthday("anna", "15.03.1990").unwrap());
        book.add_record(record("bob", &[]));
        book.save(&path).unwrap();

        let loaded = AddressBook::load(&path);
        assert_eq!(loaded, book);
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");

        book_of(4).save(&path).unwrap();
        book_of(1).save(&path).unwrap();

        assert_eq!(AddressBook::load(&path).len(), 1);
    }

    #[test]
    fn load_missing_or_garbage_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AddressBook::load(dir.path().join("nope.json")).is_empty());

        let empty = dir.path().join("empty.json");
        std::fs::write(&empty, "").unwrap();
        assert!(AddressBook::load(&empty).is_empty());

        let garbage = dir.path().join("garbage.json");
        std::fs::write(&garbage, b"\x80\x04not json").unwrap();
        assert!(AddressBook::load(&garbage).is_empty());
    }

    #[test]
    fn save_to_unwritable_location_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let err = book_of(1).save(blocker.join("book.json")).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Io);
    }

    #[test]
    fn loading_rekeys_by_record_name() {
        let json = r#"{"stale":{"name":"john","phones":[],"birthday":null}}"#;
        let book: AddressBook = serde_json::from_str(json).unwrap();
        assert!(book.find("stale").is_none());
        assert!(book.find("john").is_some());
    }
}
