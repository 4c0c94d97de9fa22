use super::DataStore;
use crate::book::AddressBook;
use crate::error::{AbookError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the book as a single pretty-printed JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AbookError::Io)?;
            }
        }
        Ok(())
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    /// Sibling file the snapshot is written to before being renamed into place.
    fn staging_path(&self) -> PathBuf {
        self.sibling(".tmp")
    }

    fn backup_path(&self) -> PathBuf {
        self.sibling(".bak")
    }
}

fn write_synced(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

impl DataStore for FileStore {
    fn load_book(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no address book yet");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(AbookError::Io)?;
        let book: AddressBook =
            serde_json::from_str(&content).map_err(AbookError::Serialization)?;
        debug!(path = %self.path.display(), records = book.len(), "loaded address book");
        Ok(book)
    }

    fn save_book(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(book).map_err(AbookError::Serialization)?;

        let staging = self.staging_path();
        let written = write_synced(&staging, content.as_bytes())
            .and_then(|()| fs::rename(&staging, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&staging);
            return Err(AbookError::Io(e));
        }

        debug!(path = %self.path.display(), records = book.len(), "saved address book");
        Ok(())
    }

    fn backup(&mut self) -> Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let backup = self.backup_path();
        fs::copy(&self.path, &backup).map_err(AbookError::Io)?;
        debug!(path = %backup.display(), "backed up address book");
        Ok(Some(backup))
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
