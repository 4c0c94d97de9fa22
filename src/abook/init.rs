use crate::api::AbookApi;
use crate::config::AbookConfig;
use crate::error::{AbookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overrides the data directory (book and config).
pub const HOME_ENV: &str = "ABOOK_HOME";

pub struct AbookContext {
    pub api: AbookApi<FileStore>,
    pub config: AbookConfig,
}

/// `$ABOOK_HOME` when set, otherwise the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "abook", "abook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AbookError::Api("Could not determine data dir".into()))
}

/// Wires config, store and API together. `book_file` replaces the configured
/// book location when given.
pub fn initialize(book_file: Option<&Path>) -> Result<AbookContext> {
    let data_dir = data_dir()?;
    initialize_in(&data_dir, book_file)
}

pub fn initialize_in(data_dir: &Path, book_file: Option<&Path>) -> Result<AbookContext> {
    let config = AbookConfig::load(data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        AbookConfig::default()
    });

    let book_path = match book_file {
        Some(path) => path.to_path_buf(),
        None => config.book_path(data_dir),
    };
    debug!(path = %book_path.display(), "using address book");

    let api = AbookApi::new(FileStore::new(book_path));
    Ok(AbookContext { api, config })
}
