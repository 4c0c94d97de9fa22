use crate::book::DEFAULT_PAGE_SIZE;
use crate::error::{AbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOK_FILE: &str = "address_book.json";

/// Configuration for abook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbookConfig {
    /// Contacts per page when listing the whole book
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// File name (relative to the data dir) or absolute path of the book
    #[serde(default = "default_book_file")]
    pub book_file: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_book_file() -> String {
    DEFAULT_BOOK_FILE.to_string()
}

impl Default for AbookConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            book_file: DEFAULT_BOOK_FILE.to_string(),
        }
    }
}

impl AbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AbookError::Io)?;
        let config: AbookConfig =
            serde_json::from_str(&content).map_err(AbookError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AbookError::Serialization)?;
        fs::write(config_path, content).map_err(AbookError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(AbookError::Api("page_size must be at least 1".into()));
        }
        if self.book_file.trim().is_empty() {
            return Err(AbookError::Api("book_file cannot be empty".into()));
        }
        Ok(())
    }

    /// Where the book lives for a given data directory. An absolute
    /// `book_file` wins over the directory.
    pub fn book_path<P: AsRef<Path>>(&self, data_dir: P) -> std::path::PathBuf {
        data_dir.as_ref().join(&self.book_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AbookConfig::default();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.book_file, "address_book.json");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = AbookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, AbookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = AbookConfig {
            page_size: 10,
            ..AbookConfig::default()
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = AbookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.page_size, 10);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"page_size": 3}"#).unwrap();

        let loaded = AbookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.page_size, 3);
        assert_eq!(loaded.book_file, "address_book.json");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"page_size": 0}"#).unwrap();
        assert!(AbookConfig::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_book_path() {
        let config = AbookConfig::default();
        assert_eq!(
            config.book_path("/data"),
            Path::new("/data").join("address_book.json")
        );

        let absolute = std::env::temp_dir().join("elsewhere.json");
        let config = AbookConfig {
            book_file: absolute.to_string_lossy().into_owned(),
            ..AbookConfig::default()
        };
        assert_eq!(config.book_path("/data"), absolute);
    }
}
