//! File-backed storage for list files.
//!
//! Every list lives in `<lists_path>/<name>.json`. Writes go through a temporary
//! sibling file that is renamed over the target, so a failed write never leaves a
//! truncated list behind.

use std::path::{Path, PathBuf};
use tracing::debug;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StorageError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("List file not found: {0}")]
        NotFound(String),
    }
}

use error::StorageError;

const LIST_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

pub struct ListStorage {
    lists_path: PathBuf,
}

impl ListStorage {
    pub fn new(lists_path: impl Into<PathBuf>) -> Self {
        Self {
            lists_path: lists_path.into(),
        }
    }

    pub fn lists_path(&self) -> &Path {
        &self.lists_path
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        self.lists_path.join(format!("{name}.{LIST_EXTENSION}"))
    }

    fn temp_path(&self, name: &str) -> PathBuf {
        self.lists_path.join(format!("{name}.{TEMP_EXTENSION}"))
    }
}

/// Read operations.
impl ListStorage {
    pub fn read(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        match std::fs::read(self.file_path(name)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.file_path(name).is_file()
    }

    /// Returns the stems of all `*.json` files in the lists directory.
    ///
    /// A missing directory yields an empty list. Order follows the directory listing.
    pub fn list_names(&self) -> Result<Vec<String>, StorageError> {
        if !self.lists_path.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.lists_path)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != LIST_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        Ok(names)
    }
}

/// Write operations.
impl ListStorage {
    pub fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.lists_path)?;

        let temp_path = self.temp_path(name);
        if let Err(e) = std::fs::write(&temp_path, bytes) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }
        if let Err(e) = std::fs::rename(&temp_path, self.file_path(name)) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }

        debug!(name, bytes = bytes.len(), "wrote list file");
        Ok(())
    }

    pub fn delete(&self, name: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.file_path(name)) {
            Ok(()) => {
                debug!(name, "deleted list file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
