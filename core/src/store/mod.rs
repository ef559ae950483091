//! In-memory bookmark list with named-list persistence.

use crate::error::ValidationError;
use crate::storage::ListStorage;
use crate::storage::error::StorageError;
use crate::types::{BookmarkList, Config, DEFAULT_SNAPSHOT_NAME, ListName};
use error::StoreError;
use tracing::{debug, info, warn};

pub mod error {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error(transparent)]
        Validation(#[from] ValidationError),

        #[error("saved list not found: {0}")]
        NotFound(String),

        #[error("deleting `{0}` was cancelled")]
        Cancelled(String),

        #[error("storage error: {0}")]
        Storage(#[from] StorageError),

        #[error("encode error: {0}")]
        Encode(#[from] serde_json::Error),
    }

    impl StoreError {
        pub(crate) fn from_storage(e: StorageError) -> Self {
            match e {
                StorageError::NotFound(name) => StoreError::NotFound(name),
                e => StoreError::Storage(e),
            }
        }
    }
}

/// Validates a user-supplied list name.
pub fn parse_list_name(name: &str) -> Result<ListName, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if trimmed == DEFAULT_SNAPSHOT_NAME {
        return Err(ValidationError::ReservedName(trimmed.to_string()));
    }
    ListName::try_new(trimmed).map_err(|_| ValidationError::InvalidName(trimmed.to_string()))
}

/// Owner of the current bookmark list.
///
/// `dirty` tracks whether the list differs from the default snapshot on disk. It is set by
/// every structural mutation and cleared only after a snapshot write or a load succeeds.
pub struct ListStore {
    storage: ListStorage,
    current_list: BookmarkList,
    current_list_name: Option<ListName>,
    dirty: bool,
}

impl ListStore {
    /// Creates an empty store over the config's lists directory. Call
    /// [`ListStore::initialize`] to restore the default snapshot.
    pub fn new(config: &Config) -> Self {
        Self {
            storage: ListStorage::new(config.lists_path()),
            current_list: BookmarkList::new(),
            current_list_name: None,
            dirty: false,
        }
    }

    /// Restores the default snapshot. A missing or corrupt snapshot yields an empty list.
    pub fn initialize(&mut self) {
        self.current_list_name = None;
        self.dirty = false;
        self.current_list = match self.storage.read(DEFAULT_SNAPSHOT_NAME) {
            Ok(bytes) => match BookmarkList::from_json(&bytes) {
                Ok(list) => {
                    info!(entries = list.len(), "restored default snapshot");
                    list
                }
                Err(e) => {
                    warn!("default snapshot is corrupt, starting empty: {e}");
                    BookmarkList::new()
                }
            },
            Err(StorageError::NotFound(_)) => {
                debug!("no default snapshot, starting empty");
                BookmarkList::new()
            }
            Err(e) => {
                warn!("failed to read default snapshot, starting empty: {e}");
                BookmarkList::new()
            }
        };
    }
}

/// Read operations.
impl ListStore {
    pub fn get_by_index(&self, index: usize) -> Option<&str> {
        self.current_list.get(index)
    }

    /// Returns an independent copy of the current list.
    pub fn get_all(&self) -> BookmarkList {
        self.current_list.clone()
    }

    pub fn entries(&self) -> &BookmarkList {
        &self.current_list
    }

    pub fn len(&self) -> usize {
        self.current_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current_list.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn current_list_name(&self) -> Option<&ListName> {
        self.current_list_name.as_ref()
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        if self.current_list.is_valid_position(index) {
            Ok(())
        } else {
            Err(ValidationError::IndexOutOfRange {
                index,
                len: self.current_list.len(),
            })
        }
    }
}

/// Structural mutations.
impl ListStore {
    pub fn add(&mut self, path: &str) -> Result<(), ValidationError> {
        if path.is_empty() {
            return Err(ValidationError::EmptyPath);
        }
        if !self.current_list.push_unique(path) {
            return Err(ValidationError::DuplicatePath(path.to_string()));
        }
        self.dirty = true;
        Ok(())
    }

    /// Removes the entry at `index` and returns it.
    pub fn delete_by_index(&mut self, index: usize) -> Result<String, ValidationError> {
        self.check_index(index)?;
        let removed = self
            .current_list
            .remove(index)
            .ok_or(ValidationError::IndexOutOfRange {
                index,
                len: self.current_list.len(),
            })?;
        self.dirty = true;
        Ok(removed)
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), ValidationError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Err(ValidationError::SamePosition(from));
        }
        self.current_list.move_entry(from, to);
        self.dirty = true;
        Ok(())
    }

    pub fn clear(&mut self) {
        if self.current_list.is_empty() {
            return;
        }
        self.current_list.clear();
        self.dirty = true;
    }
}

/// Persistence operations.
impl ListStore {
    /// Writes the current list under `name` and refreshes the default snapshot.
    pub fn save_as(&mut self, name: &str) -> Result<ListName, StoreError> {
        let name = parse_list_name(name)?;
        let bytes = self.current_list.to_json()?;
        self.storage.write(&name, &bytes)?;
        info!(name = %name, entries = self.current_list.len(), "saved list");

        self.current_list_name = Some(name.clone());
        self.write_default_snapshot(&bytes);
        Ok(name)
    }

    /// Writes the default snapshot if there are unsaved changes.
    ///
    /// Returns whether a write happened.
    pub fn save_default_snapshot(&mut self) -> Result<bool, StoreError> {
        if !self.dirty {
            return Ok(false);
        }
        let bytes = self.current_list.to_json()?;
        self.storage.write(DEFAULT_SNAPSHOT_NAME, &bytes)?;
        self.dirty = false;
        debug!(entries = self.current_list.len(), "wrote default snapshot");
        Ok(true)
    }

    /// Replaces the current list with the saved list `name`.
    ///
    /// The previous list is discarded without saving. Undecodable content is reported as
    /// not found.
    pub fn load(&mut self, name: &str) -> Result<ListName, StoreError> {
        let name = parse_list_name(name)?;
        let bytes = self
            .storage
            .read(&name)
            .map_err(StoreError::from_storage)?;
        let list = BookmarkList::from_json(&bytes).map_err(|e| {
            warn!(name = %name, "saved list is corrupt: {e}");
            StoreError::NotFound(name.to_string())
        })?;

        info!(name = %name, entries = list.len(), "loaded list");
        self.current_list = list;
        self.current_list_name = Some(name.clone());
        self.write_default_snapshot(&bytes);
        Ok(name)
    }

    /// Deletes the saved list `name` after `confirm` agrees.
    ///
    /// The current list is kept even when it was loaded from `name`; only the name is cleared.
    pub fn delete_saved(
        &mut self,
        name: &str,
        confirm: impl FnOnce(&ListName) -> bool,
    ) -> Result<ListName, StoreError> {
        let name = parse_list_name(name)?;
        if !self.storage.exists(&name) {
            return Err(StoreError::NotFound(name.to_string()));
        }
        if !confirm(&name) {
            return Err(StoreError::Cancelled(name.to_string()));
        }

        self.storage
            .delete(&name)
            .map_err(StoreError::from_storage)?;
        info!(name = %name, "deleted saved list");

        if self.current_list_name.as_ref() == Some(&name) {
            self.current_list_name = None;
        }
        Ok(name)
    }

    /// Names of all saved lists in lexicographic order.
    ///
    /// Files whose stem is not already a valid list name are skipped, so every listed name
    /// can be loaded as is.
    pub fn list_saved_names(&self) -> Result<Vec<ListName>, StoreError> {
        let mut names: Vec<ListName> = self
            .storage
            .list_names()?
            .into_iter()
            .filter_map(|stem| {
                ListName::try_new(stem.as_str())
                    .ok()
                    .filter(|name| name.as_str() == stem)
            })
            .collect();
        names.sort();
        Ok(names)
    }

    /// Mirrors `bytes` (the current list, already encoded) into the default snapshot.
    ///
    /// Only called after a successful named read or write, which already makes the list clean.
    /// A failed mirror is logged and does not undo that.
    fn write_default_snapshot(&mut self, bytes: &[u8]) {
        self.dirty = false;
        if let Err(e) = self.storage.write(DEFAULT_SNAPSHOT_NAME, bytes) {
            warn!("failed to update default snapshot: {e}");
        }
    }
}

#[cfg(test)]
mod tests;
