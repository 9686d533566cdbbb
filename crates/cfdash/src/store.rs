//! String-keyed persistent slots, one JSON file per key under a data directory.
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! reader never observes a half written slot.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use cfdash_core::ContestError;

pub const CONTESTS_KEY: &str = "contests";
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, Clone)]
pub struct SlotStore {
    root: PathBuf,
}

impl SlotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read a slot; a slot that was never written is `None`
    pub fn read(&self, key: &str) -> Result<Option<String>, ContestError> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ContestError::Storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Overwrite a slot
    pub fn write(&self, key: &str, value: &str) -> Result<(), ContestError> {
        fs::create_dir_all(&self.root).map_err(|e| {
            ContestError::Storage(format!(
                "Failed to create data directory {}: {e}",
                self.root.display()
            ))
        })?;

        let path = self.path(key);
        let tmp_path = self.root.join(format!(".{key}.json.tmp"));

        fs::write(&tmp_path, value)
            .and_then(|_| fs::rename(&tmp_path, &path))
            .map_err(|e| {
                ContestError::Storage(format!("Failed to write {}: {e}", path.display()))
            })?;

        log::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    /// Remove a slot; removing an empty slot is not an error
    pub fn remove(&self, key: &str) -> Result<(), ContestError> {
        let path = self.path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ContestError::Storage(format!(
                "Failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}
