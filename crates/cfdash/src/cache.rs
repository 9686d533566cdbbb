use cfdash_core::contest::{ensure_unique_ids, Contest};
use cfdash_core::ContestError;

use crate::store::{SlotStore, CONTESTS_KEY};

/// Single-slot snapshot of the last successfully fetched collection.
///
/// There is no expiry: once written the snapshot is served until `clear`.
#[derive(Debug, Clone)]
pub struct LocalCache {
    store: SlotStore,
}

impl LocalCache {
    pub fn new(store: SlotStore) -> Self {
        Self { store }
    }

    /// Cached collection, or `None` when the slot is empty, unreadable or
    /// holds duplicate ids
    pub fn get(&self) -> Option<Vec<Contest>> {
        let raw = match self.store.read(CONTESTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Ignoring contest cache: {e}");
                return None;
            }
        };

        let contests: Vec<Contest> = match serde_json::from_str(&raw) {
            Ok(contests) => contests,
            Err(e) => {
                log::warn!("Ignoring corrupt contest cache: {e}");
                return None;
            }
        };

        if let Err(e) = ensure_unique_ids(&contests) {
            log::warn!("Ignoring corrupt contest cache: {e}");
            return None;
        }

        Some(contests)
    }

    /// Store `contests`; failures are logged, never returned
    pub fn put(&self, contests: &[Contest]) {
        let result = serde_json::to_string(contests)
            .map_err(|e| ContestError::Storage(e.to_string()))
            .and_then(|raw| self.store.write(CONTESTS_KEY, &raw));

        if let Err(e) = result {
            log::warn!("Failed to cache contests: {e}");
        }
    }

    pub fn clear(&self) -> Result<(), ContestError> {
        self.store.remove(CONTESTS_KEY)
    }
}
