use cfdash_core::favorites::FavoriteSet;
use cfdash_core::ContestError;

use crate::store::{SlotStore, FAVORITES_KEY};

/// Favorite contest ids, persisted on every change
#[derive(Debug)]
pub struct FavoritesStore {
    store: SlotStore,
    favorites: FavoriteSet,
}

impl FavoritesStore {
    /// Load the persisted set, starting empty when absent or unreadable
    pub fn load(store: SlotStore) -> Self {
        let favorites = match store.read(FAVORITES_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring corrupt favorites: {e}");
                FavoriteSet::new()
            }),
            Ok(None) => FavoriteSet::new(),
            Err(e) => {
                log::warn!("Ignoring favorites: {e}");
                FavoriteSet::new()
            }
        };

        Self { store, favorites }
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Flip `id` and persist the set before returning.
    ///
    /// Returns whether `id` is now a favorite. The in-memory set only
    /// changes once the write succeeds.
    pub fn toggle(&mut self, id: u64) -> Result<bool, ContestError> {
        let mut next = self.favorites.clone();
        let favorite = next.toggle(id);

        let raw =
            serde_json::to_string(&next).map_err(|e| ContestError::Storage(e.to_string()))?;
        self.store.write(FAVORITES_KEY, &raw)?;

        self.favorites = next;
        log::debug!("Contest {id} favorite: {favorite}");

        Ok(favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FavoritesStore::load(SlotStore::new(temp_dir.path()));

        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_toggle_persists_immediately() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FavoritesStore::load(SlotStore::new(temp_dir.path()));

        assert!(store.toggle(1900).unwrap());
        assert!(store.toggle(42).unwrap());

        let reloaded = FavoritesStore::load(SlotStore::new(temp_dir.path()));
        assert!(reloaded.favorites().contains(1900));
        assert!(reloaded.favorites().contains(42));
        assert_eq!(reloaded.favorites().len(), 2);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FavoritesStore::load(SlotStore::new(temp_dir.path()));
        store.toggle(1).unwrap();
        let before = store.favorites().clone();

        assert!(store.toggle(7).unwrap());
        assert!(!store.toggle(7).unwrap());

        assert_eq!(store.favorites(), &before);
        let reloaded = FavoritesStore::load(SlotStore::new(temp_dir.path()));
        assert_eq!(reloaded.favorites(), &before);
    }

    #[test]
    fn test_toggle_failure_leaves_set_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("data");
        std::fs::write(&not_a_dir, "").unwrap();
        let mut store = FavoritesStore::load(SlotStore::new(&not_a_dir));

        assert!(matches!(store.toggle(5), Err(ContestError::Storage(_))));
        assert!(!store.favorites().contains(5));

        assert!(store.toggle(5).is_err());
        assert!(!store.favorites().contains(5));
    }

    #[test]
    fn test_corrupt_favorites_start_empty() {
        let temp_dir = TempDir::new().unwrap();
        let slots = SlotStore::new(temp_dir.path());
        slots.write(FAVORITES_KEY, "{\"oops\": true}").unwrap();

        let store = FavoritesStore::load(slots);

        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_favorites_independent_of_contest_cache() {
        let temp_dir = TempDir::new().unwrap();
        let slots = SlotStore::new(temp_dir.path());
        let mut store = FavoritesStore::load(slots.clone());
        store.toggle(5).unwrap();

        slots.remove(crate::store::CONTESTS_KEY).unwrap();

        assert!(FavoritesStore::load(slots).favorites().contains(5));
    }
}
