//! Favorite contest ids.
//!
//! The set is never validated against a collection: an id whose contest has
//! disappeared from the remote listing stays favorited until toggled off.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Set of favorite contest ids, serialized as a JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: BTreeSet<u64>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if present, insert it otherwise.
    ///
    /// Returns `true` when `id` is a favorite after the call.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<u64> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = FavoriteSet::new();

        assert!(favorites.toggle(1900));
        assert!(favorites.contains(1900));
        assert!(!favorites.toggle(1900));
        assert!(!favorites.contains(1900));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_double_toggle_is_noop() {
        let mut favorites: FavoriteSet = [1, 2, 3].into_iter().collect();
        let before = favorites.clone();

        favorites.toggle(2);
        favorites.toggle(2);
        favorites.toggle(99);
        favorites.toggle(99);

        assert_eq!(favorites, before);
    }

    #[test]
    fn test_toggle_sequence_matches_odd_counts() {
        // An id ends up favorited iff it was toggled an odd number of times
        let toggles = [5, 3, 5, 8, 3, 3, 1, 8, 8, 5];
        let mut favorites = FavoriteSet::new();
        for id in toggles {
            favorites.toggle(id);
        }

        let expected: FavoriteSet = [1, 3, 5, 8]
            .into_iter()
            .filter(|id| toggles.iter().filter(|t| *t == id).count() % 2 == 1)
            .collect();

        assert_eq!(favorites, expected);
        assert_eq!(favorites.iter().collect::<Vec<_>>(), vec![1, 3, 5, 8]);
    }

    #[test]
    fn test_serializes_as_array() {
        let favorites: FavoriteSet = [42, 7].into_iter().collect();

        assert_eq!(serde_json::to_string(&favorites).unwrap(), "[7,42]");

        let parsed: FavoriteSet = serde_json::from_str("[3, 1, 3]").unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(parsed.contains(1));
        assert!(parsed.contains(3));
    }
}
