//! Filtering and search over a contest collection.

use serde::{Deserialize, Serialize};

use crate::contest::{Contest, ContestType};
use crate::favorites::FavoriteSet;

/// Narrowing applied to a collection before pagination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub type_filter: Option<ContestType>,
    pub favorites_only: bool,
    pub search_term: String,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, contest_type: ContestType) -> Self {
        self.type_filter = Some(contest_type);
        self
    }

    pub fn favorites_only(mut self) -> Self {
        self.favorites_only = true;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }
}

/// Apply `spec` to `collection`, keeping the collection's order.
///
/// `favorites_only` takes precedence over `type_filter`: when both are set
/// only the favorites filter runs. The search term then matches contest
/// names case-insensitively at any position; an empty term matches all.
pub fn apply(collection: &[Contest], favorites: &FavoriteSet, spec: &QuerySpec) -> Vec<Contest> {
    let needle = spec.search_term.to_lowercase();

    collection
        .iter()
        .filter(|contest| {
            if spec.favorites_only {
                favorites.contains(contest.id)
            } else if let Some(contest_type) = &spec.type_filter {
                &contest.contest_type == contest_type
            } else {
                true
            }
        })
        .filter(|contest| contest.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contest::ContestPhase;

    fn create_test_contest(id: u64, name: &str, contest_type: ContestType) -> Contest {
        Contest {
            id,
            name: name.to_string(),
            contest_type,
            phase: ContestPhase::Finished,
            frozen: false,
            duration_seconds: 7200,
            start_time_seconds: Some(1_700_000_000),
            relative_time_seconds: None,
        }
    }

    fn create_test_collection() -> Vec<Contest> {
        vec![
            create_test_contest(1, "Codeforces Round 900 (Div. 2)", ContestType::CF),
            create_test_contest(2, "ICPC Regional Finals", ContestType::ICPC),
            create_test_contest(3, "Educational Round (DIV. 2)", ContestType::CF),
            create_test_contest(4, "Codeforces Global Round", ContestType::CF),
            create_test_contest(5, "IOI Division Practice", ContestType::IOI),
        ]
    }

    fn ids(contests: &[Contest]) -> Vec<u64> {
        contests.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_apply_empty_spec_passes_through() {
        let collection = create_test_collection();
        let result = apply(&collection, &FavoriteSet::new(), &QuerySpec::new());

        assert_eq!(result, collection);
    }

    #[test]
    fn test_apply_type_and_search() {
        let collection = create_test_collection();
        let spec = QuerySpec::new().with_type(ContestType::CF).with_search("div");

        let result = apply(&collection, &FavoriteSet::new(), &spec);

        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_apply_search_is_case_insensitive_anywhere() {
        let collection = create_test_collection();
        let spec = QuerySpec::new().with_search("ROUND");

        let result = apply(&collection, &FavoriteSet::new(), &spec);

        assert_eq!(ids(&result), vec![1, 3, 4]);
    }

    #[test]
    fn test_apply_favorites_only_with_no_favorites() {
        let collection = vec![
            create_test_contest(1, "Codeforces Round 900", ContestType::CF),
            create_test_contest(2, "ICPC Regional Finals", ContestType::ICPC),
        ];
        let spec = QuerySpec::new().favorites_only();

        assert!(apply(&collection, &FavoriteSet::new(), &spec).is_empty());
    }

    #[test]
    fn test_apply_favorites_take_precedence_over_type() {
        let collection = create_test_collection();
        let favorites: FavoriteSet = [2, 4].into_iter().collect();
        let spec = QuerySpec::new().with_type(ContestType::CF).favorites_only();

        let result = apply(&collection, &favorites, &spec);

        assert_eq!(ids(&result), vec![2, 4]);
    }

    #[test]
    fn test_apply_favorites_then_search() {
        let collection = create_test_collection();
        let favorites: FavoriteSet = [1, 2, 99].into_iter().collect();
        let spec = QuerySpec::new().favorites_only().with_search("icpc");

        assert_eq!(ids(&apply(&collection, &favorites, &spec)), vec![2]);
    }

    #[test]
    fn test_apply_preserves_source_order() {
        let mut collection = create_test_collection();
        collection.reverse();
        let spec = QuerySpec::new().with_type(ContestType::CF);

        assert_eq!(ids(&apply(&collection, &FavoriteSet::new(), &spec)), vec![4, 3, 1]);
    }

    #[test]
    fn test_apply_is_deterministic() {
        let collection = create_test_collection();
        let spec = QuerySpec::new().with_search("o");
        let favorites = FavoriteSet::new();

        assert_eq!(
            apply(&collection, &favorites, &spec),
            apply(&collection, &favorites, &spec)
        );
    }
}
