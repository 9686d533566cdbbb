//! State of a contest detail view.
//!
//! A view moves `Idle -> Loading -> Loaded | Failed`. Asking for another id
//! while a lookup is in flight re-enters `Loading` and supersedes the earlier
//! request: its outcome is discarded when it eventually arrives.

use serde::Serialize;

use crate::contest::Contest;
use crate::error::ContestError;

/// Identifies the lookup a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag {
    id: u64,
    generation: u64,
}

impl RequestTag {
    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailState {
    #[default]
    Idle,
    Loading { id: u64 },
    Loaded { contest: Contest },
    Failed { id: u64, error: ContestError },
}

#[derive(Debug, Default)]
pub struct DetailView {
    state: DetailState,
    current: Option<RequestTag>,
    generation: u64,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Start a lookup for `id`, superseding any request still in flight
    pub fn request(&mut self, id: u64) -> RequestTag {
        self.generation += 1;
        let tag = RequestTag {
            id,
            generation: self.generation,
        };
        self.current = Some(tag);
        self.state = DetailState::Loading { id };
        tag
    }

    /// Apply the outcome of the lookup identified by `tag`
    ///
    /// Returns `false` and leaves the state untouched when `tag` is not the
    /// most recent request.
    pub fn complete(&mut self, tag: RequestTag, outcome: Result<Contest, ContestError>) -> bool {
        if self.current != Some(tag) {
            return false;
        }

        self.current = None;
        self.state = match outcome {
            Ok(contest) => DetailState::Loaded { contest },
            Err(error) => DetailState::Failed { id: tag.id, error },
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contest::{ContestPhase, ContestType};

    fn create_test_contest(id: u64) -> Contest {
        Contest {
            id,
            name: format!("Contest {id}"),
            contest_type: ContestType::CF,
            phase: ContestPhase::Finished,
            frozen: false,
            duration_seconds: 7200,
            start_time_seconds: None,
            relative_time_seconds: None,
        }
    }

    #[test]
    fn test_starts_idle() {
        assert_eq!(DetailView::new().state(), &DetailState::Idle);
    }

    #[test]
    fn test_request_then_loaded() {
        let mut view = DetailView::new();
        let tag = view.request(1);
        assert_eq!(view.state(), &DetailState::Loading { id: 1 });

        assert!(view.complete(tag, Ok(create_test_contest(1))));
        assert_eq!(
            view.state(),
            &DetailState::Loaded {
                contest: create_test_contest(1)
            }
        );
    }

    #[test]
    fn test_request_then_failed() {
        let mut view = DetailView::new();
        let tag = view.request(7);

        assert!(view.complete(tag, Err(ContestError::NotFound(7))));
        assert_eq!(
            view.state(),
            &DetailState::Failed {
                id: 7,
                error: ContestError::NotFound(7)
            }
        );
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut view = DetailView::new();
        let first = view.request(1);
        let second = view.request(2);

        // The slow response for id 1 arrives after id 2 was requested
        assert!(!view.complete(first, Ok(create_test_contest(1))));
        assert_eq!(view.state(), &DetailState::Loading { id: 2 });

        assert!(view.complete(second, Ok(create_test_contest(2))));
        assert_eq!(
            view.state(),
            &DetailState::Loaded {
                contest: create_test_contest(2)
            }
        );
    }

    #[test]
    fn test_stale_response_after_newer_completed() {
        let mut view = DetailView::new();
        let first = view.request(1);
        let second = view.request(2);

        assert!(view.complete(second, Err(ContestError::Network("timeout".to_string()))));
        assert!(!view.complete(first, Ok(create_test_contest(1))));
        assert!(matches!(view.state(), DetailState::Failed { id: 2, .. }));
    }

    #[test]
    fn test_rerequest_same_id_supersedes() {
        let mut view = DetailView::new();
        let first = view.request(3);
        let second = view.request(3);

        assert_eq!(first.id(), second.id());
        assert!(!view.complete(first, Err(ContestError::NotFound(3))));
        assert!(view.complete(second, Ok(create_test_contest(3))));
    }

    #[test]
    fn test_state_serializes_with_tag() {
        let json = serde_json::to_value(DetailState::Loading { id: 5 }).unwrap();
        assert_eq!(json["state"], "loading");
        assert_eq!(json["id"], 5);
    }
}
