use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cfdash_core::contest::{parse_contest_list, Contest};
use cfdash_core::ContestError;

pub const DEFAULT_API_BASE: &str = "https://codeforces.com/api";

/// Where the full contest collection comes from
#[async_trait]
pub trait ContestSource: Send + Sync {
    /// Fetch the whole collection in source order. One attempt, no retry.
    async fn fetch_all(&self) -> Result<Vec<Contest>, ContestError>;
}

#[async_trait]
impl<T: ContestSource + ?Sized> ContestSource for Arc<T> {
    async fn fetch_all(&self) -> Result<Vec<Contest>, ContestError> {
        (**self).fetch_all().await
    }
}

/// Source shared between the repository and the detail resolver
pub type SharedSource = Arc<dyn ContestSource>;

/// `contest.list` over HTTP
#[derive(Debug, Clone)]
pub struct HttpContestSource {
    client: reqwest::Client,
    api_base: String,
}

impl HttpContestSource {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self, ContestError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cfdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ContestError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}/contest.list", self.api_base)
    }
}

#[async_trait]
impl ContestSource for HttpContestSource {
    async fn fetch_all(&self) -> Result<Vec<Contest>, ContestError> {
        let url = self.url();
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ContestError::Network(format!("Failed to fetch contests: {e}")))?;

        if !response.status().is_success() {
            return Err(ContestError::Network(format!(
                "Failed to fetch contests: HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ContestError::Network(format!("Failed to read response body: {e}")))?;

        let contests = parse_contest_list(&body)?;
        log::debug!("Fetched {} contests", contests.len());

        Ok(contests)
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use cfdash_core::contest::{ContestPhase, ContestType};

    use super::*;

    pub fn create_test_contest(id: u64, name: &str, contest_type: ContestType) -> Contest {
        Contest {
            id,
            name: name.to_string(),
            contest_type,
            phase: ContestPhase::Finished,
            frozen: false,
            duration_seconds: 7200,
            start_time_seconds: Some(1609459200),
            relative_time_seconds: None,
        }
    }

    pub fn create_test_collection() -> Vec<Contest> {
        vec![
            create_test_contest(1, "Codeforces Round 900 (Div. 2)", ContestType::CF),
            create_test_contest(2, "ICPC Regional Finals", ContestType::ICPC),
            create_test_contest(3, "Educational Round (Div. 2)", ContestType::CF),
        ]
    }

    /// Replays queued outcomes, then keeps returning the last one
    pub struct ScriptedSource {
        outcomes: Mutex<VecDeque<Result<Vec<Contest>, ContestError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        pub fn new(outcomes: Vec<Result<Vec<Contest>, ContestError>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn ok(contests: Vec<Contest>) -> Self {
            Self::new(vec![Ok(contests)])
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContestSource for ScriptedSource {
        async fn fetch_all(&self) -> Result<Vec<Contest>, ContestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.len() > 1 {
                outcomes.pop_front().unwrap()
            } else {
                outcomes
                    .front()
                    .cloned()
                    .unwrap_or_else(|| Err(ContestError::Network("no scripted outcome".to_string())))
            }
        }
    }
}
