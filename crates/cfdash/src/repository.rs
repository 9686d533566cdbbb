use cfdash_core::contest::Contest;
use cfdash_core::ContestError;

use crate::cache::LocalCache;
use crate::source::ContestSource;

/// Authoritative in-memory contest collection.
///
/// Served from the local cache when it holds a snapshot, otherwise fetched
/// once from the source and cached. Fetch failures are logged and degrade to
/// an empty collection; the next `get_all` tries again.
pub struct ContestRepository<S> {
    source: S,
    cache: LocalCache,
    snapshot: Option<Vec<Contest>>,
}

impl<S: ContestSource> ContestRepository<S> {
    pub fn new(source: S, cache: LocalCache) -> Self {
        Self {
            source,
            cache,
            snapshot: None,
        }
    }

    pub async fn get_all(&mut self) -> &[Contest] {
        if self.snapshot.is_none() {
            self.snapshot = self.load().await;
        }

        self.snapshot.as_deref().unwrap_or(&[])
    }

    async fn load(&self) -> Option<Vec<Contest>> {
        if let Some(contests) = self.cache.get() {
            log::debug!("Serving {} contests from cache", contests.len());
            return Some(contests);
        }

        log::debug!("Contest cache is empty, fetching");
        match self.source.fetch_all().await {
            Ok(contests) => {
                self.cache.put(&contests);
                Some(contests)
            }
            Err(e) => {
                log::error!("Error fetching contests: {e}");
                None
            }
        }
    }

    /// Drop the in-memory and cached snapshot so the next `get_all` fetches
    pub fn invalidate(&mut self) -> Result<(), ContestError> {
        self.snapshot = None;
        self.cache.clear()
    }
}
