use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::LocalCache;
use crate::detail::DetailResolver;
use crate::favorites::FavoritesStore;
use crate::prelude::{eprintln, *};
use crate::repository::ContestRepository;
use crate::source::{HttpContestSource, SharedSource};
use crate::store::SlotStore;

/// The stores and services a command works with, built once at startup
pub struct Session {
    pub repository: ContestRepository<SharedSource>,
    pub favorites: FavoritesStore,
    pub resolver: DetailResolver<SharedSource>,
}

impl Session {
    pub fn new(source: SharedSource, data_dir: impl Into<PathBuf>) -> Self {
        let store = SlotStore::new(data_dir);

        Self {
            repository: ContestRepository::new(source.clone(), LocalCache::new(store.clone())),
            favorites: FavoritesStore::load(store),
            resolver: DetailResolver::new(source),
        }
    }

    /// Build a session against the Codeforces API as configured by `global`
    pub fn open(global: &crate::Global) -> Result<Self> {
        let data_dir = global.data_dir()?;
        let source = HttpContestSource::new(
            global.api_base.clone(),
            Duration::from_secs(global.timeout),
        )?;

        if global.verbose {
            eprintln!("API base: {}", global.api_base);
            eprintln!("Data directory: {}", data_dir.display());
        }

        Ok(Self::new(Arc::new(source), data_dir))
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use crate::source::testing::{create_test_collection, ScriptedSource};
    use tempfile::TempDir;

    /// Session over the fixture collection; keep the `TempDir` alive
    pub fn create_test_session() -> (Session, Arc<ScriptedSource>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let source = Arc::new(ScriptedSource::ok(create_test_collection()));
        let session = Session::new(source.clone(), temp_dir.path());
        (session, source, temp_dir)
    }
}
