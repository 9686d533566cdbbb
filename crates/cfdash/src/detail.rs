use cfdash_core::contest::Contest;
use cfdash_core::detail::RequestTag;
use cfdash_core::ContestError;

use crate::source::ContestSource;

/// Looks up a single contest straight from the source.
///
/// Every lookup downloads the full listing again; the repository's cache is
/// not consulted, so the detail view always reflects the remote state.
pub struct DetailResolver<S> {
    source: S,
}

impl<S: ContestSource> DetailResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn find_by_id(&self, id: u64) -> Result<Contest, ContestError> {
        let contests = self.source.fetch_all().await?;

        contests
            .into_iter()
            .find(|contest| contest.id == id)
            .ok_or(ContestError::NotFound(id))
    }

    /// Run the lookup a `DetailView` asked for, returning the outcome with
    /// its tag so the view can drop it if it was superseded meanwhile
    pub async fn resolve(&self, tag: RequestTag) -> (RequestTag, Result<Contest, ContestError>) {
        (tag, self.find_by_id(tag.id()).await)
    }
}
