use crate::types::Story;
use crate::Result;
use async_trait::async_trait;

/// Read-only access to the upstream story API.
///
/// Implementations are dumb transports: no caching, no capping, no
/// filtering. Those belong to the service layer.
#[async_trait]
pub trait StorySource: Send + Sync {
    /// Current "new stories" ranking, as many ids as upstream returns.
    async fn fetch_new_story_ids(&self) -> Result<Vec<u64>>;

    /// One item by id. `Ok(None)` means upstream does not know the id.
    async fn fetch_story(&self, id: u64) -> Result<Option<Story>>;
}
