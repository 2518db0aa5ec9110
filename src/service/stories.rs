use super::validation::{self, PageWindow};
use crate::cache::{CacheConfig, CacheKey, CacheManager, MemoryCache};
use crate::client::StorySource;
use crate::types::Story;
use crate::{Error, Result};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Tunables for [`StoryService`].
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Lifetime of every cache entry.
    pub cache_ttl: Duration,
    /// How many ids of the upstream ranking are kept.
    pub max_story_ids: usize,
    /// Story fetches in flight at once during a batch.
    pub batch_concurrency: usize,
    /// Capacity of the in-memory cache.
    pub cache_max_entries: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(300),
            max_story_ids: 200,
            batch_concurrency: 200,
            cache_max_entries: 10_000,
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
    pub fn with_max_story_ids(mut self, n: usize) -> Self {
        self.max_story_ids = n;
        self
    }
    pub fn with_batch_concurrency(mut self, n: usize) -> Self {
        self.batch_concurrency = n.max(1);
        self
    }
    pub fn with_cache_max_entries(mut self, n: usize) -> Self {
        self.cache_max_entries = n.max(1);
        self
    }
}

/// Fetch orchestration over a [`StorySource`] and a [`CacheManager`].
///
/// Every read goes through the cache with the configured TTL. Individual
/// story failures shrink results; only a failure to get the id ranking
/// fails a call.
pub struct StoryService {
    source: Arc<dyn StorySource>,
    cache: Arc<CacheManager>,
    config: ServiceConfig,
}

impl StoryService {
    pub fn new(
        source: Arc<dyn StorySource>,
        cache: Arc<CacheManager>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            source,
            cache,
            config,
        }
    }

    /// Service with a private bounded in-memory cache sized from `config`.
    pub fn with_memory_cache(source: Arc<dyn StorySource>, config: ServiceConfig) -> Self {
        let cache = CacheManager::new(
            CacheConfig::new().with_ttl(config.cache_ttl),
            Box::new(MemoryCache::new(config.cache_max_entries)),
        );
        Self::new(source, Arc::new(cache), config)
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<CacheManager> {
        &self.cache
    }

    /// The upstream "new stories" ranking, capped to `max_story_ids`.
    pub async fn get_new_story_ids(&self) -> Result<Vec<u64>> {
        let cap = self.config.max_story_ids;
        self.cache
            .get_or_create(&CacheKey::new_story_ids(), self.config.cache_ttl, || async move {
                let mut ids = self.source.fetch_new_story_ids().await?;
                ids.truncate(cap);
                info!(count = ids.len(), "refreshed new story ids");
                Ok(ids)
            })
            .await
    }

    /// One story, or `None` when upstream does not have it or the fetch
    /// failed. Misses are not cached.
    pub async fn get_story_by_id(&self, id: u64) -> Option<Story> {
        let result = self
            .cache
            .get_or_create(&CacheKey::story(id), self.config.cache_ttl, || async move {
                self.source
                    .fetch_story(id)
                    .await?
                    .ok_or(Error::NotFound { id })
            })
            .await;
        match result {
            Ok(story) => Some(story),
            Err(Error::NotFound { .. }) => {
                debug!(id, "story not found upstream");
                None
            }
            Err(e) => {
                warn!(id, error = %e, "error fetching story");
                None
            }
        }
    }

    /// First `count` linked stories of the current ranking.
    ///
    /// The filtered list is computed once per TTL window over the whole
    /// capped ranking and shared by every `count`, so a smaller request is
    /// always a prefix of a larger one.
    pub async fn get_top_stories(&self, count: usize) -> Result<Vec<Story>> {
        let count = validation::validate_count(i64::try_from(count).unwrap_or(i64::MAX))?;
        let stories: Vec<Story> = self
            .cache
            .get_or_create(&CacheKey::top_stories(), self.config.cache_ttl, || async move {
                let ids = self.get_new_story_ids().await?;
                let batch = &ids[..ids.len().min(self.config.max_story_ids)];
                let stories = self.fetch_linked_batch(batch).await;
                info!(
                    requested = batch.len(),
                    kept = stories.len(),
                    "computed top stories"
                );
                Ok(stories)
            })
            .await?;
        Ok(stories.into_iter().take(count).collect())
    }

    /// One page of the ranking, resolved story by story.
    ///
    /// Paging is over ids, so a page shrinks when some of its stories are
    /// missing or unlinked.
    pub async fn new_stories(&self, page: i64, page_size: i64) -> Result<Vec<Story>> {
        let window = validation::validate_page(page, page_size)?;
        let ids = self.get_new_story_ids().await?;
        let mut stories = Vec::with_capacity(window.take);
        for id in window.apply(ids) {
            if let Some(story) = self.get_story_by_id(id).await.filter(Story::has_link) {
                stories.push(story);
            }
        }
        Ok(stories)
    }

    /// Linked stories whose title contains `query` (case-insensitive),
    /// paged after matching.
    pub async fn search_stories(&self, query: &str, page: i64, page_size: i64) -> Result<Vec<Story>> {
        let needle = validation::validate_query(query)?;
        let window: PageWindow = validation::validate_page(page, page_size)?;
        let ids = self.get_new_story_ids().await?;
        let matches: Vec<Story> = self
            .fetch_linked_batch(&ids)
            .await
            .into_iter()
            .filter(|story| story.title_contains(&needle))
            .collect();
        debug!(query, matches = matches.len(), "search complete");
        Ok(window.apply(matches))
    }

    /// Fetch `ids` concurrently and keep the linked stories, in input order.
    async fn fetch_linked_batch(&self, ids: &[u64]) -> Vec<Story> {
        stream::iter(ids.iter().copied())
            .map(|id| self.get_story_by_id(id))
            .buffered(self.config.batch_concurrency.max(1))
            .filter_map(|story| async move { story.filter(Story::has_link) })
            .collect()
            .await
    }
}
