//! Cache backend implementations.

use super::key::CacheKey;
use crate::Result;
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

struct CacheEntry {
    data: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &CacheKey) -> Result<Option<Vec<u8>>>;
    async fn set(&self, key: &CacheKey, value: &[u8], ttl: Duration) -> Result<()>;
    async fn delete(&self, key: &CacheKey) -> Result<bool>;
    async fn exists(&self, key: &CacheKey) -> Result<bool>;
    async fn clear(&self) -> Result<()>;
    async fn len(&self) -> Result<usize>;
    /// Drop every expired entry, returning how many were removed.
    async fn purge_expired(&self) -> Result<usize> {
        Ok(0)
    }
    fn name(&self) -> &'static str;
}

/// Bounded in-memory store with per-entry TTL.
///
/// Entries live in an LRU map: inserting a new key at capacity evicts the
/// least recently used entry. Expired entries are dropped when a lookup
/// finds them and by [`CacheBackend::purge_expired`].
pub struct MemoryCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new(max_entries: usize) -> Self {
        let cap = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(cap)),
        }
    }

    pub fn max_entries(&self) -> usize {
        self.lock().cap().get()
    }

    // A poisoned lock only means another task panicked mid-update; the map
    // itself is still a valid cache.
    fn lock(&self) -> MutexGuard<'_, LruCache<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(10_000)
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<Vec<u8>>> {
        let mut entries = self.lock();
        let expired = match entries.get(&key.hash) {
            Some(entry) if !entry.is_expired() => return Ok(Some(entry.data.clone())),
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.pop(&key.hash);
        }
        Ok(None)
    }
    async fn set(&self, key: &CacheKey, value: &[u8], ttl: Duration) -> Result<()> {
        self.lock()
            .put(key.hash.clone(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }
    async fn delete(&self, key: &CacheKey) -> Result<bool> {
        Ok(self.lock().pop(&key.hash).is_some())
    }
    async fn exists(&self, key: &CacheKey) -> Result<bool> {
        Ok(self
            .lock()
            .peek(&key.hash)
            .map(|e| !e.is_expired())
            .unwrap_or(false))
    }
    async fn clear(&self) -> Result<()> {
        self.lock().clear();
        Ok(())
    }
    async fn len(&self) -> Result<usize> {
        Ok(self.lock().iter().filter(|(_, e)| !e.is_expired()).count())
    }
    async fn purge_expired(&self) -> Result<usize> {
        let mut entries = self.lock();
        let expired: Vec<String> = entries
            .iter()
            .filter(|(_, e)| e.is_expired())
            .map(|(k, _)| k.clone())
            .collect();
        for key in &expired {
            entries.pop(key);
        }
        Ok(expired.len())
    }
    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Backend that stores nothing; every lookup misses.
pub struct NullCache;
impl NullCache {
    pub fn new() -> Self {
        Self
    }
}
impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheBackend for NullCache {
    async fn get(&self, _: &CacheKey) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }
    async fn set(&self, _: &CacheKey, _: &[u8], _: Duration) -> Result<()> {
        Ok(())
    }
    async fn delete(&self, _: &CacheKey) -> Result<bool> {
        Ok(false)
    }
    async fn exists(&self, _: &CacheKey) -> Result<bool> {
        Ok(false)
    }
    async fn clear(&self) -> Result<()> {
        Ok(())
    }
    async fn len(&self) -> Result<usize> {
        Ok(0)
    }
    fn name(&self) -> &'static str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_memory_get_set_delete() {
        let cache = MemoryCache::new(10);
        let key = CacheKey::story(1);
        assert_eq!(cache.get(&key).await.unwrap(), None);

        cache.set(&key, b"one", MINUTE).await.unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), Some(b"one".to_vec()));
        assert!(cache.exists(&key).await.unwrap());
        assert_eq!(cache.len().await.unwrap(), 1);

        assert!(cache.delete(&key).await.unwrap());
        assert!(!cache.delete(&key).await.unwrap());
        assert!(!cache.exists(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_memory_entry_expires() {
        let cache = MemoryCache::new(10);
        let key = CacheKey::new_story_ids();
        cache.set(&key, b"[1,2,3]", Duration::from_millis(20)).await.unwrap();
        assert!(cache.get(&key).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(!cache.exists(&key).await.unwrap());
        assert_eq!(cache.get(&key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_respects_capacity() {
        let cache = MemoryCache::new(3);
        for id in 0..10u64 {
            cache.set(&CacheKey::story(id), b"x", MINUTE).await.unwrap();
        }
        assert_eq!(cache.len().await.unwrap(), 3);
        // most recent insert always survives
        assert!(cache.exists(&CacheKey::story(9)).await.unwrap());
    }

    #[tokio::test]
    async fn test_memory_evicts_least_recently_accessed() {
        let cache = MemoryCache::new(2);
        cache.set(&CacheKey::story(1), b"a", MINUTE).await.unwrap();
        cache.set(&CacheKey::story(2), b"b", MINUTE).await.unwrap();
        // touch 1 so 2 becomes the eviction candidate
        cache.get(&CacheKey::story(1)).await.unwrap();
        cache.set(&CacheKey::story(3), b"c", MINUTE).await.unwrap();

        assert!(cache.exists(&CacheKey::story(1)).await.unwrap());
        assert!(!cache.exists(&CacheKey::story(2)).await.unwrap());
        assert!(cache.exists(&CacheKey::story(3)).await.unwrap());
    }

    #[tokio::test]
    async fn test_memory_overwrite_at_capacity_keeps_others() {
        let cache = MemoryCache::new(2);
        cache.set(&CacheKey::story(1), b"a", MINUTE).await.unwrap();
        cache.set(&CacheKey::story(2), b"b", MINUTE).await.unwrap();
        cache.set(&CacheKey::story(2), b"b2", MINUTE).await.unwrap();
        assert_eq!(cache.len().await.unwrap(), 2);
        assert_eq!(
            cache.get(&CacheKey::story(2)).await.unwrap(),
            Some(b"b2".to_vec())
        );
    }

    #[tokio::test]
    async fn test_memory_expired_entry_dropped_on_lookup() {
        let cache = MemoryCache::new(10);
        cache.set(&CacheKey::story(1), b"a", Duration::from_millis(10)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(cache.get(&CacheKey::story(1)).await.unwrap(), None);
        // already gone, nothing left to purge
        assert_eq!(cache.purge_expired().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_memory_zero_capacity_holds_one() {
        let cache = MemoryCache::new(0);
        assert_eq!(cache.max_entries(), 1);
        cache.set(&CacheKey::story(1), b"a", MINUTE).await.unwrap();
        cache.set(&CacheKey::story(2), b"b", MINUTE).await.unwrap();
        assert_eq!(cache.len().await.unwrap(), 1);
        assert!(cache.exists(&CacheKey::story(2)).await.unwrap());
    }

    #[tokio::test]
    async fn test_memory_purge_expired() {
        let cache = MemoryCache::new(10);
        cache.set(&CacheKey::story(1), b"a", Duration::from_millis(10)).await.unwrap();
        cache.set(&CacheKey::story(2), b"b", MINUTE).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(cache.purge_expired().await.unwrap(), 1);
        assert_eq!(cache.len().await.unwrap(), 1);
        cache.clear().await.unwrap();
        assert_eq!(cache.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_null_cache_never_hits() {
        let cache = NullCache::new();
        let key = CacheKey::top_stories();
        cache.set(&key, b"[]", MINUTE).await.unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), None);
        assert_eq!(cache.purge_expired().await.unwrap(), 0);
        assert_eq!(cache.name(), "null");
    }
}
