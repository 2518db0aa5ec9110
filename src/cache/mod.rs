//! Ephemeral cache: short-lived, process-local entries in front of upstream calls.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`CacheManager`] | Typed get/set/get-or-create with TTL, statistics and miss coalescing |
//! | [`CacheConfig`] | Default TTL and enable switch |
//! | [`CacheBackend`] | Trait for raw byte stores |
//! | [`MemoryCache`] | Bounded in-memory store with lazy expiry |
//! | [`NullCache`] | No-op store for disabling caching |
//! | [`CacheKey`] | Keys for the id list, the top list and individual stories |
//!
//! ## Example
//!
//! ```rust
//! use hn_facade::cache::{CacheConfig, CacheKey, CacheManager, MemoryCache};
//! use std::time::Duration;
//!
//! # async fn demo() -> hn_facade::Result<()> {
//! let cache = CacheManager::new(
//!     CacheConfig::new().with_ttl(Duration::from_secs(300)),
//!     Box::new(MemoryCache::new(1000)),
//! );
//! let ids: Vec<u64> = cache
//!     .get_or_create(&CacheKey::new_story_ids(), Duration::from_secs(300), || async {
//!         Ok(vec![1, 2, 3])
//!     })
//!     .await?;
//! assert_eq!(ids, vec![1, 2, 3]);
//! # Ok(())
//! # }
//! ```

mod backend;
mod key;
mod manager;

pub use backend::{CacheBackend, MemoryCache, NullCache};
pub use key::CacheKey;
pub use manager::{CacheConfig, CacheManager, CacheStats};
