//! Cache key generation.

use serde::{Deserialize, Serialize};

const NEW_STORY_IDS: &str = "new_story_ids";
const TOP_STORIES: &str = "top_stories";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub hash: String,
}

impl CacheKey {
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Fixed key for the ranked new-story id list.
    pub fn new_story_ids() -> Self {
        Self::new(NEW_STORY_IDS)
    }

    /// Fixed key for the filtered top-stories list.
    pub fn top_stories() -> Self {
        Self::new(TOP_STORIES)
    }

    /// Per-item key.
    pub fn story(id: u64) -> Self {
        Self::new(format!("story:{}", id))
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash)
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CacheKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
