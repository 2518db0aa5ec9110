use super::source::StorySource;
use crate::transport::{HttpConfig, HttpTransport};
use crate::types::Story;
use crate::Result;
use async_trait::async_trait;
use tracing::debug;

const NEW_STORIES_PATH: &str = "newstories.json";

/// [`StorySource`] backed by the public Hacker News Firebase API.
pub struct HackerNewsClient {
    transport: HttpTransport,
}

impl HackerNewsClient {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url().as_str()
    }
}

#[async_trait]
impl StorySource for HackerNewsClient {
    async fn fetch_new_story_ids(&self) -> Result<Vec<u64>> {
        let ids: Vec<u64> = self.transport.get_json(NEW_STORIES_PATH).await?;
        debug!(count = ids.len(), "fetched new story ids");
        Ok(ids)
    }

    async fn fetch_story(&self, id: u64) -> Result<Option<Story>> {
        self.transport
            .get_optional_json(&format!("item/{}.json", id))
            .await
    }
}
