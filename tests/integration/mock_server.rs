//! Mock Hacker News API for integration tests

#![allow(dead_code)]

use hn_facade::{HackerNewsClient, HackerNewsClientBuilder};
use mockito::{Mock, Server, ServerGuard};
use std::time::Duration;

/// Test fixture that manages a mock upstream rooted at `/v0/`
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = format!("{}/v0/", server.url());
        Self { server, base_url }
    }

    /// Create a client pointed at the mock server
    pub fn create_test_client(&self) -> HackerNewsClient {
        HackerNewsClientBuilder::new()
            .base_url_override(&self.base_url)
            .timeout(Duration::from_secs(5))
            .build()
            .expect("mock base URL is valid")
    }

    /// `newstories.json` answering with `ids`
    pub async fn mock_new_stories(&mut self, ids: &[u64]) -> Mock {
        let body = serde_json::to_string(ids).unwrap();
        self.mock_json("/v0/newstories.json", 200, &body).await
    }

    /// `item/{id}.json` answering with a linked story, or with `url` omitted
    /// when `url` is `None`
    pub async fn mock_story(&mut self, id: u64, title: &str, url: Option<&str>) -> Mock {
        let mut item = serde_json::json!({
            "id": id,
            "title": title,
            "by": "tester",
            "score": 1,
            "type": "story",
        });
        if let Some(url) = url {
            item["url"] = serde_json::Value::from(url);
        }
        self.mock_json(&format!("/v0/item/{}.json", id), 200, &item.to_string())
            .await
    }

    /// Create a mock for a JSON response
    pub async fn mock_json(&mut self, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// `item/{id}.json` answering `null`, which is how upstream reports unknown ids
    pub async fn mock_null_item(&mut self, id: u64) -> Mock {
        self.mock_json(&format!("/v0/item/{}.json", id), 200, "null")
            .await
    }
}
