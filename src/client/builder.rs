use super::hacker_news::HackerNewsClient;
use crate::transport::HttpConfig;
use crate::Result;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable.
pub struct HackerNewsClientBuilder {
    config: HttpConfig,
}

impl HackerNewsClientBuilder {
    pub fn new() -> Self {
        Self {
            config: HttpConfig::default(),
        }
    }

    /// Start from an existing config (e.g. one read from the environment).
    pub fn from_config(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Override the upstream base URL.
    ///
    /// This is primarily for testing with mock servers.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Per-request timeout; a request exceeding it fails as a fetch error.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn pool_max_idle_per_host(mut self, n: usize) -> Self {
        self.config.pool_max_idle_per_host = n;
        self
    }

    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.config.proxy_url = Some(proxy_url.into());
        self
    }

    pub fn build(self) -> Result<HackerNewsClient> {
        HackerNewsClient::new(&self.config)
    }
}

impl Default for HackerNewsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
