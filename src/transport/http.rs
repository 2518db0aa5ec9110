use crate::{Error, ErrorContext, Result};
use reqwest::{Proxy, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0/";

/// Connection settings for the upstream HTTP client.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Duration,
    pub proxy_url: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
            proxy_url: None,
        }
    }
}

/// Thin JSON-over-GET transport rooted at a base URL.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(config.pool_idle_timeout))
            .user_agent(concat!("hn-facade/", env!("CARGO_PKG_VERSION")));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid proxy URL: {}", e),
                    ErrorContext::new()
                        .with_field_path("proxy_url")
                        .with_source("http_transport"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            Error::configuration_with_context(
                format!("failed to build HTTP client: {}", e),
                ErrorContext::new().with_source("http_transport"),
            )
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `path` and decode the body as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        match self.get_optional_json(path).await? {
            Some(value) => Ok(value),
            None => Err(Error::fetch(self.url_for(path)?.to_string(), "empty or missing resource")),
        }
    }

    /// GET `path`, treating HTTP 404 and a JSON `null` body as absence.
    pub async fn get_optional_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.url_for(path)?;
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| Error::fetch(url.as_str(), e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::fetch(url.as_str(), format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::fetch(url.as_str(), e))?;
        serde_json::from_slice::<Option<T>>(&body)
            .map_err(|e| Error::fetch(url.as_str(), format!("invalid JSON payload: {}", e)))
    }

    fn url_for(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::fetch(format!("{}{}", self.base_url, path), e))
    }
}

/// Parse and normalise a base URL so relative joins append to its path.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    let url = Url::parse(&normalized).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid base URL '{}': {}", raw, e),
            ErrorContext::new()
                .with_field_path("base_url")
                .with_source("http_transport"),
        )
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            format!("unsupported scheme '{}'", url.scheme()),
            ErrorContext::new()
                .with_field_path("base_url")
                .with_source("http_transport"),
        ));
    }
    Ok(url)
}
