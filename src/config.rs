//! Process configuration read from `HN_*` environment variables.
//!
//! Every knob has a default; unset variables keep it, unparseable ones are
//! a configuration error rather than a silent fallback.

use crate::server::ServerConfig;
use crate::service::ServiceConfig;
use crate::transport::HttpConfig;
use crate::{Error, ErrorContext, Result};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_BASE_URL: &str = "HN_BASE_URL";
pub const ENV_CACHE_TTL_SECS: &str = "HN_CACHE_TTL_SECS";
pub const ENV_MAX_STORY_IDS: &str = "HN_MAX_STORY_IDS";
pub const ENV_BATCH_CONCURRENCY: &str = "HN_BATCH_CONCURRENCY";
pub const ENV_CACHE_MAX_ENTRIES: &str = "HN_CACHE_MAX_ENTRIES";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "HN_HTTP_TIMEOUT_SECS";
pub const ENV_HTTP_POOL_MAX_IDLE_PER_HOST: &str = "HN_HTTP_POOL_MAX_IDLE_PER_HOST";
pub const ENV_PROXY_URL: &str = "HN_PROXY_URL";
pub const ENV_BIND_ADDR: &str = "HN_BIND_ADDR";
pub const ENV_SWEEP_INTERVAL_SECS: &str = "HN_SWEEP_INTERVAL_SECS";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub service: ServiceConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|s| !s.trim().is_empty()) {
            crate::transport::http::parse_base_url(&url)?;
            cfg.http.base_url = url;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, ENV_HTTP_TIMEOUT_SECS)? {
            cfg.http.timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(n) = parse_var::<usize, _>(&lookup, ENV_HTTP_POOL_MAX_IDLE_PER_HOST)? {
            cfg.http.pool_max_idle_per_host = n;
        }
        cfg.http.proxy_url = lookup(ENV_PROXY_URL).filter(|s| !s.trim().is_empty());

        if let Some(secs) = parse_var::<u64, _>(&lookup, ENV_CACHE_TTL_SECS)? {
            cfg.service.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(n) = parse_var::<usize, _>(&lookup, ENV_MAX_STORY_IDS)? {
            cfg.service.max_story_ids = n;
        }
        if let Some(n) = parse_var::<usize, _>(&lookup, ENV_BATCH_CONCURRENCY)? {
            cfg.service.batch_concurrency = n.max(1);
        }
        if let Some(n) = parse_var::<usize, _>(&lookup, ENV_CACHE_MAX_ENTRIES)? {
            cfg.service.cache_max_entries = n.max(1);
        }

        if let Some(addr) = parse_var::<SocketAddr, _>(&lookup, ENV_BIND_ADDR)? {
            cfg.server.bind_addr = addr;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, ENV_SWEEP_INTERVAL_SECS)? {
            cfg.server.sweep_interval = Duration::from_secs(secs);
        }

        Ok(cfg)
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>().map(Some).map_err(|e| {
        Error::configuration_with_context(
            format!("cannot parse {}", name),
            ErrorContext::new()
                .with_field_path(name)
                .with_details(format!("{:?}: {}", raw, e))
                .with_source("config"),
        )
    })
}
