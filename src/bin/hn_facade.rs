//! hn-facade: serve cached Hacker News stories over HTTP.
//!
//! Usage:
//!   hn-facade [--bind <addr>] [--base-url <url>] [--cache-ttl-secs <n>]
//!
//! Every flag falls back to its `HN_*` environment variable, then to the
//! built-in default.

use anyhow::Context;
use clap::Parser;
use hn_facade::config::{AppConfig, ENV_BASE_URL, ENV_BIND_ADDR, ENV_CACHE_TTL_SECS};
use hn_facade::server;
use hn_facade::{HackerNewsClientBuilder, StoryService};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hn-facade", version, about = "Cached facade over the Hacker News API")]
struct Cli {
    /// Address to listen on
    #[arg(long, env = ENV_BIND_ADDR)]
    bind: Option<SocketAddr>,

    /// Upstream API base URL
    #[arg(long, env = ENV_BASE_URL)]
    base_url: Option<String>,

    /// Cache entry lifetime in seconds
    #[arg(long, env = ENV_CACHE_TTL_SECS)]
    cache_ttl_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hn_facade=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env().context("reading HN_* environment")?;
    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }
    if let Some(base_url) = cli.base_url {
        config.http.base_url = base_url;
    }
    if let Some(secs) = cli.cache_ttl_secs {
        config.service.cache_ttl = Duration::from_secs(secs);
    }

    let client = HackerNewsClientBuilder::from_config(config.http.clone())
        .build()
        .context("building upstream client")?;
    info!(
        upstream = client.base_url(),
        ttl_secs = config.service.cache_ttl.as_secs(),
        max_story_ids = config.service.max_story_ids,
        "starting hn-facade"
    );

    let service = Arc::new(StoryService::with_memory_cache(
        Arc::new(client),
        config.service,
    ));
    server::serve(config.server, service)
        .await
        .context("serving HTTP")?;
    Ok(())
}
