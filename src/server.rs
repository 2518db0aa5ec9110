//! HTTP surface: axum router, shared state and the serve loop.

pub mod error;
pub mod routes;

use crate::cache::CacheManager;
use crate::service::StoryService;
use crate::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Listener and housekeeping settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// How often expired cache entries are purged. Zero disables the sweep.
    pub sweep_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            sweep_interval: Duration::from_secs(60),
        }
    }
}

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<StoryService>,
}

pub fn router(service: Arc<StoryService>) -> Router {
    Router::new()
        .route("/api/stories/new", get(routes::new_stories))
        .route("/api/stories/search", get(routes::search_stories))
        .route("/api/stories/top", get(routes::top_stories))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { service })
}

/// Periodically drop expired entries so idle keys do not linger until the
/// cache fills up.
pub fn spawn_cache_sweeper(cache: Arc<CacheManager>, every: Duration) -> Option<JoinHandle<()>> {
    if every.is_zero() {
        return None;
    }
    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // the first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match cache.purge_expired().await {
                Ok(0) => {}
                Ok(n) => debug!(purged = n, "swept expired cache entries"),
                Err(e) => warn!(error = %e, "cache sweep failed"),
            }
        }
    }))
}

/// Bind, serve until Ctrl-C, then stop the sweeper.
pub async fn serve(config: ServerConfig, service: Arc<StoryService>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "hn-facade listening");

    let sweeper = spawn_cache_sweeper(Arc::clone(service.cache()), config.sweep_interval);
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = sweeper {
        handle.abort();
    }
    info!("hn-facade stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
