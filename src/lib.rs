//! # hn-facade
//!
//! A small cached facade over the public Hacker News API.
//!
//! ## Overview
//!
//! The library fetches the "new stories" ranking and individual items,
//! drops stories without a link, and serves three views over them: a paged
//! slice of the ranking, a case-insensitive title search, and a capped "top"
//! list. Everything read from upstream is cached for a short window (five
//! minutes by default) so repeated requests do not hit the network.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hn_facade::client::HackerNewsClientBuilder;
//! use hn_facade::service::{ServiceConfig, StoryService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> hn_facade::Result<()> {
//!     let client = HackerNewsClientBuilder::new().build()?;
//!     let service = StoryService::with_memory_cache(Arc::new(client), ServiceConfig::default());
//!
//!     for story in service.get_top_stories(5).await? {
//!         println!("{} {}", story.id, story.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Upstream client and the [`client::StorySource`] seam |
//! | [`transport`] | reqwest-based JSON transport |
//! | [`cache`] | TTL cache with pluggable backends and miss coalescing |
//! | [`service`] | Fetch orchestration, batching, filtering, paging |
//! | [`server`] | axum routes and serve loop |
//! | [`config`] | Environment-driven configuration |
//! | [`types`] | [`Story`] and friends |

pub mod cache;
pub mod client;
pub mod config;
pub mod server;
pub mod service;
pub mod transport;
pub mod types;

pub use client::{HackerNewsClient, HackerNewsClientBuilder, StorySource};
pub use service::{ServiceConfig, StoryService};
pub use types::Story;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
