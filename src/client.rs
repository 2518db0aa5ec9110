//! Upstream client for the Hacker News API.
//!
//! The orchestrator only sees the [`StorySource`] trait; [`HackerNewsClient`]
//! is the HTTP-backed implementation.

pub mod builder;
pub mod hacker_news;
pub mod source;

pub use builder::HackerNewsClientBuilder;
pub use hacker_news::HackerNewsClient;
pub use source::StorySource;
