//! Story fetch orchestration: caching, batching and filtering over the
//! upstream client.

pub mod stories;
pub mod validation;

pub use stories::{ServiceConfig, StoryService};
pub use validation::{PageWindow, MAX_COUNT, MAX_PAGE_SIZE, MIN_COUNT};
