//! Core data types shared by the client, the service and the HTTP layer.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Story`] | Upstream item with id, title, optional URL and pass-through metadata |

pub mod story;

pub use story::Story;
