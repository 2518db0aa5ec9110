//! Upstream HTTP transport.

pub mod http;

pub use http::{HttpConfig, HttpTransport, DEFAULT_BASE_URL};
