//! Request parameter validation.
//!
//! Runs before any upstream call so bad input never costs a fetch.

use crate::{Error, ErrorContext, Result};

pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 100;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Zero-based window into an ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: usize,
    pub take: usize,
}

impl PageWindow {
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items.into_iter().skip(self.skip).take(self.take).collect()
    }
}

fn invalid(field: &str, message: String, actual: impl std::fmt::Display) -> Error {
    Error::validation_with_context(
        message,
        ErrorContext::new()
            .with_field_path(field)
            .with_details(format!("got {}", actual))
            .with_source("request_validator"),
    )
}

/// `count` must lie in `[1, 100]`.
pub fn validate_count(count: i64) -> Result<usize> {
    if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
        return Err(invalid(
            "count",
            format!("Count must be between {} and {}", MIN_COUNT, MAX_COUNT),
            count,
        ));
    }
    Ok(count as usize)
}

/// One-based `page`, `page_size` in `[1, 100]`.
pub fn validate_page(page: i64, page_size: i64) -> Result<PageWindow> {
    if page < 1 {
        return Err(invalid("page", "Page must be at least 1".to_string(), page));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(invalid(
            "pageSize",
            format!("Page size must be between 1 and {}", MAX_PAGE_SIZE),
            page_size,
        ));
    }
    let take = page_size as usize;
    let skip = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(take);
    Ok(PageWindow { skip, take })
}

/// Non-blank search text, lowercased for case-insensitive matching.
pub fn validate_query(query: &str) -> Result<String> {
    if query.trim().is_empty() {
        return Err(invalid(
            "query",
            "Query must not be empty".to_string(),
            format!("{:?}", query),
        ));
    }
    Ok(query.to_lowercase())
}
