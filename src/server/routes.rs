//! Route handlers for `/api/stories/*`.

use super::AppState;
use crate::service::validation;
use crate::types::Story;
use crate::Result;
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const DEFAULT_COUNT: i64 = 10;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopParams {
    pub count: Option<i64>,
}

/// `GET /api/stories/new?page=&pageSize=`
pub async fn new_stories(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<Story>>> {
    let stories = state
        .service
        .new_stories(
            params.page.unwrap_or(DEFAULT_PAGE),
            params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .await?;
    Ok(Json(stories))
}

/// `GET /api/stories/search?query=&page=&pageSize=`
pub async fn search_stories(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Story>>> {
    let stories = state
        .service
        .search_stories(
            &params.query,
            params.page.unwrap_or(DEFAULT_PAGE),
            params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .await?;
    Ok(Json(stories))
}

/// `GET /api/stories/top?count=`
///
/// Clients may cache the response for as long as the server does.
pub async fn top_stories(
    State(state): State<AppState>,
    Query(params): Query<TopParams>,
) -> Result<impl IntoResponse> {
    let count = validation::validate_count(params.count.unwrap_or(DEFAULT_COUNT))?;
    let stories = state.service.get_top_stories(count).await?;
    let cache_control = format!(
        "public, max-age={}",
        state.service.config().cache_ttl.as_secs()
    );
    Ok(([(header::CACHE_CONTROL, cache_control)], Json(stories)))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
