//! Axum route handlers for the news search service.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::errors::{excerpt, AppError, DETAIL_EXCERPT_CHARS};
use crate::news::models::{NewsSearchRequest, NewsSearchResponse};
use crate::news::normalize::normalize_articles;
use crate::news::query::build_search_params;
use crate::state::NewsState;

/// POST /v1/news/search
///
/// Body rejections (malformed JSON, out-of-range `max_results`, unknown enum
/// values) are reported as `invalid_request`.
pub async fn handle_search(
    State(state): State<NewsState>,
    body: Result<Json<NewsSearchRequest>, JsonRejection>,
) -> Result<Json<NewsSearchResponse>, AppError> {
    let Json(request) = body.map_err(|e| {
        AppError::InvalidRequest(excerpt(&e.body_text(), DETAIL_EXCERPT_CHARS).to_string())
    })?;
    let params = build_search_params(&request, &state.config)?;

    let raw = state
        .searcher
        .search(&params)
        .await
        .map_err(|e| AppError::Tavily(e.to_string()))?;
    let results = normalize_articles(&raw);

    info!(
        effective_query = %params.effective_query,
        received = raw.len(),
        returned = results.len(),
        "News search completed"
    );

    Ok(Json(NewsSearchResponse {
        effective_query: params.effective_query,
        area: params.area,
        results,
    }))
}
