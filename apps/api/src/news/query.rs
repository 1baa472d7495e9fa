//! Query construction: turns an area plus optional free text into the search
//! string and provider parameters.

use crate::config::NewsConfig;
use crate::errors::AppError;
use crate::news::models::{MaxResults, NewsSearchRequest, SearchDepth, TimeRange};

/// Everything the search provider needs for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub area: String,
    pub effective_query: String,
    pub max_results: MaxResults,
    pub time_range: TimeRange,
    pub search_depth: SearchDepth,
}

/// `area` alone, or `"{area}: {query}"` when a non-blank query is given.
pub fn effective_query(area: &str, query: Option<&str>) -> String {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => format!("{area}: {q}"),
        None => area.to_string(),
    }
}

/// Validates the request and fills unset parameters from the process defaults.
pub fn build_search_params(
    request: &NewsSearchRequest,
    config: &NewsConfig,
) -> Result<SearchParams, AppError> {
    let area = request.area.trim();
    if area.is_empty() {
        return Err(AppError::InvalidRequest("area must be non-empty".to_string()));
    }

    Ok(SearchParams {
        area: area.to_string(),
        effective_query: effective_query(area, request.query.as_deref()),
        max_results: request.max_results,
        time_range: request.time_range.unwrap_or(config.time_range_default),
        search_depth: request.search_depth.unwrap_or(config.search_depth_default),
    })
}
