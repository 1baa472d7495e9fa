/// Search client: the single point of entry for Tavily calls.
///
/// One POST per search, no retries. Every failure comes back as a
/// `SearchError`, which the handler maps to `tavily_failed`.
use std::time::Instant;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::NewsConfig;
use crate::errors::{excerpt, DETAIL_EXCERPT_CHARS};
use crate::news::models::{SearchDepth, TimeRange};
use crate::news::query::SearchParams;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Missing TAVILY_API_KEY env var.")]
    MissingApiKey,

    #[error("Network error calling Tavily: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Tavily HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected Tavily response shape: {0}")]
    UnexpectedShape(String),

    #[error("Unexpected Tavily response: results is not a list. Raw body: {0}")]
    ResultsNotList(String),
}

/// Anything that can run a news search. `NewsState` holds an `Arc<dyn NewsSearcher>`.
#[async_trait]
pub trait NewsSearcher: Send + Sync {
    /// Returns the provider's raw `results` list, in provider order.
    async fn search(&self, params: &SearchParams) -> Result<Vec<Value>, SearchError>;
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    query: &'a str,
    topic: &'a str,
    max_results: u32,
    time_range: TimeRange,
    search_depth: SearchDepth,
    include_answer: bool,
    include_raw_content: bool,
    include_images: bool,
    include_favicon: bool,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    results: Vec<Value>,
}

#[derive(Clone)]
pub struct TavilyClient {
    client: Client,
    api_key: Option<String>,
    search_url: String,
}

impl TavilyClient {
    pub fn new(config: &NewsConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.tavily_timeout)
            .build()
            .context("Failed to build Tavily HTTP client")?;

        Ok(Self {
            client,
            api_key: config.tavily_api_key.clone(),
            search_url: config.tavily_search_url.clone(),
        })
    }
}

#[async_trait]
impl NewsSearcher for TavilyClient {
    async fn search(&self, params: &SearchParams) -> Result<Vec<Value>, SearchError> {
        let api_key = self.api_key.as_deref().ok_or(SearchError::MissingApiKey)?;

        let payload = TavilyRequest {
            query: &params.effective_query,
            topic: "news",
            max_results: params.max_results.get(),
            time_range: params.time_range,
            search_depth: params.search_depth,
            include_answer: false,
            include_raw_content: false,
            include_images: false,
            include_favicon: false,
        };

        let started = Instant::now();
        let response = self
            .client
            .post(&self.search_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(SearchError::Network)?;

        let status = response.status();
        let body = response.text().await.map_err(SearchError::Network)?;

        debug!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Tavily search returned"
        );

        if status.as_u16() >= 400 {
            return Err(SearchError::Api {
                status: status.as_u16(),
                body: excerpt(&body, DETAIL_EXCERPT_CHARS).to_string(),
            });
        }

        let data: Value = serde_json::from_str(&body).map_err(|_| {
            SearchError::UnexpectedShape(excerpt(&body, DETAIL_EXCERPT_CHARS).to_string())
        })?;

        let parsed = TavilyResponse::deserialize(&data).map_err(|_| {
            SearchError::ResultsNotList(excerpt(&body, DETAIL_EXCERPT_CHARS).to_string())
        })?;

        Ok(parsed.results)
    }
}
