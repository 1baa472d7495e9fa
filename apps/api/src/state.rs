use std::sync::Arc;

use crate::config::{CvConfig, NewsConfig};
use crate::llm_client::CvSummarizer;
use crate::search_client::NewsSearcher;

/// Shared state of the CV summarizer, injected into handlers via Axum extractors.
#[derive(Clone)]
pub struct CvState {
    pub config: Arc<CvConfig>,
    /// Default: `OpenRouterClient`. Tests swap in a canned implementation.
    pub summarizer: Arc<dyn CvSummarizer>,
}

/// Shared state of the news search service.
#[derive(Clone)]
pub struct NewsState {
    pub config: Arc<NewsConfig>,
    /// Default: `TavilyClient`.
    pub searcher: Arc<dyn NewsSearcher>,
}

impl CvState {
    pub fn new(config: CvConfig, summarizer: Arc<dyn CvSummarizer>) -> Self {
        Self {
            config: Arc::new(config),
            summarizer,
        }
    }
}

impl NewsState {
    pub fn new(config: NewsConfig, searcher: Arc<dyn NewsSearcher>) -> Self {
        Self {
            config: Arc::new(config),
            searcher,
        }
    }
}
