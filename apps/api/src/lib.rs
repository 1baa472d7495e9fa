//! Two thin HTTP services sharing one error taxonomy and config layer:
//! a CV summarizer (PDF → OpenRouter structured summary) and a news search
//! front for Tavily.

pub mod config;
pub mod cv;
pub mod errors;
pub mod llm_client;
pub mod news;
pub mod routes;
pub mod search_client;
pub mod server;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
