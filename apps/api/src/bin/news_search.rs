use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use relay_api::config::NewsConfig;
use relay_api::routes::build_news_router;
use relay_api::search_client::TavilyClient;
use relay_api::server;
use relay_api::state::NewsState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = NewsConfig::from_env()?;
    server::init_tracing(&config.server, env!("CARGO_CRATE_NAME"));

    info!("Starting news search v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Search defaults: time_range={}, search_depth={}",
        config.time_range_default, config.search_depth_default
    );

    let tavily = TavilyClient::new(&config)?;
    if config.tavily_api_key.is_none() {
        warn!("TAVILY_API_KEY is not set; search requests will fail with tavily_failed");
    }

    let server_config = config.server.clone();
    let state = NewsState::new(config, Arc::new(tavily));

    server::serve(build_news_router(state), &server_config).await
}
