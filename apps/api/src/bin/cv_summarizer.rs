use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use relay_api::config::CvConfig;
use relay_api::llm_client::OpenRouterClient;
use relay_api::routes::build_cv_router;
use relay_api::server;
use relay_api::state::CvState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a missing API key is reported per request, not here
    let config = CvConfig::from_env()?;
    server::init_tracing(&config.server, env!("CARGO_CRATE_NAME"));

    info!("Starting CV summarizer v{}", env!("CARGO_PKG_VERSION"));

    let llm = OpenRouterClient::new(&config)?;
    info!(
        "LLM client initialized (model: {}, timeout: {:?})",
        llm.model(),
        config.openrouter_timeout
    );
    if config.openrouter_api_key.is_none() {
        warn!("OPENROUTER_API_KEY is not set; summarize requests will fail with llm_failed");
    }

    let server_config = config.server.clone();
    let state = CvState::new(config, Arc::new(llm));

    server::serve(build_cv_router(state), &server_config).await
}
