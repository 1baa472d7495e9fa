pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::{CvState, NewsState};
use crate::{cv, news};

pub fn build_cv_router(state: CvState) -> Router {
    let upload_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/v1/cv/summarize",
            post(cv::handlers::handle_summarize).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

pub fn build_news_router(state: NewsState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/v1/news/search", post(news::handlers::handle_search))
        .with_state(state)
}
