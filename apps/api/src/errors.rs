use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on provider bodies and model content quoted back in error details.
pub const DETAIL_EXCERPT_CHARS: usize = 500;

/// Application-level error type.
/// Every variant maps to exactly one taxonomy category and HTTP status, so
/// Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidFile(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    PdfExtraction(String),

    #[error("{0}")]
    Llm(String),

    #[error("{0}")]
    Tavily(String),

    #[error("{0}")]
    Unexpected(String),
}

/// JSON body of every failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: Option<String>,
}

impl AppError {
    pub fn category(&self) -> &'static str {
        match self {
            AppError::InvalidFile(_) => "invalid_file",
            AppError::InvalidRequest(_) => "invalid_request",
            AppError::PdfExtraction(_) => "pdf_extraction_failed",
            AppError::Llm(_) => "llm_failed",
            AppError::Tavily(_) => "tavily_failed",
            AppError::Unexpected(_) => "unexpected_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidFile(_) | AppError::InvalidRequest(_) | AppError::PdfExtraction(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Llm(_) | AppError::Tavily(_) | AppError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn detail(&self) -> Option<String> {
        let message = self.to_string();
        if message.is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let category = self.category();

        if status.is_server_error() {
            tracing::error!(category, "request failed: {}", self);
        } else {
            tracing::warn!(category, "request rejected: {}", self);
        }

        let body = Json(ErrorResponse {
            error: category.to_string(),
            detail: self.detail(),
        });

        (status, body).into_response()
    }
}

/// Returns at most `max_chars` characters of `text`, never splitting a code point.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
