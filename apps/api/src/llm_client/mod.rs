/// LLM Client: the single point of entry for OpenRouter chat completion calls.
///
/// Requests a JSON-schema constrained completion and returns the model's
/// content parsed as JSON. Exactly one HTTP call per invocation, no retries.
use std::time::Instant;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::CvConfig;
use crate::errors::{excerpt, DETAIL_EXCERPT_CHARS};

pub mod prompts;

const TEMPERATURE: f32 = 0.2;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing OPENROUTER_API_KEY env var.")]
    MissingApiKey,

    #[error("Network error calling OpenRouter: {0}")]
    Network(#[source] reqwest::Error),

    #[error("OpenRouter HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected OpenRouter response shape: {0}")]
    UnexpectedShape(String),

    #[error("Model did not return valid JSON. Raw content: {0}")]
    InvalidJson(String),
}

/// Turns CV text into the model's structured JSON answer.
/// `CvState` holds an `Arc<dyn CvSummarizer>`.
#[async_trait]
pub trait CvSummarizer: Send + Sync {
    async fn summarize(&self, cv_text: &str) -> Result<Value, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
    json_schema: Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl ChatResponse {
    fn into_content(self) -> Option<String> {
        self.choices.into_iter().next().map(|c| c.message.content)
    }
}

#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    http_referer: Option<String>,
    x_title: Option<String>,
}

impl OpenRouterClient {
    pub fn new(config: &CvConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.openrouter_timeout)
            .build()
            .context("Failed to build OpenRouter HTTP client")?;

        Ok(Self {
            client,
            api_key: config.openrouter_api_key.clone(),
            base_url: config.openrouter_base_url.trim_end_matches('/').to_string(),
            model: config.openrouter_model.clone(),
            http_referer: config.openrouter_http_referer.clone(),
            x_title: config.openrouter_x_title.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CvSummarizer for OpenRouterClient {
    async fn summarize(&self, cv_text: &str) -> Result<Value, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let user_prompt = prompts::cv_summary_prompt(cv_text);
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompts::CV_SUMMARY_SYSTEM,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: prompts::cv_summary_schema(),
            },
            temperature: TEMPERATURE,
        };

        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request_body);
        // Optional attribution headers
        if let Some(referer) = &self.http_referer {
            request = request.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.x_title {
            request = request.header("X-Title", title);
        }

        let started = Instant::now();
        let response = request.send().await.map_err(LlmError::Network)?;
        let status = response.status();
        let body = response.text().await.map_err(LlmError::Network)?;

        debug!(
            model = %self.model,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "OpenRouter completion returned"
        );

        if status.as_u16() >= 400 {
            return Err(LlmError::Api {
                status: status.as_u16(),
                body: excerpt(&body, DETAIL_EXCERPT_CHARS).to_string(),
            });
        }

        let content = serde_json::from_str::<ChatResponse>(&body)
            .ok()
            .and_then(ChatResponse::into_content)
            .ok_or_else(|| {
                LlmError::UnexpectedShape(excerpt(&body, DETAIL_EXCERPT_CHARS).to_string())
            })?;

        parse_content(&content)
    }
}

/// Structured output arrives as a JSON document inside the message content.
fn parse_content(content: &str) -> Result<Value, LlmError> {
    serde_json::from_str(content)
        .map_err(|_| LlmError::InvalidJson(excerpt(content, DETAIL_EXCERPT_CHARS).to_string()))
}
