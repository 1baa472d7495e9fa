use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::news::models::{SearchDepth, TimeRange};

pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const TAVILY_SEARCH_URL: &str = "https://api.tavily.com/search";

/// Listener settings shared by both binaries.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub rust_log: String,
}

/// Configuration of the CV summarizer service.
///
/// A missing `OPENROUTER_API_KEY` is not a startup failure: the client reports
/// it on the first summarize call.
#[derive(Debug, Clone)]
pub struct CvConfig {
    pub server: ServerConfig,
    pub openrouter_api_key: Option<String>,
    pub openrouter_base_url: String,
    pub openrouter_model: String,
    pub openrouter_timeout: Duration,
    pub openrouter_http_referer: Option<String>,
    pub openrouter_x_title: Option<String>,
    pub pdf_max_chars: usize,
    pub max_upload_bytes: usize,
}

/// Configuration of the news search service.
#[derive(Debug, Clone)]
pub struct NewsConfig {
    pub server: ServerConfig,
    pub tavily_api_key: Option<String>,
    pub tavily_search_url: String,
    pub time_range_default: TimeRange,
    pub search_depth_default: SearchDepth,
    pub tavily_timeout: Duration,
}

impl CvConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(CvConfig {
            server: ServerConfig::from_lookup(&lookup, 8080)?,
            openrouter_api_key: optional(&lookup, "OPENROUTER_API_KEY"),
            openrouter_base_url: optional(&lookup, "OPENROUTER_BASE_URL")
                .unwrap_or_else(|| OPENROUTER_BASE_URL.to_string()),
            openrouter_model: optional(&lookup, "OPENROUTER_MODEL")
                .unwrap_or_else(|| "openai/o4-mini".to_string()),
            openrouter_timeout: seconds(&lookup, "OPENROUTER_TIMEOUT_S", 30.0)?,
            openrouter_http_referer: optional(&lookup, "OPENROUTER_HTTP_REFERER"),
            openrouter_x_title: optional(&lookup, "OPENROUTER_X_TITLE"),
            pdf_max_chars: parsed(&lookup, "PDF_MAX_CHARS", 20_000)?,
            max_upload_bytes: parsed(&lookup, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        })
    }
}

impl NewsConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(NewsConfig {
            server: ServerConfig::from_lookup(&lookup, 8081)?,
            tavily_api_key: optional(&lookup, "TAVILY_API_KEY"),
            tavily_search_url: optional(&lookup, "TAVILY_SEARCH_URL")
                .unwrap_or_else(|| TAVILY_SEARCH_URL.to_string()),
            time_range_default: parsed(&lookup, "TAVILY_TIME_RANGE_DEFAULT", TimeRange::Week)?,
            search_depth_default: parsed(
                &lookup,
                "TAVILY_SEARCH_DEPTH_DEFAULT",
                SearchDepth::Basic,
            )?,
            tavily_timeout: seconds(&lookup, "TAVILY_TIMEOUT_S", 20.0)?,
        })
    }
}

impl ServerConfig {
    fn from_lookup<F>(lookup: &F, default_port: u16) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(ServerConfig {
            port: parsed(lookup, "PORT", default_port)?,
            rust_log: optional(lookup, "RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Trimmed value of `key`, with blank values treated as unset.
fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(lookup, key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn seconds<F>(lookup: &F, key: &str, default: f64) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let secs: f64 = parsed(lookup, key, default)?;
    Duration::try_from_secs_f64(secs)
        .with_context(|| format!("Environment variable '{key}' must be a non-negative number of seconds"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_cv_defaults() {
        let config = CvConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.openrouter_api_key, None);
        assert_eq!(config.openrouter_model, "openai/o4-mini");
        assert_eq!(config.openrouter_timeout, Duration::from_secs(30));
        assert_eq!(config.openrouter_base_url, OPENROUTER_BASE_URL);
        assert_eq!(config.pdf_max_chars, 20_000);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.rust_log, "info");
        assert!(config.openrouter_http_referer.is_none());
    }

    #[test]
    fn test_cv_overrides() {
        let config = CvConfig::from_lookup(lookup_from(&[
            ("OPENROUTER_API_KEY", "  sk-test  "),
            ("OPENROUTER_MODEL", "mistralai/mistral-large"),
            ("OPENROUTER_TIMEOUT_S", "2.5"),
            ("OPENROUTER_X_TITLE", "CV Summarizer"),
            ("PDF_MAX_CHARS", "100"),
        ]))
        .unwrap();
        assert_eq!(config.openrouter_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openrouter_model, "mistralai/mistral-large");
        assert_eq!(config.openrouter_timeout, Duration::from_millis(2500));
        assert_eq!(config.openrouter_x_title.as_deref(), Some("CV Summarizer"));
        assert_eq!(config.pdf_max_chars, 100);
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = CvConfig::from_lookup(lookup_from(&[("OPENROUTER_API_KEY", "   ")])).unwrap();
        assert!(config.openrouter_api_key.is_none());
    }

    #[test]
    fn test_invalid_number_names_the_variable() {
        let err = CvConfig::from_lookup(lookup_from(&[("PDF_MAX_CHARS", "lots")])).unwrap_err();
        assert!(format!("{err:#}").contains("PDF_MAX_CHARS"));
    }

    #[test]
    fn test_negative_timeout_rejected() {
        let err = NewsConfig::from_lookup(lookup_from(&[("TAVILY_TIMEOUT_S", "-1")])).unwrap_err();
        assert!(format!("{err:#}").contains("TAVILY_TIMEOUT_S"));
    }

    #[test]
    fn test_news_defaults() {
        let config = NewsConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.time_range_default, TimeRange::Week);
        assert_eq!(config.search_depth_default, SearchDepth::Basic);
        assert_eq!(config.tavily_timeout, Duration::from_secs(20));
        assert_eq!(config.tavily_search_url, TAVILY_SEARCH_URL);
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn test_news_default_overrides() {
        let config = NewsConfig::from_lookup(lookup_from(&[
            ("TAVILY_TIME_RANGE_DEFAULT", "d"),
            ("TAVILY_SEARCH_DEPTH_DEFAULT", "ultra-fast"),
        ]))
        .unwrap();
        assert_eq!(config.time_range_default, TimeRange::D);
        assert_eq!(config.search_depth_default, SearchDepth::UltraFast);
    }

    #[test]
    fn test_unknown_time_range_default_fails_startup() {
        assert!(
            NewsConfig::from_lookup(lookup_from(&[("TAVILY_TIME_RANGE_DEFAULT", "decade")]))
                .is_err()
        );
    }
}
