//! Maps raw search provider results into `NewsArticle`s.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::news::models::NewsArticle;

/// One entry of the provider's `results` list. Only the fields we read.
///
/// `title` and `url` must be strings; the optional fields accept any JSON and
/// are only used when they hold a string.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResult {
    title: Option<String>,
    url: Option<String>,
    content: Option<Value>,
    published_date: Option<Value>,
    date: Option<Value>,
    published: Option<Value>,
}

/// Normalizes provider results, preserving order.
///
/// Items without a string title or url are skipped, as are items that are not
/// objects. The output may therefore be shorter than the input.
pub fn normalize_articles(results: &[Value]) -> Vec<NewsArticle> {
    results
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match RawResult::deserialize(item) {
            Ok(raw) => to_article(raw),
            Err(e) => {
                warn!(index, "Skipping malformed search result: {e}");
                None
            }
        })
        .collect()
}

fn to_article(raw: RawResult) -> Option<NewsArticle> {
    let title = trimmed(raw.title);
    let url = trimmed(raw.url);
    if title.is_empty() || url.is_empty() {
        return None;
    }

    let source = domain_from_url(&url);
    let date = [raw.published_date, raw.date, raw.published]
        .into_iter()
        .filter_map(string_value)
        .find(|d| !d.is_empty());

    Some(NewsArticle {
        title,
        summary: trimmed(string_value(raw.content)),
        source,
        date,
        url,
    })
}

fn trimmed(value: Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

fn string_value(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        _ => None,
    }
}

/// Host of `url` with a leading `www.` removed; `None` when it has no host.
pub fn domain_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
