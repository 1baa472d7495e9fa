use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Recency window accepted by the search provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Year,
    D,
    W,
    M,
    Y,
}

/// Provider-side search effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchDepth {
    Advanced,
    Basic,
    Fast,
    UltraFast,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
            TimeRange::D => "d",
            TimeRange::W => "w",
            TimeRange::M => "m",
            TimeRange::Y => "y",
        }
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            "d" => Ok(TimeRange::D),
            "w" => Ok(TimeRange::W),
            "m" => Ok(TimeRange::M),
            "y" => Ok(TimeRange::Y),
            other => Err(format!(
                "unknown time range '{other}' (expected day, week, month, year, d, w, m or y)"
            )),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SearchDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchDepth::Advanced => "advanced",
            SearchDepth::Basic => "basic",
            SearchDepth::Fast => "fast",
            SearchDepth::UltraFast => "ultra-fast",
        }
    }
}

impl FromStr for SearchDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "advanced" => Ok(SearchDepth::Advanced),
            "basic" => Ok(SearchDepth::Basic),
            "fast" => Ok(SearchDepth::Fast),
            "ultra-fast" => Ok(SearchDepth::UltraFast),
            other => Err(format!(
                "unknown search depth '{other}' (expected advanced, basic, fast or ultra-fast)"
            )),
        }
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of results requested from the provider, always within 1..=20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MaxResults(u32);

impl MaxResults {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 20;

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for MaxResults {
    fn default() -> Self {
        MaxResults(5)
    }
}

impl TryFrom<u32> for MaxResults {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(MaxResults(value))
        } else {
            Err(format!(
                "max_results must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            ))
        }
    }
}

impl From<MaxResults> for u32 {
    fn from(value: MaxResults) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsSearchRequest {
    pub area: String,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub max_results: MaxResults,
    /// Falls back to `TAVILY_TIME_RANGE_DEFAULT` when absent.
    #[serde(default)]
    pub time_range: Option<TimeRange>,
    /// Falls back to `TAVILY_SEARCH_DEPTH_DEFAULT` when absent.
    #[serde(default)]
    pub search_depth: Option<SearchDepth>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    pub summary: String,
    /// Bare domain of `url`, without a leading `www.`.
    pub source: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSearchResponse {
    pub effective_query: String,
    pub area: String,
    pub results: Vec<NewsArticle>,
}
