// Search provider trait — the swap-ready abstraction over the post source.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest page a single recent-search call can return.
pub const MAX_PAGE_SIZE: usize = 100;

/// Post attributes requested by default: text plus engagement metadata.
pub const DEFAULT_FIELDS: &[&str] = &["text", "public_metrics", "created_at"];

/// Errors raised by a search provider.
///
/// `Auth` happens while constructing the provider. The others happen during
/// a search and count as provider errors.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("could not decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One search call: a query, a page size, and the attributes to return.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: usize,
    pub fields: Vec<String>,
}

impl SearchRequest {
    /// Build a request with the default field set.
    pub fn new(query: &str, max_results: usize) -> Self {
        Self {
            query: query.to_string(),
            max_results,
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Engagement counters attached to a post. Not used for classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicMetrics {
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub quote_count: u64,
}

/// A post as returned by the search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPost {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub public_metrics: Option<PublicMetrics>,
}

impl SearchPost {
    /// A post with only an id and text, as fakes and fixtures need.
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            created_at: None,
            public_metrics: None,
        }
    }
}

/// Trait for searching recent posts. Async because real providers make
/// HTTP calls.
#[async_trait]
pub trait PostSearchProvider: Send + Sync {
    /// Run one search and return at most `request.max_results` posts in
    /// provider order. No matches is an empty Vec, not an error.
    async fn search_recent(&self, request: &SearchRequest) -> Result<Vec<SearchPost>, SearchError>;
}
