// X API v2 recent-search client — bearer-token auth over HTTP.
//
// Only one endpoint is used: GET /2/tweets/search/recent. It returns posts
// from the last seven days, at most 100 per page. We request a single page.
//
// API docs: https://developer.x.com/en/docs/x-api/tweets/search/api-reference/get-tweets-search-recent

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use tracing::debug;

use super::traits::{PostSearchProvider, SearchError, SearchPost, SearchRequest, MAX_PAGE_SIZE};

/// The recent-search endpoint rejects `max_results` below this value.
const MIN_API_PAGE_SIZE: usize = 10;

/// HTTP client for the X recent-search endpoint.
pub struct XSearchClient {
    client: reqwest::Client,
    base_url: String,
}

impl XSearchClient {
    /// Build a client that sends `bearer_token` on every request.
    ///
    /// Fails with `SearchError::Auth` when the token cannot be used as a
    /// header value or the HTTP client cannot be built.
    pub fn new(bearer_token: &str, base_url: &str, timeout: Duration) -> Result<Self, SearchError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {bearer_token}"))
            .map_err(|e| SearchError::Auth(format!("bearer token is not a valid header: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .user_agent("murmur/0.1 (sentiment-snapshot)")
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Auth(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/2/tweets/search/recent", self.base_url)
    }
}

#[async_trait]
impl PostSearchProvider for XSearchClient {
    async fn search_recent(&self, request: &SearchRequest) -> Result<Vec<SearchPost>, SearchError> {
        let wanted = request.max_results.min(MAX_PAGE_SIZE);
        let page_size = api_page_size(wanted).to_string();
        let fields = request.fields.join(",");

        debug!(query = %request.query, max_results = wanted, "Recent search request");

        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("query", request.query.as_str()),
                ("max_results", page_size.as_str()),
                ("tweet.fields", fields.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SearchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = parse_search_response(&body)?;
        let mut posts = parsed.data.unwrap_or_default();
        posts.truncate(wanted);

        debug!(
            returned = posts.len(),
            result_count = ?parsed.meta.as_ref().and_then(|m| m.result_count),
            "Recent search response"
        );

        Ok(posts)
    }
}

/// Page size to send on the wire: the endpoint accepts 10..=100.
fn api_page_size(wanted: usize) -> usize {
    wanted.clamp(MIN_API_PAGE_SIZE, MAX_PAGE_SIZE)
}

/// Decode a recent-search response body.
pub fn parse_search_response(body: &str) -> Result<RecentSearchResponse, SearchError> {
    Ok(serde_json::from_str(body)?)
}

// -- Serde types for GET /2/tweets/search/recent --

/// Response body. `data` is absent when nothing matched.
#[derive(Debug, Deserialize)]
pub struct RecentSearchResponse {
    #[serde(default)]
    pub data: Option<Vec<SearchPost>>,
    #[serde(default)]
    pub meta: Option<SearchMeta>,
}

/// Paging metadata. We never follow `next_token`.
#[derive(Debug, Deserialize)]
pub struct SearchMeta {
    pub result_count: Option<u64>,
    pub newest_id: Option<String>,
    pub oldest_id: Option<String>,
    pub next_token: Option<String>,
}
