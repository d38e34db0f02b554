// Post fetcher — one search page in, classified posts out.
//
// Given a query, this module:
// 1. Refuses to run if the search provider failed to authenticate
// 2. Requests a single page of up to 100 recent posts
// 3. Classifies each post's text in provider order
//
// Provider errors during the search are logged and degrade to an empty
// result. The error text is kept on the returned `Fetch` so callers can tell
// "nothing matched" from "the API was down".

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::search::traits::{PostSearchProvider, SearchError, SearchRequest, MAX_PAGE_SIZE};
use crate::sentiment::classifier::SentimentClassifier;
use crate::sentiment::traits::Sentiment;

/// A post's raw text with its sentiment label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedPost {
    pub text: String,
    pub sentiment: Sentiment,
}

/// Errors that stop a fetch before it starts.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("search client is not authenticated: {0}")]
    Authentication(String),
}

/// Outcome of one fetch.
#[derive(Debug, Clone, Default)]
pub struct Fetch {
    /// Classified posts in the order the provider returned them.
    pub posts: Vec<ClassifiedPost>,
    /// Set when the provider failed and `posts` was left empty.
    pub provider_error: Option<String>,
}

impl Fetch {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Clamp a requested post count to what one search page can return.
pub fn clamp_count(count: usize) -> usize {
    count.clamp(1, MAX_PAGE_SIZE)
}

/// Fetches and classifies posts for a query.
pub struct PostFetcher {
    provider: Result<Box<dyn PostSearchProvider>, String>,
    classifier: SentimentClassifier,
}

impl PostFetcher {
    /// Wrap the result of building a search provider.
    ///
    /// A construction failure is recorded, not returned: every later `fetch`
    /// reports it as `FetchError::Authentication`.
    pub fn new(
        provider: Result<Box<dyn PostSearchProvider>, SearchError>,
        classifier: SentimentClassifier,
    ) -> Self {
        let provider = provider.map_err(|e| {
            warn!(error = %e, "Search client construction failed");
            e.to_string()
        });
        Self {
            provider,
            classifier,
        }
    }

    /// Whether the search provider was constructed successfully.
    pub fn is_authenticated(&self) -> bool {
        self.provider.is_ok()
    }

    /// Fetch up to `count` posts (clamped to 1..=100) matching `query` and
    /// classify each one.
    pub async fn fetch(&self, query: &str, count: usize) -> Result<Fetch, FetchError> {
        let provider = self
            .provider
            .as_ref()
            .map_err(|e| FetchError::Authentication(e.clone()))?;

        let request = SearchRequest::new(query, clamp_count(count));

        let found = match provider.search_recent(&request).await {
            Ok(found) => found,
            Err(e) => {
                warn!(error = %e, query = query, "Search failed, continuing with no posts");
                return Ok(Fetch {
                    posts: Vec::new(),
                    provider_error: Some(e.to_string()),
                });
            }
        };

        let posts: Vec<ClassifiedPost> = found
            .into_iter()
            .take(request.max_results)
            .map(|post| {
                let sentiment = self.classifier.classify(&post.text);
                ClassifiedPost {
                    text: post.text,
                    sentiment,
                }
            })
            .collect();

        info!(
            count = posts.len(),
            requested = request.max_results,
            query = query,
            "Classified posts"
        );

        Ok(Fetch {
            posts,
            provider_error: None,
        })
    }
}
