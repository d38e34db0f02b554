// Composition tests — the fetch pipeline chained into the report.
//
// These tests exercise the data flow between modules:
//   PostSearchProvider -> PostFetcher -> SentimentClassifier -> aggregate
// using in-memory fake providers, without any network calls.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use murmur::pipeline::fetch::{FetchError, PostFetcher};
use murmur::output::terminal::NO_RESULTS_MESSAGE;
use murmur::report::{aggregate, summarize, DEFAULT_SAMPLE_SIZE};
use murmur::search::traits::{PostSearchProvider, SearchError, SearchPost, SearchRequest};
use murmur::sentiment::classifier::SentimentClassifier;
use murmur::sentiment::traits::{PolarityScorer, Sentiment};

/// Returns a canned page and records every request it receives.
struct FakeProvider {
    posts: Vec<SearchPost>,
    requests: Arc<Mutex<Vec<SearchRequest>>>,
}

#[async_trait]
impl PostSearchProvider for FakeProvider {
    async fn search_recent(&self, request: &SearchRequest) -> Result<Vec<SearchPost>, SearchError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.posts.clone())
    }
}

/// Always fails with an API error.
struct FailingProvider;

#[async_trait]
impl PostSearchProvider for FailingProvider {
    async fn search_recent(&self, _request: &SearchRequest) -> Result<Vec<SearchPost>, SearchError> {
        Err(SearchError::Api {
            status: 503,
            body: "Service Unavailable".to_string(),
        })
    }
}

/// Scores "yay" positive and "boo" negative; everything else is zero.
struct KeywordScorer;

impl PolarityScorer for KeywordScorer {
    fn polarity(&self, text: &str) -> f64 {
        if text.contains("yay") {
            0.5
        } else if text.contains("boo") {
            -0.5
        } else {
            0.0
        }
    }
}

fn keyword_classifier() -> SentimentClassifier {
    SentimentClassifier::new(Box::new(KeywordScorer))
}

fn fake(posts: Vec<SearchPost>) -> (FakeProvider, Arc<Mutex<Vec<SearchRequest>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    (
        FakeProvider {
            posts,
            requests: requests.clone(),
        },
        requests,
    )
}

fn fetcher_for(provider: impl PostSearchProvider + 'static) -> PostFetcher {
    PostFetcher::new(Ok(Box::new(provider)), keyword_classifier())
}

// ============================================================
// Chain: provider -> fetcher -> classifier
// ============================================================

#[tokio::test]
async fn fetch_classifies_in_provider_order() {
    let (provider, _) = fake(vec![
        SearchPost::new("1", "yay @friend https://t.co/a"),
        SearchPost::new("2", "boo!"),
        SearchPost::new("3", "meh"),
    ]);
    let fetched = fetcher_for(provider).fetch("q", 10).await.unwrap();

    assert!(fetched.provider_error.is_none());
    let labels: Vec<Sentiment> = fetched.posts.iter().map(|p| p.sentiment).collect();
    assert_eq!(
        labels,
        vec![Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
    );
}

#[tokio::test]
async fn fetch_keeps_raw_text() {
    let (provider, _) = fake(vec![SearchPost::new("1", "yay @friend https://t.co/a")]);
    let fetched = fetcher_for(provider).fetch("q", 10).await.unwrap();
    assert_eq!(fetched.posts[0].text, "yay @friend https://t.co/a");
}

#[tokio::test]
async fn fetch_sends_single_request_with_query_and_count() {
    let (provider, requests) = fake(vec![]);
    fetcher_for(provider).fetch("dhanush", 25).await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query, "dhanush");
    assert_eq!(requests[0].max_results, 25);
}

#[tokio::test]
async fn fetch_clamps_count_to_page_size() {
    let (provider, requests) = fake(vec![]);
    let fetcher = fetcher_for(provider);
    fetcher.fetch("q", 200).await.unwrap();
    fetcher.fetch("q", 0).await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].max_results, 100);
    assert_eq!(requests[1].max_results, 1);
}

#[tokio::test]
async fn fetch_never_returns_more_than_requested() {
    let posts = (0..20)
        .map(|i| SearchPost::new(&i.to_string(), "yay"))
        .collect();
    let (provider, _) = fake(posts);
    let fetched = fetcher_for(provider).fetch("q", 5).await.unwrap();
    assert_eq!(fetched.posts.len(), 5);
}

// ============================================================
// Empty results and failures
// ============================================================

#[tokio::test]
async fn no_matches_is_empty_not_error() {
    let (provider, _) = fake(vec![]);
    let fetched = fetcher_for(provider).fetch("nothing", 10).await.unwrap();
    assert!(fetched.is_empty());
    assert!(fetched.provider_error.is_none());
    assert!(aggregate(&fetched.posts).is_none());
}

#[tokio::test]
async fn provider_error_degrades_to_empty() {
    let fetched = fetcher_for(FailingProvider).fetch("q", 10).await.unwrap();
    assert!(fetched.is_empty());
    let error = fetched.provider_error.unwrap();
    assert!(error.contains("503"), "unexpected error text: {error}");
}

#[tokio::test]
async fn auth_failure_refuses_to_fetch() {
    let fetcher = PostFetcher::new(
        Err(SearchError::Auth("bad token".to_string())),
        keyword_classifier(),
    );
    assert!(!fetcher.is_authenticated());

    let err = fetcher.fetch("q", 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Authentication(_)));
    assert!(err.to_string().contains("bad token"));

    // Still refused on a second attempt
    assert!(fetcher.fetch("q", 10).await.is_err());
}

// ============================================================
// Chain: fetcher -> report
// ============================================================

#[tokio::test]
async fn end_to_end_report() {
    let mut posts = Vec::new();
    for i in 1..=6 {
        posts.push(SearchPost::new(&format!("p{i}"), &format!("yay P{i}")));
    }
    for i in 1..=3 {
        posts.push(SearchPost::new(&format!("n{i}"), &format!("boo N{i}")));
    }
    posts.push(SearchPost::new("u1", "just a statement"));

    let (provider, _) = fake(posts);
    let fetched = fetcher_for(provider).fetch("q", 100).await.unwrap();
    let report = aggregate(&fetched.posts).unwrap();

    assert_eq!(report.total, 10);
    assert!((report.positive_pct - 60.0).abs() < 1e-9);
    assert!((report.negative_pct - 30.0).abs() < 1e-9);
    assert!((report.neutral_pct - 10.0).abs() < 1e-9);
    assert_eq!(
        report.positive_samples,
        vec!["yay P1", "yay P2", "yay P3", "yay P4", "yay P5"]
    );
    assert_eq!(report.negative_samples, vec!["boo N1", "boo N2", "boo N3"]);
}

#[tokio::test]
async fn default_classifier_end_to_end() {
    let (provider, _) = fake(vec![
        SearchPost::new("1", "What a wonderful day @sun"),
        SearchPost::new("2", "This is terrible news https://t.co/x"),
        SearchPost::new("3", "Press conference at noon"),
    ]);
    let fetcher = PostFetcher::new(Ok(Box::new(provider)), SentimentClassifier::default());
    let fetched = fetcher.fetch("q", 3).await.unwrap();
    let report = aggregate(&fetched.posts).unwrap();

    assert_eq!(report.positive_count, 1);
    assert_eq!(report.negative_count, 1);
    assert_eq!(report.neutral_count, 1);
}

// ============================================================
// Chain: fetcher -> summary (report vs. no results)
// ============================================================

#[tokio::test]
async fn summary_with_posts_has_report() {
    let (provider, _) = fake(vec![
        SearchPost::new("1", "yay"),
        SearchPost::new("2", "boo"),
    ]);
    let fetched = fetcher_for(provider).fetch("q", 10).await.unwrap();
    let summary = summarize("q", &fetched, DEFAULT_SAMPLE_SIZE);

    assert!(summary.has_results());
    assert_eq!(summary.total, 2);
    assert!(summary.provider_error.is_none());
    assert_eq!(summary.report.unwrap().positive_pct, 50.0);
}

#[tokio::test]
async fn summary_without_matches_takes_no_results_path() {
    let (provider, _) = fake(vec![]);
    let fetched = fetcher_for(provider).fetch("q", 10).await.unwrap();
    let summary = summarize("q", &fetched, DEFAULT_SAMPLE_SIZE);

    assert!(!summary.has_results());
    assert_eq!(summary.total, 0);
    assert!(summary.report.is_none());
    assert!(summary.provider_error.is_none());
}

#[tokio::test]
async fn summary_after_provider_error_keeps_the_error() {
    let fetched = fetcher_for(FailingProvider).fetch("q", 10).await.unwrap();
    let summary = summarize("q", &fetched, DEFAULT_SAMPLE_SIZE);

    assert!(!summary.has_results());
    assert!(summary.provider_error.unwrap().contains("503"));
}

#[tokio::test]
async fn summary_json_has_same_keys_either_way() {
    let (with_posts, _) = fake(vec![SearchPost::new("1", "yay")]);
    let full = fetcher_for(with_posts).fetch("q", 10).await.unwrap();
    let empty = fetcher_for(FailingProvider).fetch("q", 10).await.unwrap();

    let full = serde_json::to_value(summarize("q", &full, 5)).unwrap();
    let empty = serde_json::to_value(summarize("q", &empty, 5)).unwrap();

    let keys = |v: &serde_json::Value| {
        let mut keys: Vec<String> = v.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    };
    assert_eq!(keys(&full), keys(&empty));
    assert_eq!(keys(&full), vec!["provider_error", "query", "report", "total"]);

    assert!(full["provider_error"].is_null());
    assert_eq!(full["report"]["total"], 1);
    assert!(empty["report"].is_null());
    assert!(empty["provider_error"].is_string());
}

#[test]
fn no_results_message_matches_original_wording() {
    assert_eq!(NO_RESULTS_MESSAGE, "No tweets found!");
}
