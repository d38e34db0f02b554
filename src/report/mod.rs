// Report aggregation — sentiment percentages and sample posts.
//
// Percentages are shares of the whole fetched set, so they always sum to
// 100. An empty set has no report: `aggregate` returns None and callers
// print a "no results" message instead.

use serde::{Deserialize, Serialize};

use crate::pipeline::fetch::{ClassifiedPost, Fetch};
use crate::sentiment::traits::Sentiment;

/// How many sample posts per class the original report shows.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Aggregate view of one batch of classified posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub total: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
    /// First positive posts in fetch order.
    pub positive_samples: Vec<String>,
    /// First negative posts in fetch order.
    pub negative_samples: Vec<String>,
}

/// Outcome of one run: either a report or the "no results" path.
///
/// Both outcomes serialize to the same shape; `report` is null when nothing
/// was found, and `provider_error` is set when the search itself failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub query: String,
    pub total: usize,
    pub provider_error: Option<String>,
    pub report: Option<Report>,
}

impl Summary {
    /// True when there is a report to show.
    pub fn has_results(&self) -> bool {
        self.report.is_some()
    }
}

/// Decide between a report and "no results" for a finished fetch.
pub fn summarize(query: &str, fetched: &Fetch, sample_size: usize) -> Summary {
    let report = aggregate_with_samples(&fetched.posts, sample_size);
    Summary {
        query: query.to_string(),
        total: fetched.posts.len(),
        provider_error: fetched.provider_error.clone(),
        report,
    }
}

/// Build a report with the default of 5 samples per class.
///
/// Returns None for an empty batch.
pub fn aggregate(posts: &[ClassifiedPost]) -> Option<Report> {
    aggregate_with_samples(posts, DEFAULT_SAMPLE_SIZE)
}

/// Build a report keeping at most `sample_size` posts per class.
pub fn aggregate_with_samples(posts: &[ClassifiedPost], sample_size: usize) -> Option<Report> {
    if posts.is_empty() {
        return None;
    }

    let positive = partition(posts, Sentiment::Positive);
    let negative = partition(posts, Sentiment::Negative);

    let total = posts.len();
    // Neutral is the remainder, so the three shares cannot drift apart
    let neutral_count = total - positive.len() - negative.len();

    Some(Report {
        total,
        positive_count: positive.len(),
        negative_count: negative.len(),
        neutral_count,
        positive_pct: percentage(positive.len(), total),
        negative_pct: percentage(negative.len(), total),
        neutral_pct: percentage(neutral_count, total),
        positive_samples: sample(&positive, sample_size),
        negative_samples: sample(&negative, sample_size),
    })
}

/// Posts with the given label, in their original order.
pub fn partition(posts: &[ClassifiedPost], sentiment: Sentiment) -> Vec<&ClassifiedPost> {
    posts.iter().filter(|p| p.sentiment == sentiment).collect()
}

fn percentage(count: usize, total: usize) -> f64 {
    100.0 * count as f64 / total as f64
}

fn sample(posts: &[&ClassifiedPost], n: usize) -> Vec<String> {
    posts.iter().take(n).map(|p| p.text.clone()).collect()
}
