// Polarity scorer trait and the three-way sentiment label.

use serde::{Deserialize, Serialize};

/// Sentiment label derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Map a polarity to a label: above zero is positive, exactly zero is
    /// neutral, below zero is negative.
    ///
    /// NaN fails both comparisons and lands on neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait for scoring the polarity of already-cleaned text.
///
/// Implementations return a value in [-1.0, 1.0]. Scoring is synchronous;
/// the default scorer is a local lexicon and needs no I/O.
pub trait PolarityScorer: Send + Sync {
    /// Score a single text. Empty text should score 0.0.
    fn polarity(&self, text: &str) -> f64;
}
