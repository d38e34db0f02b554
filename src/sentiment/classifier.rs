// Sentiment classifier — maps the polarity of cleaned text to a label.

use tracing::trace;

use super::clean::clean_text;
use super::lexicon::LexiconScorer;
use super::traits::{PolarityScorer, Sentiment};

/// Labels raw post text using a pluggable polarity scorer.
///
/// The label depends only on the polarity of the cleaned text, so two posts
/// that clean to the same string always get the same label.
pub struct SentimentClassifier {
    scorer: Box<dyn PolarityScorer>,
}

impl SentimentClassifier {
    pub fn new(scorer: Box<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    /// Polarity of the cleaned text, straight from the scorer.
    pub fn polarity(&self, text: &str) -> f64 {
        let cleaned = clean_text(text);
        self.scorer.polarity(&cleaned)
    }

    /// Classify a raw post.
    pub fn classify(&self, text: &str) -> Sentiment {
        let polarity = self.polarity(text);
        let sentiment = Sentiment::from_polarity(polarity);
        trace!(polarity = polarity, sentiment = %sentiment, "Classified post");
        sentiment
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(Box::new(LexiconScorer::default()))
    }
}
