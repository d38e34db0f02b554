// Sentiment classification — text cleaning and polarity labeling.
//
// The PolarityScorer trait defines the scoring interface. LexiconScorer is
// the local default; anything else (a remote model, a test fake) plugs in
// behind the same trait without touching the classifier.

pub mod classifier;
pub mod clean;
pub mod lexicon;
pub mod traits;
