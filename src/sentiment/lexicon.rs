// Lexicon polarity scorer — the default, fully local PolarityScorer.
//
// Each known word carries a polarity in [-1, 1]. A negation word flips and
// dampens the next hit (x -0.5); an intensifier scales it. The text's polarity
// is the mean over all hits, so text with no known words scores exactly 0.0.

use std::collections::HashMap;

use tracing::debug;

use super::traits::PolarityScorer;

/// Multiplier applied to a hit that follows a negation word.
const NEGATION_FACTOR: f64 = -0.5;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("loving", 0.6),
    ("lovely", 0.5),
    ("like", 0.2),
    ("nice", 0.6),
    ("happy", 0.8),
    ("glad", 0.5),
    ("beautiful", 0.85),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("brilliant", 0.9),
    ("perfect", 1.0),
    ("fun", 0.3),
    ("funny", 0.25),
    ("cool", 0.35),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("exciting", 0.3),
    ("excited", 0.4),
    ("proud", 0.8),
    ("respect", 0.3),
    ("support", 0.3),
    ("strong", 0.43),
    ("kind", 0.6),
    ("sweet", 0.35),
    ("cute", 0.5),
    ("congratulations", 0.6),
    ("congrats", 0.6),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("win", 0.8),
    ("won", 0.6),
    ("success", 0.3),
    ("successful", 0.75),
    ("positive", 0.23),
    ("hope", 0.3),
    ("hopeful", 0.3),
    ("peace", 0.3),
    ("peaceful", 0.25),
    ("blessed", 0.6),
    ("incredible", 0.9),
    ("superb", 1.0),
    ("true", 0.35),
    ("right", 0.29),
    ("fine", 0.42),
    ("pretty", 0.25),
    ("interesting", 0.5),
    ("smart", 0.21),
    ("healthy", 0.5),
    ("calm", 0.3),
    ("fair", 0.7),
    ("easy", 0.43),
    ("safe", 0.5),
    ("free", 0.4),
    ("favorite", 0.5),
    ("favourite", 0.5),
    ("legend", 0.5),
    ("iconic", 0.5),
    ("together", 0.1),
    ("forever", 0.2),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("horrible", -1.0),
    ("awful", -1.0),
    ("hate", -0.8),
    ("hated", -0.9),
    ("sad", -0.5),
    ("sadly", -0.5),
    ("unhappy", -0.6),
    ("angry", -0.5),
    ("upset", -0.4),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("shocking", -0.5),
    ("shocked", -0.7),
    ("painful", -0.7),
    ("pain", -0.4),
    ("hurt", -0.5),
    ("broken", -0.4),
    ("heartbreaking", -0.8),
    ("heartbroken", -0.8),
    ("cry", -0.4),
    ("crying", -0.4),
    ("tragic", -0.75),
    ("poor", -0.4),
    ("wrong", -0.5),
    ("stupid", -0.8),
    ("ugly", -0.7),
    ("boring", -1.0),
    ("annoying", -0.8),
    ("fake", -0.5),
    ("lie", -0.5),
    ("lies", -0.5),
    ("toxic", -0.6),
    ("crazy", -0.6),
    ("sick", -0.71),
    ("weak", -0.38),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.5),
    ("lose", -0.5),
    ("lost", -0.3),
    ("loss", -0.4),
    ("fear", -0.5),
    ("scared", -0.5),
    ("afraid", -0.6),
    ("worried", -0.4),
    ("worry", -0.4),
    ("problem", -0.3),
    ("disaster", -0.8),
    ("divorce", -0.3),
    ("separation", -0.2),
    ("breakup", -0.4),
    ("shame", -0.6),
    ("shameful", -0.7),
    ("disgusting", -1.0),
    ("pathetic", -1.0),
    ("useless", -0.5),
    ("negative", -0.3),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("tough", -0.39),
    ("unfortunate", -0.5),
    ("unfortunately", -0.5),
    ("rip", -0.3),
    ("dead", -0.2),
    ("died", -0.4),
    ("death", -0.5),
    ("miss", -0.2),
    ("alone", -0.3),
    ("lonely", -0.5),
    ("cheat", -0.6),
    ("cheated", -0.6),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nobody", "nothing", "cannot", "cant",
    "dont", "doesnt", "didnt", "isnt", "arent", "wasnt", "werent", "wont", "wouldnt",
    "shouldnt", "couldnt", "aint", "hardly", "barely",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.3),
    ("extremely", 1.5),
    ("absolutely", 1.5),
    ("totally", 1.4),
    ("completely", 1.4),
    ("super", 1.4),
    ("incredibly", 1.5),
    ("truly", 1.2),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("kinda", 0.7),
];

/// Rule-based English polarity scorer.
///
/// Zero API calls, deterministic. Input is expected to be cleaned text, where
/// apostrophes are gone: "won't" arrives as "won t", and the pair is read as
/// a single negation.
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    negations: Vec<&'static str>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        let words = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .map(|(w, p)| (w.to_string(), *p))
            .collect();

        Self {
            words,
            negations: NEGATIONS.to_vec(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }
}

impl LexiconScorer {
    /// Add or override a word's polarity. Values are clamped to [-1, 1].
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.words
            .insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
        self
    }

    /// Number of words with a known polarity.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word)
    }
}

/// True when `word` is the first half of a split "n't" contraction.
fn is_contraction_head(word: &str, next: Option<&str>) -> bool {
    next == Some("t") && word.len() > 1 && word.ends_with('n')
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut hits: Vec<f64> = Vec::new();
        let mut negate = false;
        let mut intensity = 1.0;

        let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
        let mut i = 0;

        while i < words.len() {
            let word = words[i].as_str();

            // Cleaned contractions arrive split: "won t", "isn t". The head is
            // a negation, never a lexicon hit.
            if is_contraction_head(word, words.get(i + 1).map(String::as_str)) {
                negate = true;
                i += 2;
                continue;
            }

            if self.is_negation(word) {
                negate = true;
            } else if let Some(score) = self.words.get(word) {
                let mut score = *score * intensity;
                if negate {
                    score *= NEGATION_FACTOR;
                }
                hits.push(score);
                negate = false;
                intensity = 1.0;
            } else if let Some(mult) = self.intensifiers.get(word) {
                intensity = *mult;
            }

            i += 1;
        }

        if hits.is_empty() {
            return 0.0;
        }

        let polarity = (hits.iter().sum::<f64>() / hits.len() as f64).clamp(-1.0, 1.0);

        debug!(
            hits = hits.len(),
            polarity = polarity,
            "Scored text with lexicon"
        );

        polarity
    }
}
