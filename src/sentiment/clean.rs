// Post text cleaning — strips noise from a post before scoring.
//
// Scorers see only ASCII letters, digits, and single spaces. The raw text is
// kept separately for display.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Matches, in priority order at each position: an @mention, a URL, or any
/// single character that is not an ASCII letter, digit, space, or tab.
///
/// The URL arm must come before the character arm so a link is consumed
/// whole when the scan reaches its scheme.
static NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@[A-Za-z0-9_]+|\w+://\S+|[^0-9A-Za-z \t]").expect("valid noise pattern")
});

/// Clean a raw post for polarity scoring.
///
/// Every noise match is replaced with a space, then whitespace runs are
/// collapsed and the ends trimmed. Returns an empty string when nothing
/// alphanumeric survives.
pub fn clean_text(text: &str) -> String {
    let stripped = NOISE.replace_all(text, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
