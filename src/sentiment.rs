//! Keyword-count headline sentiment.

use crate::core::Sentiment;

const POSITIVE: [&str; 6] = ["up", "rise", "gain", "bullish", "beat", "surge"];
const NEGATIVE: [&str; 6] = ["down", "fall", "drop", "bearish", "miss", "plunge"];

/// Scores `text` by counting positive and negative keywords.
///
/// Tokens are whitespace-separated and lower-cased; punctuation is kept, so `"beat."`
/// does not count as `"beat"`.
#[must_use]
pub fn analyze(text: &str) -> Sentiment {
    let score: i32 = text
        .split_whitespace()
        .map(|word| {
            let word = word.to_lowercase();
            if POSITIVE.contains(&word.as_str()) {
                1
            } else if NEGATIVE.contains(&word.as_str()) {
                -1
            } else {
                0
            }
        })
        .sum();

    match score.signum() {
        1 => Sentiment::Up,
        -1 => Sentiment::Down,
        _ => Sentiment::Flat,
    }
}
