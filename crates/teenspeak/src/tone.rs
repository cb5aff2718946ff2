//! Keyword-frequency tone classifier.
//!
//! Counts substring occurrences of fixed keyword sets in the lower-cased text.
//! Substring matching is intentional ("sus" also counts inside "suspicious").

use serde::Serialize;

pub const TONE_WARNING_CAUTIOUS: &str = "Warning / cautious situation";
pub const TONE_POSITIVE: &str = "Positive, excited";
pub const TONE_NEGATIVE: &str = "Negative, frustrated";
pub const TONE_WARNING_SKEPTICAL: &str = "Warning, skeptical";
pub const TONE_NEUTRAL: &str = "Neutral, casual";

const POSITIVE_WORDS: &[&str] = &[
    "fire", "lit", "slay", "bussin", "goat", "drip", "glow up", "love", "awesome", "amazing",
    "excellent", "great", "delicious", "stylish", "charm", "fun", "happy", "excited",
];

const NEGATIVE_WORDS: &[&str] = &[
    "mid", "trash", "cringe", "salty", "ick", "bad", "terrible", "awful", "hate", "annoying",
    "boring", "mediocre", "embarrassing", "upset", "angry", "bitter",
];

const WARNING_WORDS: &[&str] = &[
    "sus", "dipped", "bounce", "cap", "sketchy", "shady", "suspicious", "lying", "careful",
    "sneaky", "dodgy", "trouble", "ghost",
];

const CASUAL_WORDS: &[&str] = &[
    "ngl", "tbh", "lowkey", "highkey", "tho", "bro", "bruh", "bet", "vibe", "chill", "okay",
];

/// Words that turn any warning signal into the cautious-situation label
const CAUTION_TRIGGERS: &[&str] = &["sus", "dipped", "bounce"];

/// Keyword hit counts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ToneScores {
    pub positive: usize,
    pub negative: usize,
    pub warning: usize,
    pub casual: usize,
}

impl ToneScores {
    pub fn of(text: &str) -> Self {
        let lower = text.to_lowercase();
        Self {
            positive: count_hits(&lower, POSITIVE_WORDS),
            negative: count_hits(&lower, NEGATIVE_WORDS),
            warning: count_hits(&lower, WARNING_WORDS),
            casual: count_hits(&lower, CASUAL_WORDS),
        }
    }
}

fn count_hits(lower: &str, words: &[&str]) -> usize {
    words.iter().map(|word| lower.matches(word).count()).sum()
}

/// Label the tone of `text`. Pure; first satisfied rule wins.
pub fn classify(text: &str) -> &'static str {
    let scores = ToneScores::of(text);
    let lower = text.to_lowercase();

    if scores.warning > 0 && CAUTION_TRIGGERS.iter().any(|w| lower.contains(w)) {
        TONE_WARNING_CAUTIOUS
    } else if scores.positive > scores.negative && scores.positive > scores.warning {
        TONE_POSITIVE
    } else if scores.negative > scores.positive && scores.negative > scores.warning {
        TONE_NEGATIVE
    } else if scores.warning > scores.positive && scores.warning > scores.negative {
        TONE_WARNING_SKEPTICAL
    } else {
        TONE_NEUTRAL
    }
}
