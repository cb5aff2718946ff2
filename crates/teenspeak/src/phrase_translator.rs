//! Phrase translator - token lookup, substitution and clean-up.
//!
//! Tokens are resolved in first-occurrence order and every match is
//! substituted across the running text in that same order, so earlier
//! substitutions can affect later ones.

use regex::{NoExpand, Regex, RegexBuilder};
use std::collections::HashSet;
use std::sync::Arc;
use teenspeak_common::{SlangEntry, TranslationOutcome};
use tracing::{debug, warn};

use crate::grammar;
use crate::resolver::SlangResolver;
use crate::tone;

/// Tokens this short are never looked up
const MIN_TOKEN_CHARS: usize = 3;

/// Result of a dictionary-based phrase translation
#[derive(Debug, Clone, PartialEq)]
pub enum PhraseTranslation {
    Translated(TranslationOutcome),
    /// No candidate token resolved; the caller should fall back
    NoMatch,
}

pub struct PhraseTranslator {
    resolver: Arc<SlangResolver>,
}

impl PhraseTranslator {
    pub fn new(resolver: Arc<SlangResolver>) -> Self {
        Self { resolver }
    }

    pub async fn translate(&self, phrase: &str) -> PhraseTranslation {
        let mut matched: Vec<SlangEntry> = Vec::new();

        for token in candidate_tokens(phrase) {
            let Some(entry) = self.resolver.resolve(&token).await else {
                continue;
            };
            if matched.iter().any(|m| m.key() == entry.key()) {
                continue;
            }
            matched.push(entry);
        }

        if matched.is_empty() {
            debug!("No slang resolved in phrase");
            return PhraseTranslation::NoMatch;
        }

        let mut text = phrase.to_string();
        for entry in &matched {
            text = substitute(&text, entry);
        }
        let text = grammar::clean_up(&text);
        let tone = tone::classify(&text);

        debug!("Translated phrase with {} matches, tone '{}'", matched.len(), tone);
        PhraseTranslation::Translated(TranslationOutcome::from_matches(text, matched, tone))
    }
}

/// Lower-cased lookup candidates in first-occurrence order, de-duplicated
pub fn candidate_tokens(phrase: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    phrase
        .split_whitespace()
        .map(|raw| {
            raw.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Replace every whole-word, case-insensitive occurrence of the entry's term
pub fn substitute(text: &str, entry: &SlangEntry) -> String {
    match term_pattern(&entry.term) {
        Some(pattern) => pattern
            .replace_all(text, NoExpand(&entry.translation))
            .into_owned(),
        None => text.to_string(),
    }
}

fn term_pattern(term: &str) -> Option<Regex> {
    let term = term.trim();
    let word_edge = |c: Option<char>| c.map_or(false, |c| c.is_alphanumeric() || c == '_');

    let mut pattern = String::new();
    if word_edge(term.chars().next()) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(term));
    if word_edge(term.chars().last()) {
        pattern.push_str(r"\b");
    }

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| warn!("Unusable slang term '{}': {}", term, e))
        .ok()
}
