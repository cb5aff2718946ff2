//! External slang dictionary client.
//!
//! Queries a community slang-definition service (Urban Dictionary's public
//! `define` endpoint) and turns its first hit into a parent-friendly entry:
//! markup stripped, unsafe content dropped, definition cut to two sentences.

use anyhow::{Context, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::time::Duration;
use teenspeak_common::config::ExternalConfig;
use teenspeak_common::{EntrySource, SlangEntry, SourceError};
use tracing::debug;

use crate::source::DefinitionSource;

/// Hits mentioning any of these are discarded
pub const DENYLIST: &[&str] = &["nsfw", "adult", "explicit", "sexual", "vulgar", "profanity"];

/// Used when nothing survives sentence truncation
const EMPTY_DEFINITION: &str = "No clear definition available.";

static BRACKET_MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Response body of the define endpoint
#[derive(Debug, Deserialize)]
struct DefineResponse {
    #[serde(default)]
    list: Vec<RawDefinition>,
}

#[derive(Debug, Deserialize)]
struct RawDefinition {
    #[serde(default)]
    definition: String,
    #[serde(default)]
    example: String,
}

/// HTTP client for the external slang dictionary
pub struct UrbanClient {
    endpoint: String,
    http: reqwest::Client,
}

impl UrbanClient {
    pub fn new(config: &ExternalConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("teenspeak/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            http,
        })
    }
}

#[async_trait]
impl DefinitionSource for UrbanClient {
    async fn lookup(&self, term: &str) -> Result<Option<SlangEntry>, SourceError> {
        debug!("External dictionary lookup: {}", term);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("term", term)])
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::Unavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: DefineResponse = response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        let Some(first) = body.list.into_iter().next() else {
            return Ok(None);
        };

        Ok(normalize_definition(term, &first.definition, &first.example))
    }
}

/// Turn a raw definition into an entry, or `None` if it trips the content filter
pub fn normalize_definition(term: &str, definition: &str, example: &str) -> Option<SlangEntry> {
    let definition = strip_markup(definition);
    let example = strip_markup(example);

    if is_unsafe(&definition) || is_unsafe(&example) {
        debug!("Discarding filtered definition for {}", term);
        return None;
    }

    let translation = first_sentences(&definition, 2);
    let translation = if translation.is_empty() {
        EMPTY_DEFINITION.to_string()
    } else {
        translation
    };

    SlangEntry::new(
        term,
        &translation,
        Some(context_tag(&definition)),
        Some(&example),
        EntrySource::External,
    )
}

/// Replace `[word]` annotations with `word` and collapse whitespace
fn strip_markup(text: &str) -> String {
    let unbracketed = BRACKET_MARKUP.replace_all(text, "$1");
    WHITESPACE.replace_all(&unbracketed, " ").trim().to_string()
}

fn is_unsafe(text: &str) -> bool {
    let lower = text.to_lowercase();
    DENYLIST.iter().any(|word| lower.contains(word))
}

/// First `count` non-empty sentences, joined and terminated with a period
fn first_sentences(text: &str, count: usize) -> String {
    let mut joined = SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(count)
        .collect::<Vec<_>>()
        .join(". ");

    if !joined.is_empty() && !joined.ends_with('.') {
        joined.push('.');
    }
    joined
}

/// Coarse context tag from keywords in the definition
fn context_tag(definition: &str) -> &'static str {
    let lower = definition.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["cool", "awesome"]) {
        "positive"
    } else if has(&["bad", "terrible"]) {
        "negative"
    } else if has(&["warning", "careful"]) {
        "warning"
    } else {
        "casual"
    }
}
