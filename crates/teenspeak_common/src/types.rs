//! Data model for slang entries and translation outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Context tag used when a source does not provide one
pub const DEFAULT_CONTEXT: &str = "casual";

/// Canonical lookup form of a term: trimmed and lower-cased
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Provenance of a slang entry. Assigned by the adapter that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    Local,
    External,
    Generative,
}

impl fmt::Display for EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntrySource::Local => write!(f, "local"),
            EntrySource::External => write!(f, "external"),
            EntrySource::Generative => write!(f, "generative"),
        }
    }
}

/// A single known slang mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlangEntry {
    pub term: String,
    pub translation: String,
    pub context: String,
    #[serde(default)]
    pub example: String,
    pub source: EntrySource,
}

impl SlangEntry {
    /// Build an entry from loosely shaped parts.
    ///
    /// Returns `None` when the term or translation is blank after trimming.
    /// A blank context falls back to [`DEFAULT_CONTEXT`].
    pub fn new(
        term: &str,
        translation: &str,
        context: Option<&str>,
        example: Option<&str>,
        source: EntrySource,
    ) -> Option<Self> {
        let term = term.trim();
        let translation = translation.trim();
        if term.is_empty() || translation.is_empty() {
            return None;
        }

        let context = context
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CONTEXT);

        Some(Self {
            term: term.to_string(),
            translation: translation.to_string(),
            context: context.to_string(),
            example: example.map(str::trim).unwrap_or_default().to_string(),
            source,
        })
    }

    /// Lookup key for this entry
    pub fn key(&self) -> String {
        normalize_term(&self.term)
    }
}

/// Human-readable label for where a translation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceLabel {
    #[serde(rename = "Local Dictionary")]
    LocalDictionary,
    #[serde(rename = "External Dictionary")]
    ExternalDictionary,
    #[serde(rename = "Generative AI")]
    GenerativeAi,
    #[serde(rename = "Error")]
    Error,
}

impl SourceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLabel::LocalDictionary => "Local Dictionary",
            SourceLabel::ExternalDictionary => "External Dictionary",
            SourceLabel::GenerativeAi => "Generative AI",
            SourceLabel::Error => "Error",
        }
    }

    /// Label for a dictionary-based translation built from `entries`
    pub fn for_entries(entries: &[SlangEntry]) -> Self {
        if entries.iter().any(|e| e.source == EntrySource::External) {
            SourceLabel::ExternalDictionary
        } else {
            SourceLabel::LocalDictionary
        }
    }
}

impl fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of translating a whole phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationOutcome {
    pub translated_text: String,
    /// Matched entries in first-occurrence order
    pub matched_entries: Vec<SlangEntry>,
    pub tone_label: String,
    pub source_label: SourceLabel,
    pub example_text: String,
}

impl TranslationOutcome {
    /// Outcome for a dictionary-based translation
    pub fn from_matches(translated_text: String, matched_entries: Vec<SlangEntry>, tone_label: &str) -> Self {
        let source_label = SourceLabel::for_entries(&matched_entries);
        let example_text = matched_entries
            .first()
            .map(|e| e.example.clone())
            .unwrap_or_default();

        Self {
            translated_text,
            matched_entries,
            tone_label: tone_label.to_string(),
            source_label,
            example_text,
        }
    }

    /// Error-flavored outcome: a banner in the text field, remediation in the tone field
    pub fn failure(message: &str, remediation: &str) -> Self {
        Self {
            translated_text: format!("❌ {}", message),
            matched_entries: Vec::new(),
            tone_label: remediation.to_string(),
            source_label: SourceLabel::Error,
            example_text: String::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.source_label == SourceLabel::Error
    }
}
