//! Local dictionary adapter.
//!
//! Curated slang dataset loaded once at start-up and read-only afterwards.
//! Datasets come in two container shapes (a bare list, or `{"slang": [...]}`)
//! and two row shapes (`term`/`translation` or `phrase`/`meaning`). Both are
//! normalized into [`SlangEntry`] at load time; unusable rows are dropped.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use teenspeak_common::{normalize_term, DatasetError, EntrySource, SlangEntry};
use tracing::{debug, info};

/// Dataset shipped with the crate
const BUNDLED_DATASET: &str = include_str!("../data/slang.json");

/// Maximum number of results returned by [`LocalDictionary::search`]
pub const SEARCH_LIMIT: usize = 10;

/// Raw dataset container, resolved once at load time
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawDataset {
    List(Vec<serde_json::Value>),
    Wrapped { slang: Vec<serde_json::Value> },
}

impl RawDataset {
    fn into_rows(self) -> Vec<serde_json::Value> {
        match self {
            RawDataset::List(rows) => rows,
            RawDataset::Wrapped { slang } => slang,
        }
    }
}

/// One dataset row in either accepted shape
#[derive(Debug, Default, Deserialize)]
struct RawRow {
    term: Option<String>,
    phrase: Option<String>,
    translation: Option<String>,
    meaning: Option<String>,
    context: Option<String>,
    example: Option<String>,
}

impl RawRow {
    fn into_entry(self) -> Option<SlangEntry> {
        let term = first_non_blank(self.term, self.phrase)?;
        let translation = first_non_blank(self.translation, self.meaning)?;
        SlangEntry::new(
            &term,
            &translation,
            self.context.as_deref(),
            self.example.as_deref(),
            EntrySource::Local,
        )
    }
}

fn first_non_blank(preferred: Option<String>, alias: Option<String>) -> Option<String> {
    preferred
        .filter(|s| !s.trim().is_empty())
        .or(alias.filter(|s| !s.trim().is_empty()))
}

/// Immutable, ordered slang dictionary
#[derive(Debug, Clone, Default)]
pub struct LocalDictionary {
    entries: Vec<SlangEntry>,
    keys: Vec<String>,
}

impl LocalDictionary {
    /// Load the dataset bundled with the crate
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Load a dataset file
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path)?;
        let dictionary = Self::from_json(&text)?;
        info!(
            "Loaded {} slang entries from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Parse and normalize a dataset from JSON text
    pub fn from_json(text: &str) -> Result<Self, DatasetError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let raw = RawDataset::deserialize(value).map_err(|_| {
            DatasetError::UnsupportedShape(
                "expected a list of rows or an object with a \"slang\" list".to_string(),
            )
        })?;

        let rows = raw.into_rows();
        let total = rows.len();
        let entries: Vec<SlangEntry> = rows
            .into_iter()
            .filter_map(|row| serde_json::from_value::<RawRow>(row).ok())
            .filter_map(RawRow::into_entry)
            .collect();

        if entries.len() < total {
            debug!("Dropped {} unusable dataset rows", total - entries.len());
        }

        Ok(Self::from_entries(entries))
    }

    /// Build a dictionary from already normalized entries (dataset order preserved)
    pub fn from_entries(entries: Vec<SlangEntry>) -> Self {
        let entries: Vec<SlangEntry> = entries
            .into_iter()
            .map(|mut e| {
                e.source = EntrySource::Local;
                e
            })
            .collect();
        let keys = entries.iter().map(SlangEntry::key).collect();
        Self { entries, keys }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SlangEntry] {
        &self.entries
    }

    /// Look up a term.
    ///
    /// Exact match on the normalized term wins. Otherwise the first entry
    /// (dataset order) whose term contains the input, or is contained in it.
    pub fn lookup(&self, term: &str) -> Option<SlangEntry> {
        let needle = normalize_term(term);
        if needle.is_empty() {
            return None;
        }

        let index = self
            .keys
            .iter()
            .position(|key| *key == needle)
            .or_else(|| {
                self.keys
                    .iter()
                    .position(|key| key.contains(&needle) || needle.contains(key.as_str()))
            })?;

        Some(self.entries[index].clone())
    }

    /// Entries whose term or translation contains `query`, capped at [`SEARCH_LIMIT`]
    pub fn search(&self, query: &str) -> Vec<SlangEntry> {
        let needle = normalize_term(query);
        if needle.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .zip(&self.keys)
            .filter(|(entry, key)| {
                key.contains(&needle) || entry.translation.to_lowercase().contains(&needle)
            })
            .map(|(entry, _)| entry.clone())
            .take(SEARCH_LIMIT)
            .collect()
    }

    /// Entry at `index` modulo the dictionary size
    pub fn entry_at(&self, index: usize) -> Option<&SlangEntry> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(index % self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocalDictionary {
        LocalDictionary::from_json(
            r#"[
                {"term": "rizz", "translation": "charisma or charm", "context": "positive"},
                {"phrase": "No Cap", "meaning": "no lie"},
                {"term": "", "translation": "orphan"},
                {"term": "ghost"},
                {"term": "cap", "translation": "lying", "example": "that's cap"},
                "not a row",
                {"term": 42, "translation": "wrong type"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let dict = LocalDictionary::bundled().unwrap();
        assert!(dict.len() > 20);
        assert!(dict.entries().iter().all(|e| e.source == EntrySource::Local));
    }

    #[test]
    fn test_rows_normalized_and_invalid_dropped() {
        let dict = sample();
        assert_eq!(dict.len(), 3);

        let no_cap = &dict.entries()[1];
        assert_eq!(no_cap.term, "No Cap");
        assert_eq!(no_cap.translation, "no lie");
        assert_eq!(no_cap.context, "casual");
        assert_eq!(no_cap.example, "");
    }

    #[test]
    fn test_wrapped_container() {
        let dict = LocalDictionary::from_json(
            r#"{"slang": [{"term": "bet", "translation": "okay"}]}"#,
        )
        .unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.lookup("bet").unwrap().translation, "okay");
    }

    #[test]
    fn test_unsupported_shape() {
        let err = LocalDictionary::from_json(r#"{"words": []}"#).unwrap_err();
        assert!(matches!(err, DatasetError::UnsupportedShape(_)));

        let err = LocalDictionary::from_json("not json").unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[test]
    fn test_exact_match_beats_earlier_partial() {
        // "no cap" precedes "cap" and contains it, but exact match wins
        let entry = sample().lookup("  CAP ").unwrap();
        assert_eq!(entry.translation, "lying");
        assert_eq!(entry.source, EntrySource::Local);
    }

    #[test]
    fn test_partial_match_both_directions() {
        let dict = sample();
        // input contains entry term
        assert_eq!(dict.lookup("rizzler").unwrap().term, "rizz");
        // entry term contains input
        assert_eq!(dict.lookup("riz").unwrap().term, "rizz");
    }

    #[test]
    fn test_miss_and_empty() {
        let dict = sample();
        assert!(dict.lookup("hello").is_none());
        assert!(dict.lookup("   ").is_none());
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let dict = sample();
        assert_eq!(dict.lookup("rizz"), dict.lookup("rizz"));
    }

    #[test]
    fn test_search_term_or_translation() {
        let dict = sample();
        let hits = dict.search("lie");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].term, "No Cap");

        let hits = dict.search("cap");
        assert_eq!(hits.len(), 2);
        assert!(dict.search("").is_empty());
    }

    #[test]
    fn test_search_is_capped() {
        let rows: Vec<String> = (0..25)
            .map(|i| format!(r#"{{"term": "word{}", "translation": "meaning"}}"#, i))
            .collect();
        let dict = LocalDictionary::from_json(&format!("[{}]", rows.join(","))).unwrap();
        assert_eq!(dict.search("word").len(), SEARCH_LIMIT);
    }

    #[test]
    fn test_entry_at_wraps() {
        let dict = sample();
        assert_eq!(dict.entry_at(3).unwrap().term, "rizz");
        assert!(LocalDictionary::default().entry_at(0).is_none());
    }
}
