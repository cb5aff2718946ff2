//! Slang resolver - single-term lookup across definition sources.
//!
//! Local dictionary first (curated, always wins), then the external source.
//! External failures are logged and reported as "not found" so the phrase
//! pipeline keeps working when the network dictionary is down.

use serde::Serialize;
use std::sync::Arc;
use teenspeak_common::{normalize_term, SlangEntry};
use tracing::{debug, warn};

use crate::dictionary::LocalDictionary;
use crate::source::DefinitionSource;

/// Outcome of one term in a batch lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    pub term: String,
    pub entry: Option<SlangEntry>,
    pub found: bool,
}

impl LookupResult {
    pub fn new(term: &str, entry: Option<SlangEntry>) -> Self {
        Self {
            term: term.to_string(),
            found: entry.is_some(),
            entry,
        }
    }
}

pub struct SlangResolver {
    dictionary: Arc<LocalDictionary>,
    external: Option<Arc<dyn DefinitionSource>>,
}

impl SlangResolver {
    pub fn new(dictionary: Arc<LocalDictionary>, external: Arc<dyn DefinitionSource>) -> Self {
        Self {
            dictionary,
            external: Some(external),
        }
    }

    /// Resolver that never leaves the process
    pub fn local_only(dictionary: Arc<LocalDictionary>) -> Self {
        Self {
            dictionary,
            external: None,
        }
    }

    pub fn dictionary(&self) -> &LocalDictionary {
        &self.dictionary
    }

    /// Resolve one term. Never fails; `None` means no source knows it.
    pub async fn resolve(&self, term: &str) -> Option<SlangEntry> {
        let term = normalize_term(term);
        if term.is_empty() {
            return None;
        }

        if let Some(entry) = self.dictionary.lookup(&term) {
            debug!("Resolved '{}' locally as '{}'", term, entry.term);
            return Some(entry);
        }

        let external = self.external.as_ref()?;
        match external.lookup(&term).await {
            Ok(Some(entry)) => {
                debug!("Resolved '{}' via external dictionary", term);
                Some(entry)
            }
            Ok(None) => {
                debug!("No definition for '{}'", term);
                None
            }
            Err(e) => {
                warn!("External dictionary failed for '{}': {}", term, e);
                None
            }
        }
    }

    /// Resolve several terms in order
    pub async fn resolve_many(&self, terms: &[String]) -> Vec<LookupResult> {
        let mut results = Vec::with_capacity(terms.len());
        for term in terms {
            results.push(LookupResult::new(term, self.resolve(term).await));
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FakeDefinitionSource;
    use teenspeak_common::{EntrySource, SourceError};

    fn dictionary() -> Arc<LocalDictionary> {
        let entries = vec![
            SlangEntry::new("rizz", "charisma or charm", Some("positive"), None, EntrySource::Local).unwrap(),
            SlangEntry::new("cap", "lying", None, None, EntrySource::Local).unwrap(),
        ];
        Arc::new(LocalDictionary::from_entries(entries))
    }

    fn yeet() -> SlangEntry {
        SlangEntry::new("yeet", "throw with force", None, None, EntrySource::External).unwrap()
    }

    #[tokio::test]
    async fn test_local_hit_skips_external() {
        let external = Arc::new(FakeDefinitionSource::new(vec![yeet()]));
        let resolver = SlangResolver::new(dictionary(), external.clone());

        let entry = resolver.resolve("  RIZZ ").await.unwrap();
        assert_eq!(entry.translation, "charisma or charm");
        assert_eq!(entry.source, EntrySource::Local);
        assert_eq!(external.call_count(), 0);
    }

    #[tokio::test]
    async fn test_external_hit_after_local_miss() {
        let external = Arc::new(FakeDefinitionSource::new(vec![yeet()]));
        let resolver = SlangResolver::new(dictionary(), external.clone());

        let entry = resolver.resolve("Yeet").await.unwrap();
        assert_eq!(entry.source, EntrySource::External);
        assert_eq!(external.calls(), vec!["yeet".to_string()]);
    }

    #[tokio::test]
    async fn test_external_failure_is_not_found() {
        let external = Arc::new(FakeDefinitionSource::always_error(SourceError::Unavailable(
            "HTTP 503".into(),
        )));
        let resolver = SlangResolver::new(dictionary(), external.clone());

        assert!(resolver.resolve("yeet").await.is_none());
        assert_eq!(external.call_count(), 1);
    }

    #[tokio::test]
    async fn test_local_only_and_blank() {
        let resolver = SlangResolver::local_only(dictionary());
        assert!(resolver.resolve("yeet").await.is_none());
        assert!(resolver.resolve("   ").await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_many_keeps_order() {
        let external = Arc::new(FakeDefinitionSource::new(vec![yeet()]));
        let resolver = SlangResolver::new(dictionary(), external);

        let terms = vec!["yeet".to_string(), "nothing".to_string(), "cap".to_string()];
        let results = resolver.resolve_many(&terms).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].term, "yeet");
        assert!(results[0].found);
        assert!(!results[1].found);
        assert_eq!(results[2].entry.as_ref().unwrap().translation, "lying");
    }

    #[test]
    fn test_lookup_result_serializes_found() {
        let hit = serde_json::to_value(LookupResult::new("yeet", Some(yeet()))).unwrap();
        assert_eq!(hit["term"], "yeet");
        assert_eq!(hit["found"], true);
        assert_eq!(hit["entry"]["translation"], "throw with force");

        let miss = serde_json::to_value(LookupResult::new("nothing", None)).unwrap();
        assert_eq!(miss["found"], false);
        assert!(miss["entry"].is_null());
    }
}
