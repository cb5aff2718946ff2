//! Definition source abstraction for network-backed dictionaries.
//!
//! Production code uses [`crate::urban_client::UrbanClient`].
//! Tests use [`FakeDefinitionSource`] with pre-configured entries.

use async_trait::async_trait;
use std::sync::Mutex;
use teenspeak_common::{normalize_term, EntrySource, SlangEntry, SourceError};

/// A remote dictionary that can be asked about one term at a time
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Look up a normalized term.
    ///
    /// `Ok(None)` is a normal miss; `Err` means the source could not answer.
    async fn lookup(&self, term: &str) -> Result<Option<SlangEntry>, SourceError>;
}

/// Fake definition source for testing
pub struct FakeDefinitionSource {
    entries: Vec<SlangEntry>,
    failure: Option<SourceError>,
    calls: Mutex<Vec<String>>,
}

impl FakeDefinitionSource {
    /// Source that knows exactly `entries`
    pub fn new(entries: Vec<SlangEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|mut e| {
                e.source = EntrySource::External;
                e
            })
            .collect();
        Self {
            entries,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Source that knows nothing
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Source that fails every lookup
    pub fn always_error(error: SourceError) -> Self {
        Self {
            failure: Some(error),
            ..Self::empty()
        }
    }

    /// Number of lookups made
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Terms looked up, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DefinitionSource for FakeDefinitionSource {
    async fn lookup(&self, term: &str) -> Result<Option<SlangEntry>, SourceError> {
        self.calls.lock().unwrap().push(term.to_string());

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let key = normalize_term(term);
        Ok(self.entries.iter().find(|e| e.key() == key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_source_hit_and_miss() {
        let entry = SlangEntry::new("yeet", "throw", None, None, EntrySource::Local).unwrap();
        let source = FakeDefinitionSource::new(vec![entry]);

        let hit = source.lookup("YEET").await.unwrap().unwrap();
        assert_eq!(hit.source, EntrySource::External);
        assert!(source.lookup("nope").await.unwrap().is_none());
        assert_eq!(source.calls(), vec!["YEET".to_string(), "nope".to_string()]);
    }

    #[tokio::test]
    async fn test_fake_source_error() {
        let source = FakeDefinitionSource::always_error(SourceError::Unavailable("down".into()));
        assert!(source.lookup("yeet").await.is_err());
        assert_eq!(source.call_count(), 1);
    }
}
