//! Translation history - newest first, bounded, stored as JSON.
//!
//! Owned by the CLI; the translation pipeline never reads it.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use teenspeak_common::{SourceLabel, TranslationOutcome};
use tracing::warn;
use uuid::Uuid;

/// One recorded translation attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: Uuid,
    pub original: String,
    pub translation: String,
    pub tone: String,
    pub source: SourceLabel,
    pub timestamp: DateTime<Utc>,
}

impl HistoryItem {
    pub fn new(original: &str, outcome: &TranslationOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            original: original.trim().to_string(),
            translation: outcome.translated_text.clone(),
            tone: outcome.tone_label.clone(),
            source: outcome.source_label,
            timestamp: Utc::now(),
        }
    }
}

/// History file with a fixed capacity
#[derive(Debug)]
pub struct History {
    path: PathBuf,
    limit: usize,
    items: Vec<HistoryItem>,
}

impl History {
    /// Default history file under the user data directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("teenspeak").join("history.json"))
    }

    /// Open a history file. A missing file is an empty history; an
    /// unreadable one is reported and started over.
    pub fn open(path: PathBuf, limit: usize) -> Self {
        let items = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!("Discarding unreadable history {}: {}", path.display(), e);
                Vec::new()
            }),
            Err(_) => Vec::new(),
        };

        let mut history = Self { path, limit, items };
        history.items.truncate(limit);
        history
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    /// Insert at the front, evicting the oldest beyond the limit
    pub fn record(&mut self, item: HistoryItem) {
        self.items.insert(0, item);
        self.items.truncate(self.limit);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write history {}", self.path.display()))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
