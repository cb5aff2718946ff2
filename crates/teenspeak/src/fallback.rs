//! Fallback orchestrator - whole-phrase generative translation.
//!
//! Runs only when no token resolved. Generative failures are never
//! propagated; they become an error-flavored outcome with a banner and a
//! remediation hint.

use std::sync::Arc;
use teenspeak_common::{EntrySource, SlangEntry, SourceLabel, TranslationOutcome};
use tracing::{info, warn};

use crate::llm_client::GenerativeClient;

pub struct FallbackOrchestrator {
    client: Arc<dyn GenerativeClient>,
}

impl FallbackOrchestrator {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    pub async fn handle_no_match(&self, phrase: &str) -> TranslationOutcome {
        info!("No dictionary match, using generative fallback");

        match self.client.translate(phrase).await {
            Ok(answer) => {
                let matched_entries = SlangEntry::new(
                    phrase,
                    &answer.translation,
                    Some(&answer.context),
                    Some(&answer.example),
                    EntrySource::Generative,
                )
                .into_iter()
                .collect();

                TranslationOutcome {
                    translated_text: answer.translation,
                    matched_entries,
                    tone_label: answer.context,
                    source_label: SourceLabel::GenerativeAi,
                    example_text: answer.example,
                }
            }
            Err(e) => {
                warn!("Generative fallback failed: {}", e);
                TranslationOutcome::failure(e.user_message(), e.remediation())
            }
        }
    }
}
