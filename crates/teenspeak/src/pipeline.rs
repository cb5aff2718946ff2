//! Translator - the entry points exposed to callers.
//!
//! `translate` runs the phrase translator and, when nothing resolves, the
//! generative fallback. `resolve` looks up a single term. Both always
//! return a value; failures surface as data, not errors.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::sync::Arc;
use teenspeak_common::{SlangEntry, TeenspeakConfig, TranslationOutcome};
use tracing::info;

use crate::dictionary::LocalDictionary;
use crate::fallback::FallbackOrchestrator;
use crate::llm_client::{GenerativeClient, HttpGenerativeClient};
use crate::phrase_translator::{PhraseTranslation, PhraseTranslator};
use crate::resolver::{LookupResult, SlangResolver};
use crate::urban_client::UrbanClient;
use crate::word_of_day;

const EMPTY_INPUT_MESSAGE: &str = "Nothing to translate";
const EMPTY_INPUT_HINT: &str = "Type a phrase to translate";

pub struct Translator {
    resolver: Arc<SlangResolver>,
    phrases: PhraseTranslator,
    fallback: FallbackOrchestrator,
}

impl Translator {
    pub fn new(resolver: Arc<SlangResolver>, generative: Arc<dyn GenerativeClient>) -> Self {
        Self {
            phrases: PhraseTranslator::new(resolver.clone()),
            fallback: FallbackOrchestrator::new(generative),
            resolver,
        }
    }

    /// Wire up the production adapters from configuration
    pub fn from_config(config: &TeenspeakConfig) -> Result<Self> {
        let dictionary = match &config.dictionary.dataset_path {
            Some(path) => LocalDictionary::from_path(path)
                .with_context(|| format!("Failed to load dataset {}", path.display()))?,
            None => LocalDictionary::bundled().context("Failed to load bundled dataset")?,
        };
        let dictionary = Arc::new(dictionary);

        let resolver = if config.external.enabled {
            SlangResolver::new(dictionary, Arc::new(UrbanClient::new(&config.external)?))
        } else {
            info!("External dictionary disabled");
            SlangResolver::local_only(dictionary)
        };

        let generative = HttpGenerativeClient::new(config.generative.clone())?;
        Ok(Self::new(Arc::new(resolver), Arc::new(generative)))
    }

    /// Translate a whole phrase
    pub async fn translate(&self, phrase: &str) -> TranslationOutcome {
        if phrase.trim().is_empty() {
            return TranslationOutcome::failure(EMPTY_INPUT_MESSAGE, EMPTY_INPUT_HINT);
        }

        match self.phrases.translate(phrase).await {
            PhraseTranslation::Translated(outcome) => outcome,
            PhraseTranslation::NoMatch => self.fallback.handle_no_match(phrase.trim()).await,
        }
    }

    /// Look up a single term
    pub async fn resolve(&self, term: &str) -> Option<SlangEntry> {
        self.resolver.resolve(term).await
    }

    /// Look up several terms, in order
    pub async fn resolve_many(&self, terms: &[String]) -> Vec<LookupResult> {
        self.resolver.resolve_many(terms).await
    }

    /// Search the local dictionary by term or translation
    pub fn search(&self, query: &str) -> Vec<SlangEntry> {
        self.resolver.dictionary().search(query)
    }

    /// Featured entry for `date`
    pub fn word_of_the_day(&self, date: NaiveDate) -> Option<SlangEntry> {
        word_of_day::pick(self.resolver.dictionary(), date)
    }
}
