//! Teenspeak - translate teen slang into parent-friendly English.
//!
//! Lookup order per term: local dictionary, then the external slang API.
//! Phrases with no resolvable term go to a generative model as a whole.

pub mod dictionary;
pub mod fallback;
pub mod grammar;
pub mod llm_client;
pub mod llm_response;
pub mod phrase_translator;
pub mod pipeline;
pub mod resolver;
pub mod source;
pub mod tone;
pub mod urban_client;
pub mod word_of_day;

#[cfg(test)]
mod test_server;

pub use dictionary::LocalDictionary;
pub use llm_client::{FakeGenerativeClient, GenerativeClient, HttpGenerativeClient};
pub use pipeline::Translator;
pub use resolver::{LookupResult, SlangResolver};
pub use source::{DefinitionSource, FakeDefinitionSource};
pub use teenspeak_common::{EntrySource, SlangEntry, SourceLabel, TranslationOutcome};
