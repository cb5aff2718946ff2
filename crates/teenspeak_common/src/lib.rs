//! Teenspeak Common - shared data model, errors and configuration.
//!
//! Used by the translation pipeline (`teenspeak`) and by its callers.

pub mod config;
pub mod error;
pub mod types;

pub use config::TeenspeakConfig;
pub use error::{DatasetError, FallbackError, SourceError};
pub use types::*;
