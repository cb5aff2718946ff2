//! Generative fallback client.
//!
//! Sends a whole phrase to an OpenAI-compatible chat-completions endpoint and
//! parses the labeled answer. Used only when no term in the phrase resolves.
//! The credential is read on every call and checked before any network I/O.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use teenspeak_common::config::GenerativeConfig;
use teenspeak_common::FallbackError;
use tracing::debug;

pub use crate::llm_response::{parse_generative_response, GenerativeTranslation};

/// Instruction sent with every fallback request
pub const SYSTEM_PROMPT: &str = "You are a helpful translator that converts teen slang into clear, parent-friendly English. Format your response exactly like this:\n\nTeen phrase: [original phrase]\nParent translation: [clear parent-friendly translation]\nContext: [brief explanation of the situation/tone]\nExample in use:\nTeen: \"[example with teen phrase]\"\nParent: \"[example with parent translation]\"\n\nKeep translations natural, positive, and easy for parents to understand.";

/// Generative translation backend
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Translate a whole phrase
    async fn translate(&self, phrase: &str) -> Result<GenerativeTranslation, FallbackError>;
}

/// Where the API key comes from
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Fixed value (or explicitly none)
    Fixed(Option<String>),
    /// Environment variable, read at call time
    Env(String),
}

impl CredentialSource {
    pub fn from_config(config: &GenerativeConfig) -> Self {
        match &config.api_key {
            Some(key) => CredentialSource::Fixed(Some(key.clone())),
            None => CredentialSource::Env(config.api_key_env.clone()),
        }
    }

    /// Current credential; blank values count as missing
    pub fn read(&self) -> Option<String> {
        let value = match self {
            CredentialSource::Fixed(value) => value.clone(),
            CredentialSource::Env(var) => std::env::var(var).ok(),
        };
        value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
    }
}

/// Real generative client using HTTP
pub struct HttpGenerativeClient {
    config: GenerativeConfig,
    credential: CredentialSource,
    http: reqwest::Client,
    requests_sent: AtomicUsize,
}

impl HttpGenerativeClient {
    pub fn new(config: GenerativeConfig) -> Result<Self> {
        let credential = CredentialSource::from_config(&config);
        Self::with_credential(config, credential)
    }

    pub fn with_credential(config: GenerativeConfig, credential: CredentialSource) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            credential,
            http,
            requests_sent: AtomicUsize::new(0),
        })
    }

    /// Number of HTTP requests issued so far
    pub fn requests_sent(&self) -> usize {
        self.requests_sent.load(Ordering::Relaxed)
    }

    fn request_body(&self, phrase: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": format!("Translate this teen language: \"{}\"", phrase)},
            ],
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        })
    }
}

#[async_trait]
impl GenerativeClient for HttpGenerativeClient {
    async fn translate(&self, phrase: &str) -> Result<GenerativeTranslation, FallbackError> {
        let api_key = self.credential.read().ok_or(FallbackError::MissingCredential)?;

        debug!(
            "Generative request: model={}, phrase {} bytes",
            self.config.model,
            phrase.len()
        );

        self.requests_sent.fetch_add(1, Ordering::Relaxed);
        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&self.request_body(phrase))
            .send()
            .await
            .map_err(|e| FallbackError::Unavailable(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FallbackError::from_status(status.as_u16(), &body));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FallbackError::Unavailable(format!("Invalid response: {}", e)))?;

        let text = response_json
            .get("choices")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("message"))
            .and_then(|v| v.get("content"))
            .and_then(|v| v.as_str())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| FallbackError::Unavailable("Empty response".to_string()))?;

        Ok(parse_generative_response(text))
    }
}

/// Fake generative client for testing
pub struct FakeGenerativeClient {
    responses: Mutex<Vec<Result<GenerativeTranslation, FallbackError>>>,
    phrases: Mutex<Vec<String>>,
}

impl FakeGenerativeClient {
    /// Create a fake client with pre-defined responses
    pub fn new(responses: Vec<Result<GenerativeTranslation, FallbackError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            phrases: Mutex::new(Vec::new()),
        }
    }

    /// Create a fake client that always parses `answer` as the model output
    pub fn always_answer(answer: &str) -> Self {
        Self::new(vec![Ok(parse_generative_response(answer))])
    }

    /// Create a fake client that always returns an error
    pub fn always_error(error: FallbackError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Get the number of calls made
    pub fn call_count(&self) -> usize {
        self.phrases.lock().unwrap().len()
    }

    /// Phrases sent, in call order
    pub fn phrases(&self) -> Vec<String> {
        self.phrases.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeClient for FakeGenerativeClient {
    async fn translate(&self, phrase: &str) -> Result<GenerativeTranslation, FallbackError> {
        self.phrases.lock().unwrap().push(phrase.to_string());

        let mut responses = self.responses.lock().unwrap();
        match responses.len() {
            0 => Err(FallbackError::Unavailable("No response configured".to_string())),
            // Keep returning the last response
            1 => responses[0].clone(),
            _ => responses.remove(0),
        }
    }
}
