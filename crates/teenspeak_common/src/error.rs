//! Error types for the translation pipeline.

use thiserror::Error;

/// External dictionary failures. The resolver treats every variant as "not found".
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("Definition source unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid response from definition source: {0}")]
    InvalidResponse(String),
}

/// Generative fallback failures. Terminal for the current translate call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackError {
    #[error("No API credential configured")]
    MissingCredential,

    #[error("Authentication with the AI provider failed")]
    AuthFailed,

    #[error("AI provider rate limit reached")]
    RateLimited,

    #[error("AI provider quota exhausted")]
    QuotaExceeded,

    #[error("AI translation unavailable: {0}")]
    Unavailable(String),
}

impl FallbackError {
    /// Short user-facing message shown in place of a translation
    pub fn user_message(&self) -> &'static str {
        match self {
            FallbackError::RateLimited => {
                "AI quota exceeded - please check your AI provider account billing"
            }
            FallbackError::AuthFailed => "AI authentication failed - please check your API key",
            FallbackError::QuotaExceeded => {
                "AI quota exceeded - please add credits to your AI provider account"
            }
            FallbackError::MissingCredential => "No AI provider API key found",
            FallbackError::Unavailable(_) => "AI translation unavailable",
        }
    }

    /// Explanatory hint shown in the tone/context field
    pub fn remediation(&self) -> &'static str {
        match self {
            FallbackError::RateLimited => "AI provider account needs credits to process requests",
            FallbackError::AuthFailed => "Invalid or expired AI provider API key",
            FallbackError::QuotaExceeded => "AI provider account has no remaining credits",
            FallbackError::MissingCredential => "Please check your configuration or environment",
            FallbackError::Unavailable(_) => "Please check your API key and try again",
        }
    }

    /// Classify a non-2xx response from the generative API
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => FallbackError::AuthFailed,
            429 if body.contains("insufficient_quota") => FallbackError::QuotaExceeded,
            429 => FallbackError::RateLimited,
            _ => FallbackError::Unavailable(format!("HTTP {}", status)),
        }
    }
}

/// Local dataset loading failures
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported dataset shape: {0}")]
    UnsupportedShape(String),
}
