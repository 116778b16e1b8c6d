//! Seam between the chat handler and whatever produces the answer text.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("generation API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to decode generation response: {0}")]
    Decode(String),

    #[error("generation blocked: {0}")]
    Blocked(String),

    #[error("generation returned no text")]
    Empty,
}

/// A text-completion backend. One call is one fresh, historyless turn.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
