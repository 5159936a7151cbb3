//! Hosted language model interface.
//!
//! The session treats the model as a single opaque round-trip: prompt in,
//! text out. The concrete transport lives in [`chat`]; tests substitute their
//! own [`TextGenerator`].

mod chat;

pub use chat::ChatCompletionsClient;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("API token not configured (set the {0} environment variable)")]
    MissingToken(String),

    #[error("request to model endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model endpoint returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("model response contained no generated text")]
    EmptyResponse,
}

/// One opaque generation round-trip.
pub trait TextGenerator {
    fn generate(&self, prompt: &str, system_instruction: &str) -> Result<String, ModelError>;
}
