use thiserror::Error;

use crate::llm::LlmError;

/// Errors from the persona response pipeline.
#[derive(Debug, Error)]
pub enum PersonaError {
    /// A required field is missing or has the wrong type.
    #[error("{0}")]
    InvalidArgument(String),

    /// The persona key does not resolve to a known persona.
    #[error("Unknown philosopher: {0}")]
    UnknownPersona(String),

    /// `conversationHistory` is present but is not an array.
    #[error("Conversation history must be an array of strings")]
    MalformedHistory,

    /// The completion provider answered without usable content.
    #[error("No response from completion provider")]
    EmptyResponse,

    /// Network, auth, or API-side fault during generation.
    #[error(transparent)]
    Upstream(#[from] LlmError),
}

impl PersonaError {
    /// Whether this failure was caused by the caller's input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PersonaError::InvalidArgument(_))
    }
}

/// Errors while building the persona table.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate persona key '{0}'")]
    DuplicateKey(String),

    #[error("persona key must not be empty")]
    EmptyKey,
}

/// Errors from the quote endpoint.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed quote body: {0}")]
    Decode(String),
}
