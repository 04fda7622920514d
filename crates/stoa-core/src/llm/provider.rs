//! LlmProvider trait definition.
//!
//! This is the core abstraction that every chat-completion backend implements.

use stoa_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat-completion backends (OpenAI and compatible APIs).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in stoa-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
