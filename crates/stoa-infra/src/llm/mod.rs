//! LLM provider implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`]
//! trait defined in `stoa-core`, and a provider factory
//! ([`create_provider`]) that builds it from the service configuration.

pub mod openai_compat;

use std::future::Future;

use secrecy::SecretString;
use tracing::warn;

use stoa_core::llm::box_provider::BoxLlmProvider;
use stoa_core::llm::provider::LlmProvider;
use stoa_types::config::ServiceConfig;
use stoa_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::OpenAiCompatConfig;

/// Create a [`BoxLlmProvider`] from the service configuration.
///
/// Without an API key the server still starts: the returned provider fails
/// every completion with [`LlmError::MissingApiKey`], so routes that never
/// reach the completion API keep working.
pub fn create_provider(config: &ServiceConfig, api_key: Option<SecretString>) -> BoxLlmProvider {
    match api_key {
        Some(api_key) => BoxLlmProvider::new(OpenAiCompatibleProvider::new(OpenAiCompatConfig {
            provider_name: "openai".to_string(),
            base_url: config.openai_base_url.clone(),
            api_key,
            model: config.model.clone(),
        })),
        None => {
            warn!("No OpenAI API key configured; persona completions will fail");
            BoxLlmProvider::new(UnconfiguredProvider::new("openai"))
        }
    }
}

/// Stand-in provider used when no API key is available.
pub struct UnconfiguredProvider {
    name: String,
}

impl UnconfiguredProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl LlmProvider for UnconfiguredProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn complete(
        &self,
        _request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send {
        let name = self.name.clone();
        async move { Err(LlmError::MissingApiKey(name)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stoa_types::llm::Message;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: String::new(),
            messages: vec![Message::user("Hello")],
            max_tokens: 10,
            temperature: None,
            presence_penalty: None,
            frequency_penalty: None,
        }
    }

    #[tokio::test]
    async fn missing_key_yields_failing_provider() {
        let provider = create_provider(&ServiceConfig::default(), None);
        assert_eq!(provider.name(), "openai");

        let err = provider.complete(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey(ref name) if name == "openai"));
    }

    #[test]
    fn configured_key_yields_openai_provider() {
        let provider = create_provider(
            &ServiceConfig::default(),
            Some(SecretString::from("sk-test".to_string())),
        );
        assert_eq!(provider.name(), "openai");
    }
}
