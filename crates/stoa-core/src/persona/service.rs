//! Persona response service.
//!
//! One linear pipeline shared by every entry interface:
//! validate -> resolve persona -> build messages -> complete -> extract.
//! The service holds no mutable state; it can be shared across handlers
//! behind an `Arc`.

use std::sync::Arc;

use tracing::{Instrument, debug, info, info_span};

use stoa_types::error::PersonaError;
use stoa_types::llm::{CompletionRequest, CompletionResponse};
use stoa_types::persona::PersonaConfig;
use stoa_types::request::{PersonaRequest, PersonaRequestBody};

use crate::llm::provider::LlmProvider;

use super::prompt::build_messages;
use super::registry::PersonaRegistry;
use super::validate::{normalize_history, validate_request};

/// Default chat-completion model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Sampling parameters for persona completions.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 500,
            temperature: 0.8,
            presence_penalty: 0.1,
            frequency_penalty: 0.1,
        }
    }
}

impl GenerationParams {
    /// Default sampling with a different model.
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }
}

/// Generates in-character replies for validated persona requests.
///
/// Generic over `LlmProvider`; the binary pins it to `BoxLlmProvider`.
pub struct PersonaService<P: LlmProvider> {
    provider: P,
    registry: Arc<PersonaRegistry>,
    params: GenerationParams,
}

impl<P: LlmProvider> PersonaService<P> {
    pub fn new(provider: P, registry: Arc<PersonaRegistry>, params: GenerationParams) -> Self {
        Self {
            provider,
            registry,
            params,
        }
    }

    /// The persona table this service resolves against.
    pub fn registry(&self) -> &PersonaRegistry {
        &self.registry
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Look up a persona by exact key.
    pub fn resolve(&self, key: &str) -> Result<&PersonaConfig, PersonaError> {
        self.registry
            .get(key)
            .ok_or_else(|| PersonaError::UnknownPersona(key.to_string()))
    }

    /// Build the provider request for a resolved persona.
    pub fn build_request(&self, persona: &PersonaConfig, request: &PersonaRequest) -> CompletionRequest {
        CompletionRequest {
            model: self.params.model.clone(),
            messages: build_messages(persona, &request.history, &request.message),
            max_tokens: self.params.max_tokens,
            temperature: Some(self.params.temperature),
            presence_penalty: Some(self.params.presence_penalty),
            frequency_penalty: Some(self.params.frequency_penalty),
        }
    }

    /// Validate a raw payload, then generate.
    ///
    /// Order of checks: required fields (`InvalidArgument`), persona key
    /// (`UnknownPersona`), history shape (`MalformedHistory`). All of them
    /// fail before the provider is called.
    pub async fn respond(&self, body: PersonaRequestBody) -> Result<String, PersonaError> {
        let body = validate_request(body)?;
        let persona = self.resolve(&body.persona_key)?;
        let request = PersonaRequest {
            history: normalize_history(body.history)?,
            message: body.message,
            persona_key: body.persona_key,
        };
        self.complete_for(persona, &request).await
    }

    /// Generate a reply for an already validated request.
    ///
    /// An unknown persona fails before the provider is called. The reply is
    /// the first choice's content with surrounding whitespace removed; absent
    /// or blank content is `EmptyResponse`.
    pub async fn generate(&self, request: &PersonaRequest) -> Result<String, PersonaError> {
        let persona = self.resolve(&request.persona_key)?;
        self.complete_for(persona, request).await
    }

    async fn complete_for(
        &self,
        persona: &PersonaConfig,
        request: &PersonaRequest,
    ) -> Result<String, PersonaError> {
        let completion = self.build_request(persona, request);

        debug!(
            persona = %persona.key,
            history_len = request.history.len(),
            messages = completion.messages.len(),
            "Built persona prompt"
        );

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %completion.model,
            gen_ai.request.max_tokens = completion.max_tokens,
            gen_ai.request.temperature = ?completion.temperature,
            persona = %persona.key,
        );

        let response = self.provider.complete(&completion).instrument(span).await?;

        info!(
            persona = %persona.key,
            response_id = %response.id,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "Persona completion finished"
        );

        extract_reply(response)
    }
}

/// Pull the trimmed reply text out of a completion response.
pub fn extract_reply(response: CompletionResponse) -> Result<String, PersonaError> {
    let text = response
        .content
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or(PersonaError::EmptyResponse)?;
    Ok(text.to_string())
}
