//! Application state wiring the persona service together.
//!
//! AppState holds the concrete service used by both the CLI and the HTTP
//! routes. `PersonaService` is generic over its provider; AppState pins it
//! to the boxed provider built from configuration.

use std::sync::Arc;

use stoa_core::llm::box_provider::BoxLlmProvider;
use stoa_core::llm::provider::LlmProvider;
use stoa_core::persona::{GenerationParams, PersonaRegistry, PersonaService};
use stoa_infra::llm::create_provider;
use stoa_infra::persona_file::load_persona_registry;
use stoa_infra::secret::resolve_openai_key;
use stoa_types::config::ServiceConfig;

pub type ConcretePersonaService = PersonaService<BoxLlmProvider>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub persona_service: Arc<ConcretePersonaService>,
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Build the persona table, resolve the API key and wire the provider.
    ///
    /// A missing API key is not an error here; it only surfaces when a
    /// completion is attempted.
    pub async fn init(config: ServiceConfig) -> anyhow::Result<Self> {
        let registry = load_persona_registry(config.personas_file.as_deref()).await?;
        let provider = create_provider(&config, resolve_openai_key(&config));
        let params = GenerationParams::with_model(config.model.clone());

        tracing::info!(
            personas = registry.len(),
            model = %params.model,
            provider = provider.name(),
            "Persona service ready"
        );

        Ok(Self::from_parts(
            PersonaService::new(provider, Arc::new(registry), params),
            config,
        ))
    }

    pub fn from_parts(service: ConcretePersonaService, config: ServiceConfig) -> Self {
        Self {
            persona_service: Arc::new(service),
            config: Arc::new(config),
        }
    }

    pub fn registry(&self) -> &PersonaRegistry {
        self.persona_service.registry()
    }
}
