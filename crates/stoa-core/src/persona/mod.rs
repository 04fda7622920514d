//! Persona pipeline: table, validation, prompt construction, generation.

pub mod prompt;
pub mod registry;
pub mod service;
pub mod validate;

pub use registry::PersonaRegistry;
pub use service::{GenerationParams, PersonaService};
