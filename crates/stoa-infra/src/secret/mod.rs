//! API key resolution.
//!
//! Priority:
//! 1. `OPENAI_API_KEY` environment variable
//! 2. `openai_api_key` in `stoa.toml`

pub mod env;

use secrecy::{ExposeSecret, SecretString};

use stoa_types::config::ServiceConfig;

use self::env::EnvSecretProvider;

/// Environment variable holding the completion API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Resolve the completion API key from the environment, then the config file.
pub fn resolve_openai_key(config: &ServiceConfig) -> Option<SecretString> {
    let env = EnvSecretProvider::new();
    resolve_with(config, |key| env.get(key))
}

fn resolve_with(
    config: &ServiceConfig,
    lookup: impl Fn(&str) -> Option<SecretString>,
) -> Option<SecretString> {
    lookup(OPENAI_API_KEY_VAR).or_else(|| {
        config
            .openai_api_key
            .clone()
            .filter(|key| !key.expose_secret().trim().is_empty())
    })
}
