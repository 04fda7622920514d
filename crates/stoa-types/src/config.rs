//! Service configuration types for Stoa.
//!
//! `ServiceConfig` represents the top-level `stoa.toml`: listener address,
//! completion model and endpoint, quote endpoint, and an optional persona
//! file that extends the built-in table.

use std::path::PathBuf;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::quote::DEFAULT_QUOTE_URL;

/// Top-level configuration. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Chat-completion model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible completion API.
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// API key for the completion API. `OPENAI_API_KEY` takes precedence.
    #[serde(default, skip_serializing)]
    pub openai_api_key: Option<SecretString>,

    /// Endpoint used by the quote fetcher.
    #[serde(default = "default_quote_url")]
    pub quote_url: String,

    /// Optional TOML file with additional `[[personas]]` entries.
    #[serde(default)]
    pub personas_file: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_quote_url() -> String {
    DEFAULT_QUOTE_URL.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            model: default_model(),
            openai_base_url: default_openai_base_url(),
            openai_api_key: None,
            quote_url: default_quote_url(),
            personas_file: None,
        }
    }
}
