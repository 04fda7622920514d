//! Environment variable secret provider.
//!
//! Read-only lookup of secrets from the process environment. Environment
//! variables override every other source.

use secrecy::SecretString;

/// Environment variable secret provider.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }

    /// Read `key` from the environment.
    ///
    /// Unset, empty, and non-Unicode values are all treated as absent.
    pub fn get(&self, key: &str) -> Option<SecretString> {
        match std::env::var(key) {
            Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val)),
            _ => None,
        }
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}
