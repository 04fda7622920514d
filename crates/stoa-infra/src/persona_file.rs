//! Persona table construction from built-ins plus an optional persona file.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use stoa_core::persona::PersonaRegistry;
use stoa_types::error::RegistryError;
use stoa_types::persona::PersonaFile;

/// Errors while loading a persona file.
///
/// Unlike `stoa.toml`, a broken persona file is fatal: silently dropping
/// configured personas would change which keys the service accepts.
#[derive(Debug, Error)]
pub enum PersonaFileError {
    #[error("failed to read persona file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse persona file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid persona in {path}: {source}")]
    Registry {
        path: PathBuf,
        source: RegistryError,
    },
}

/// Build the persona table: built-ins first, then entries from `path`.
pub async fn load_persona_registry(path: Option<&Path>) -> Result<PersonaRegistry, PersonaFileError> {
    let mut registry = PersonaRegistry::builtin();

    let Some(path) = path else {
        return Ok(registry);
    };

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PersonaFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let file: PersonaFile = toml::from_str(&content).map_err(|source| PersonaFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let added = file.personas.len();
    for entry in file.personas {
        registry
            .register(entry.into())
            .map_err(|source| PersonaFileError::Registry {
                path: path.to_path_buf(),
                source,
            })?;
    }

    info!(path = %path.display(), added, total = registry.len(), "Loaded persona file");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn no_path_gives_builtins() {
        let registry = load_persona_registry(None).await.unwrap();
        assert_eq!(registry.len(), 5);
    }

    #[tokio::test]
    async fn file_entries_are_appended() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("personas.toml");
        tokio::fs::write(
            &path,
            r#"
[[personas]]
key = "Epictetus"
system_prompt = "You are Epictetus, the Stoic teacher."
conversation_starters = ["Some things are up to us. Which are they here?"]
"#,
        )
        .await
        .unwrap();

        let registry = load_persona_registry(Some(&path)).await.unwrap();
        assert_eq!(registry.len(), 6);
        let persona = registry.get("Epictetus").unwrap();
        assert_eq!(persona.conversation_starters.len(), 1);
    }

    #[tokio::test]
    async fn duplicate_key_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("personas.toml");
        tokio::fs::write(
            &path,
            "[[personas]]\nkey = \"Socrates\"\nsystem_prompt = \"again\"\n",
        )
        .await
        .unwrap();

        let err = load_persona_registry(Some(&path)).await.unwrap_err();
        assert!(matches!(
            err,
            PersonaFileError::Registry {
                source: RegistryError::DuplicateKey(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_persona_registry(Some(&tmp.path().join("nope.toml")))
            .await
            .unwrap_err();
        assert!(matches!(err, PersonaFileError::Read { .. }));
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("personas.toml");
        tokio::fs::write(&path, "[[personas]]\nkey = 3\n").await.unwrap();

        let err = load_persona_registry(Some(&path)).await.unwrap_err();
        assert!(matches!(err, PersonaFileError::Parse { .. }));
    }
}
