//! Persona configuration types.
//!
//! A persona is a named behavioural profile: one system-level instruction
//! block plus a few suggested conversation openers. Personas are defined once
//! at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A single persona entry in the persona table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaConfig {
    /// Exact lookup key, also used as the assistant speaker tag in history.
    pub key: String,
    /// Instruction block sent as the system message.
    pub system_prompt: String,
    /// Suggested opening lines, in display order.
    #[serde(default)]
    pub conversation_starters: Vec<String>,
}

impl PersonaConfig {
    /// Speaker tag that marks this persona's own lines in conversation history.
    pub fn speaker_tag(&self) -> String {
        format!("{}: ", self.key)
    }
}

/// Shape of an on-disk persona file (TOML) used to extend the built-in table.
///
/// ```toml
/// [[personas]]
/// key = "Epictetus"
/// system_prompt = "You are Epictetus..."
/// conversation_starters = ["What is up to you?"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonaFile {
    #[serde(default)]
    pub personas: Vec<PersonaFileEntry>,
}

/// One `[[personas]]` table in a persona file.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonaFileEntry {
    pub key: String,
    pub system_prompt: String,
    #[serde(default)]
    pub conversation_starters: Vec<String>,
}

impl From<PersonaFileEntry> for PersonaConfig {
    fn from(entry: PersonaFileEntry) -> Self {
        Self {
            key: entry.key,
            system_prompt: entry.system_prompt,
            conversation_starters: entry.conversation_starters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaker_tag_appends_colon_and_space() {
        let persona = PersonaConfig {
            key: "Lao Tzu".to_string(),
            system_prompt: String::new(),
            conversation_starters: Vec::new(),
        };
        assert_eq!(persona.speaker_tag(), "Lao Tzu: ");
    }

    #[test]
    fn persona_file_parses_from_toml() {
        let toml_str = r#"
[[personas]]
key = "Epictetus"
system_prompt = "You are Epictetus."
conversation_starters = ["What is within your power?"]

[[personas]]
key = "Seneca"
system_prompt = "You are Seneca."
"#;
        let file: PersonaFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.personas.len(), 2);
        assert_eq!(file.personas[0].conversation_starters.len(), 1);
        assert!(file.personas[1].conversation_starters.is_empty());

        let persona: PersonaConfig = file.personas[1].clone().into();
        assert_eq!(persona.key, "Seneca");
    }
}
