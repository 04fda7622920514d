//! Persona table.
//!
//! Five built-in personas with system prompts embedded at compile time from
//! `prompts/*.md`. The table is built once at startup (optionally extended
//! from a persona file), wrapped in `Arc`, and only read afterwards.

use stoa_types::error::RegistryError;
use stoa_types::persona::PersonaConfig;

/// Read-only lookup table of personas, in registration order.
#[derive(Debug, Clone, Default)]
pub struct PersonaRegistry {
    personas: Vec<PersonaConfig>,
}

impl PersonaRegistry {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The five built-in personas.
    pub fn builtin() -> Self {
        let personas = vec![
            persona(
                "Socrates",
                include_str!("../../prompts/socrates.md"),
                [
                    "What do you think you truly know about this matter?",
                    "Is it not curious that you ask this? What led you to this question?",
                    "Before we proceed, tell me - what does this concept mean to you?",
                ],
            ),
            persona(
                "Marcus Aurelius",
                include_str!("../../prompts/marcus_aurelius.md"),
                [
                    "Remember, you have power over your mind - not outside events. How might this apply here?",
                    "What is within your control in this situation? Focus your energy there.",
                    "Consider this: is this concern worthy of disturbing your inner peace?",
                ],
            ),
            persona(
                "Lao Tzu",
                include_str!("../../prompts/lao_tzu.md"),
                [
                    "The wise find strength in yielding. What would happen if you approached this with wu wei?",
                    "Like water, the softest thing overcomes the hardest. How might gentleness serve you here?",
                    "When you let go of what you have, you receive what you need. What are you holding too tightly?",
                ],
            ),
            persona(
                "Buddha",
                include_str!("../../prompts/buddha.md"),
                [
                    "All suffering comes from attachment. What attachment might be causing your distress?",
                    "This too shall pass. How does remembering impermanence change your perspective?",
                    "Compassion begins with understanding. Can you see this situation with loving-kindness?",
                ],
            ),
            persona(
                "Nietzsche",
                include_str!("../../prompts/nietzsche.md"),
                [
                    "What does not destroy you, makes you stronger. How might this challenge forge your character?",
                    "You must have chaos within you to give birth to a dancing star. Embrace the struggle.",
                    "Become who you are. What is your authentic self calling you to do?",
                ],
            ),
        ];

        Self { personas }
    }

    /// Add a persona after the existing ones.
    ///
    /// Keys are matched exactly, so "socrates" and "Socrates" are distinct.
    pub fn register(&mut self, persona: PersonaConfig) -> Result<(), RegistryError> {
        if persona.key.is_empty() {
            return Err(RegistryError::EmptyKey);
        }
        if self.get(&persona.key).is_some() {
            return Err(RegistryError::DuplicateKey(persona.key));
        }
        self.personas.push(persona);
        Ok(())
    }

    /// Exact-key lookup.
    pub fn get(&self, key: &str) -> Option<&PersonaConfig> {
        self.personas.iter().find(|p| p.key == key)
    }

    /// Persona keys in registration order.
    pub fn keys(&self) -> Vec<&str> {
        self.personas.iter().map(|p| p.key.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonaConfig> {
        self.personas.iter()
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

fn persona(key: &str, system_prompt: &str, starters: [&str; 3]) -> PersonaConfig {
    PersonaConfig {
        key: key.to_string(),
        system_prompt: system_prompt.trim().to_string(),
        conversation_starters: starters.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_five_personas_in_order() {
        let registry = PersonaRegistry::builtin();
        assert_eq!(
            registry.keys(),
            vec!["Socrates", "Marcus Aurelius", "Lao Tzu", "Buddha", "Nietzsche"]
        );
    }

    #[test]
    fn every_builtin_has_prompt_and_three_starters() {
        let registry = PersonaRegistry::builtin();
        for persona in registry.iter() {
            assert!(
                persona.system_prompt.starts_with("You are"),
                "{} prompt should open with an identity line",
                persona.key
            );
            assert!(persona.system_prompt.contains("Remember:"));
            assert_eq!(persona.conversation_starters.len(), 3);
        }
    }

    #[test]
    fn lookup_is_exact() {
        let registry = PersonaRegistry::builtin();
        assert!(registry.get("Lao Tzu").is_some());
        assert!(registry.get("lao tzu").is_none());
        assert!(registry.get("Plato").is_none());
    }

    #[test]
    fn register_appends_new_persona() {
        let mut registry = PersonaRegistry::builtin();
        registry
            .register(PersonaConfig {
                key: "Epictetus".to_string(),
                system_prompt: "You are Epictetus.".to_string(),
                conversation_starters: Vec::new(),
            })
            .unwrap();
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.keys().last(), Some(&"Epictetus"));
    }

    #[test]
    fn register_rejects_duplicate_and_empty_keys() {
        let mut registry = PersonaRegistry::builtin();
        let dup = registry.register(PersonaConfig {
            key: "Buddha".to_string(),
            system_prompt: "x".to_string(),
            conversation_starters: Vec::new(),
        });
        assert!(matches!(dup, Err(RegistryError::DuplicateKey(k)) if k == "Buddha"));

        let empty = registry.register(PersonaConfig {
            key: String::new(),
            system_prompt: "x".to_string(),
            conversation_starters: Vec::new(),
        });
        assert!(matches!(empty, Err(RegistryError::EmptyKey)));
        assert_eq!(registry.len(), 5);
    }
}
