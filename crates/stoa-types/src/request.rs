//! Persona request and response shapes.
//!
//! `PersonaRequestBody` is the raw, loosely typed payload as it arrives on
//! either entry interface. Fields are kept as JSON values so that a wrong
//! type (e.g. a numeric `message`) reaches validation instead of failing
//! deserialization with a framework-specific error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw request payload: `{ message, philosopherId, conversationHistory? }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaRequestBody {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub philosopher_id: Option<Value>,
    #[serde(default)]
    pub conversation_history: Option<Value>,
}

/// A validated persona request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaRequest {
    /// Current user message, never empty.
    pub message: String,
    /// Persona key, never empty. Not yet resolved against the table.
    pub persona_key: String,
    /// Caller-supplied prior turns, oldest first.
    pub history: Vec<String>,
}

/// Success/failure envelope shared by both entry interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PersonaReply {
    pub fn ok(response: String) -> Self {
        Self {
            success: true,
            response: Some(response),
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error),
        }
    }
}
