//! Request validation.
//!
//! Only `message` and `philosopherId` are checked here, before persona
//! resolution and before any provider call. The history shape is checked
//! later by [`normalize_history`], once the persona is known.

use serde_json::Value;

use stoa_types::error::PersonaError;
use stoa_types::request::PersonaRequestBody;

pub const MESSAGE_REQUIRED: &str = "Message is required and must be a string";
pub const PERSONA_REQUIRED: &str = "Philosopher ID is required and must be a string";

/// A payload whose required fields passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBody {
    pub message: String,
    pub persona_key: String,
    /// Raw `conversationHistory`, shape not yet checked.
    pub history: Option<Value>,
}

/// Check the required fields.
///
/// `message` and `philosopherId` must be non-empty strings; `message` is
/// checked first.
pub fn validate_request(body: PersonaRequestBody) -> Result<ValidatedBody, PersonaError> {
    let message = non_empty_string(body.message)
        .ok_or_else(|| PersonaError::InvalidArgument(MESSAGE_REQUIRED.to_string()))?;
    let persona_key = non_empty_string(body.philosopher_id)
        .ok_or_else(|| PersonaError::InvalidArgument(PERSONA_REQUIRED.to_string()))?;

    Ok(ValidatedBody {
        message,
        persona_key,
        history: body.conversation_history,
    })
}

/// Turn a raw `conversationHistory` into turns.
///
/// Missing or null is an empty history. Non-string array entries are
/// discarded, the same way unrecognized turns are discarded later. Any other
/// value is `MalformedHistory`, which surfaces as an internal failure.
pub fn normalize_history(raw: Option<Value>) -> Result<Vec<String>, PersonaError> {
    match raw {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => Ok(entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        Some(_) => Err(PersonaError::MalformedHistory),
    }
}

fn non_empty_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> PersonaRequestBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accepts_complete_request() {
        let req = validate_request(body(json!({
            "message": "What is courage?",
            "philosopherId": "Socrates",
            "conversationHistory": ["Human: hi", "Socrates: hello"]
        })))
        .unwrap();

        assert_eq!(req.message, "What is courage?");
        assert_eq!(req.persona_key, "Socrates");
        assert_eq!(req.history, Some(json!(["Human: hi", "Socrates: hello"])));
    }

    #[test]
    fn missing_message_is_invalid_argument() {
        let err = validate_request(body(json!({ "philosopherId": "Socrates" }))).unwrap_err();
        assert!(matches!(err, PersonaError::InvalidArgument(ref m) if m == MESSAGE_REQUIRED));
    }

    #[test]
    fn empty_or_non_string_message_is_invalid_argument() {
        for message in [json!(""), json!(7), json!(["a"]), json!(null)] {
            let err = validate_request(body(json!({
                "message": message,
                "philosopherId": "Socrates"
            })))
            .unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn missing_persona_is_invalid_argument() {
        let err = validate_request(body(json!({ "message": "hi" }))).unwrap_err();
        assert!(matches!(err, PersonaError::InvalidArgument(ref m) if m == PERSONA_REQUIRED));

        let err = validate_request(body(json!({ "message": "hi", "philosopherId": "" })))
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn message_is_checked_before_persona() {
        let err = validate_request(PersonaRequestBody::default()).unwrap_err();
        assert!(matches!(err, PersonaError::InvalidArgument(ref m) if m == MESSAGE_REQUIRED));
    }

    #[test]
    fn history_shape_is_not_a_validation_concern() {
        let req = validate_request(body(json!({
            "message": "hi",
            "philosopherId": "Buddha",
            "conversationHistory": 5
        })))
        .unwrap();
        assert_eq!(req.history, Some(json!(5)));
    }

    #[test]
    fn missing_or_null_history_is_empty() {
        assert!(normalize_history(None).unwrap().is_empty());
        assert!(normalize_history(Some(Value::Null)).unwrap().is_empty());
    }

    #[test]
    fn non_array_history_is_malformed() {
        for raw in [json!("Human: hi"), json!(5), json!({ "turns": [] })] {
            let err = normalize_history(Some(raw)).unwrap_err();
            assert!(matches!(err, PersonaError::MalformedHistory));
        }
    }

    #[test]
    fn non_string_history_entries_are_dropped() {
        let turns = normalize_history(Some(json!([
            "Human: one",
            2,
            {"text": "three"},
            "Buddha: four"
        ])))
        .unwrap();
        assert_eq!(turns, vec!["Human: one", "Buddha: four"]);
    }
}
