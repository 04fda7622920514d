//! Message sequence construction for persona completions.
//!
//! Layout sent to the provider:
//! ```text
//! [system: persona prompt]
//! [up to HISTORY_WINDOW most recent recognized turns, oldest first]
//! [user: current message]
//! ```

use stoa_types::llm::Message;
use stoa_types::persona::PersonaConfig;

/// Maximum number of trailing history entries considered.
pub const HISTORY_WINDOW: usize = 10;

/// Speaker tag marking the human's lines in history.
pub const HUMAN_TAG: &str = "Human: ";

/// The trailing `HISTORY_WINDOW` entries of `history`, in original order.
///
/// Windowing happens before turn mapping, so unrecognized entries inside the
/// window still use up a slot.
pub fn window_history(history: &[String]) -> &[String] {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    &history[start..]
}

/// Map one tagged history line to a chat message.
///
/// `"Human: ..."` becomes a user message and `"<key>: ..."` an assistant
/// message, with the tag stripped. Anything else yields `None`.
pub fn map_turn(turn: &str, persona: &PersonaConfig) -> Option<Message> {
    if let Some(content) = turn.strip_prefix(HUMAN_TAG) {
        return Some(Message::user(content));
    }
    turn.strip_prefix(persona.speaker_tag().as_str())
        .map(Message::assistant)
}

/// Build the full message sequence for one request.
pub fn build_messages(persona: &PersonaConfig, history: &[String], message: &str) -> Vec<Message> {
    let window = window_history(history);
    let mut messages = Vec::with_capacity(window.len() + 2);

    messages.push(Message::system(persona.system_prompt.clone()));
    messages.extend(window.iter().filter_map(|turn| map_turn(turn, persona)));
    messages.push(Message::user(message));

    messages
}
