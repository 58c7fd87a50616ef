use serde::{Deserialize, Serialize};

// ─── Conversation types ───────────────────────────────────────────────────────

/// Who authored a transcript turn.
///
/// Serialized lowercase to match the relay wire format and the Gemini
/// `contents[].role` values, so no mapping layer is needed in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A single turn in the conversation history.  Immutable once created;
/// ordering within a transcript is chronological and meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: Role::Model, text: text.into() }
    }
}

// ─── Completion request ───────────────────────────────────────────────────────

/// Provider-agnostic completion request.
///
/// One request maps to exactly one provider call; there is no streaming and
/// no tool use in this system, so the response is plain generated text.
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    /// Ordered conversation history, oldest turn first.
    pub messages: Vec<ChatTurn>,
    /// Instruction applied out-of-band from the conversation (e.g. pinning
    /// the reply language).  Omitted from the wire request when `None`.
    pub system_instruction: Option<String>,
    /// Sampling temperature override; the driver default applies when `None`.
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    /// Build a request from a transcript, leaving instruction and temperature
    /// to the caller.
    pub fn from_messages(messages: Vec<ChatTurn>) -> Self {
        Self { messages, ..Default::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
    }

    #[test]
    fn turn_round_trips() {
        let turn = ChatTurn::user("halo");
        let json = serde_json::to_string(&turn).unwrap();
        assert_eq!(json, r#"{"role":"user","text":"halo"}"#);
        let back: ChatTurn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, turn);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = serde_json::from_str::<ChatTurn>(r#"{"role":"system","text":"x"}"#);
        assert!(err.is_err());
    }
}
