//! Chat message types for completion requests

use serde::{Deserialize, Serialize};

/// Conversational position a message is issued from.
///
/// This only shapes how the completion service reads the turn; it is not an
/// access-control mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    /// Issued as if from the end user
    Initiator,
    /// Issued as if from the assistant
    Participant,
}

impl Voice {
    /// Wire role used by chat completion APIs
    pub fn role_str(&self) -> &'static str {
        match self {
            Voice::Initiator => "user",
            Voice::Participant => "assistant",
        }
    }
}

/// A single non-system message in a completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub voice: Voice,
    pub content: String,
}

impl ChatMessage {
    pub fn new(voice: Voice, content: impl Into<String>) -> Self {
        Self {
            voice,
            content: content.into(),
        }
    }

    pub fn initiator(content: impl Into<String>) -> Self {
        Self::new(Voice::Initiator, content)
    }

    pub fn participant(content: impl Into<String>) -> Self {
        Self::new(Voice::Participant, content)
    }

    /// Get the wire role string
    pub fn role_str(&self) -> &'static str {
        self.voice.role_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initiator_message() {
        let msg = ChatMessage::initiator("Hello");
        assert_eq!(msg.role_str(), "user");
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_participant_message() {
        let msg = ChatMessage::participant("Hi there");
        assert_eq!(msg.role_str(), "assistant");
    }

    #[test]
    fn test_voice_serde() {
        let voice: Voice = serde_json::from_str("\"participant\"").unwrap();
        assert_eq!(voice, Voice::Participant);
        assert_eq!(serde_json::to_string(&Voice::Initiator).unwrap(), "\"initiator\"");
    }
}
