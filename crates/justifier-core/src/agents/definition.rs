//! Agent definitions

use crate::llm::Voice;
use serde::{Deserialize, Serialize};

/// Immutable description of one participant in the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Speaker label used in the transcript and reasoning trace
    pub label: String,

    /// System-level instruction sent with every request
    pub instructions: String,

    /// Conversational position the agent's message is issued from
    pub voice: Voice,
}

impl AgentDefinition {
    pub fn new(label: impl Into<String>, instructions: impl Into<String>, voice: Voice) -> Self {
        Self {
            label: label.into(),
            instructions: instructions.into(),
            voice,
        }
    }

    /// Create an agent that speaks as the end user
    pub fn initiator(label: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self::new(label, instructions, Voice::Initiator)
    }

    /// Create an agent that speaks as the assistant
    pub fn participant(label: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self::new(label, instructions, Voice::Participant)
    }

    /// Check that the definition can be sent
    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("agent label must not be empty".to_string());
        }
        if self.instructions.trim().is_empty() {
            return Err(format!("agent '{}' has no instructions", self.label));
        }
        Ok(())
    }
}
