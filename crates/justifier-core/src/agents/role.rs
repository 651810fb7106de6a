//! Role agent
//!
//! Binds an [`AgentDefinition`] to a completion client and exposes one
//! operation, [`RoleAgent::respond`].

use super::AgentDefinition;
use crate::llm::{ChatMessage, LlmError, SharedClient};
use std::sync::Arc;

/// Text the degrade policy records in place of a failed agent's answer
pub fn sentinel(err: &LlmError) -> String {
    format!("An error occurred: {}", err)
}

/// A named participant bound to a fixed instruction template
#[derive(Clone)]
pub struct RoleAgent {
    definition: Arc<AgentDefinition>,
    client: SharedClient,
}

impl RoleAgent {
    pub fn new(definition: Arc<AgentDefinition>, client: SharedClient) -> Self {
        Self { definition, client }
    }

    pub fn label(&self) -> &str {
        &self.definition.label
    }

    /// Ask the agent to respond to `query`, with `context` placed ahead of it.
    ///
    /// Blocks until the client answers. The answer is returned trimmed. A
    /// failure is logged and handed back to the caller, which decides whether
    /// the run continues.
    pub fn respond(&self, query: &str, context: &str) -> Result<String, LlmError> {
        let message = ChatMessage::new(self.definition.voice, compose(query, context));

        tracing::debug!(
            agent = %self.definition.label,
            model = self.client.model(),
            voice = self.definition.voice.role_str(),
            chars = message.content.len(),
            "agent request"
        );

        match self.client.complete(&self.definition.instructions, &[message]) {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => {
                tracing::warn!(agent = %self.definition.label, error = %e, "error calling completion API");
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for RoleAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleAgent")
            .field("label", &self.definition.label)
            .field("client", &self.client.id())
            .finish()
    }
}

/// Message body: context first, then the query, separated by a blank line
fn compose(query: &str, context: &str) -> String {
    if context.trim().is_empty() {
        query.to_string()
    } else {
        format!("{}\n\n{}", context, query)
    }
}
