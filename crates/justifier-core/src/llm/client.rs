//! Completion client trait

use super::{ChatMessage, LlmError};

/// A synchronous text-completion service.
///
/// Implementations block until the service answers or fails. The pipeline
/// never assumes anything about retries, pooling or timeouts; those belong to
/// the implementation.
pub trait CompletionClient: Send + Sync {
    /// Get the client's identifier (e.g., "openai")
    fn id(&self) -> &str;

    /// Get the model requests are sent to
    fn model(&self) -> &str;

    /// Complete a conversation made of one system instruction and the given messages
    fn complete(&self, system_instruction: &str, messages: &[ChatMessage]) -> Result<String, LlmError>;
}

/// Shared handle to a completion client
pub type SharedClient = std::sync::Arc<dyn CompletionClient>;
