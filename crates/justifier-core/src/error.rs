//! Error types for Justifier Core
//!
//! Provides a unified error type for all backend operations.

use crate::llm::LlmError;
use thiserror::Error;

/// Result type for Justifier Core operations
pub type Result<T> = std::result::Result<T, JustifierError>;

/// Unified error type for Justifier Core
#[derive(Error, Debug)]
pub enum JustifierError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A named agent failed and the pipeline chose not to continue
    #[error("{label} failed: {source}")]
    Agent {
        label: String,
        #[source]
        source: LlmError,
    },
}

impl JustifierError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        JustifierError::Config(msg.into())
    }

    /// Create an agent failure error
    pub fn agent(label: impl Into<String>, source: LlmError) -> Self {
        JustifierError::Agent {
            label: label.into(),
            source,
        }
    }
}
