//! LLM error types

use std::fmt;

/// Error type for completion calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// Network/connection error
    Connection(String),

    /// API error (authentication, server error, etc.)
    Api { status: u16, message: String },

    /// Rate limited or quota exhausted
    RateLimited,

    /// Request timeout
    Timeout,

    /// Response body did not have the expected shape
    InvalidResponse(String),

    /// No API key was configured
    MissingApiKey,

    /// Internal error
    Internal(String),
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::Connection(msg) => write!(f, "Connection error: {}", msg),
            LlmError::Api { status, message } => {
                write!(f, "API error ({}): {}", status, message)
            }
            LlmError::RateLimited => write!(f, "Rate limited"),
            LlmError::Timeout => write!(f, "Request timed out"),
            LlmError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            LlmError::MissingApiKey => write!(f, "No API key configured"),
            LlmError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for LlmError {}

impl From<ureq::Error> for LlmError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                let message = response.into_string().unwrap_or_else(|_| "Unknown error".to_string());
                if status == 429 {
                    LlmError::RateLimited
                } else if status == 401 || status == 403 {
                    LlmError::Api {
                        status,
                        message: "Authentication failed".to_string(),
                    }
                } else {
                    LlmError::Api { status, message }
                }
            }
            ureq::Error::Transport(transport) => {
                if is_timeout(&transport) {
                    LlmError::Timeout
                } else {
                    LlmError::Connection(transport.to_string())
                }
            }
        }
    }
}

/// ureq reports timeouts as I/O transport errors
fn is_timeout(transport: &ureq::Transport) -> bool {
    use std::error::Error;

    transport
        .source()
        .and_then(|e| e.downcast_ref::<std::io::Error>())
        .map(|e| matches!(e.kind(), std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock))
        .unwrap_or(false)
}

impl From<std::io::Error> for LlmError {
    fn from(err: std::io::Error) -> Self {
        LlmError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::InvalidResponse(format!("JSON error: {}", err))
    }
}
