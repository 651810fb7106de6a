//! LLM integration module
//!
//! Provides the completion client contract the pipeline depends on, plus a
//! blocking client for OpenAI-compatible chat completion APIs.

mod client;
mod error;
mod message;
mod openai;

pub use client::{CompletionClient, SharedClient};
pub use error::LlmError;
pub use message::{ChatMessage, Voice};
pub use openai::{OpenAIClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
