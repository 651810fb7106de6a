//! Justifier Core - Backend library for Justifier
//!
//! This crate provides the UI-agnostic backend functionality:
//! - Role agents bound to fixed instruction templates
//! - The sequential question → specialists → summary pipeline
//! - An OpenAI-compatible completion client
//! - Configuration loading
//!
//! Any front end (CLI, server) drives the pipeline through [`Orchestrator`].
//!
//! # Architecture
//!
//! ```text
//!  query ─→ questioner ─→ specialist₁ ─→ … ─→ specialistₙ ─→ summarizer ─→ answer
//!                 │             │                   │              │
//!                 └─────────────┴──── transcript ───┴──────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use justifier_core::{config::JustifierConfig, Orchestrator};
//!
//! let config = JustifierConfig::default();
//! let orchestrator = Orchestrator::from_config(&config).unwrap();
//!
//! let result = orchestrator.get_answer("Can I be arrested without a warrant?", "");
//! println!("{}", result.answer);
//! for step in &result.reasoning {
//!     println!("- {}", step);
//! }
//! ```

// Public API modules
pub mod error;

// Configuration loading
pub mod config;

// LLM client system
pub mod llm;

// Role agents and the default roster
pub mod agents;

// The prompting pipeline
pub mod pipeline;

// Re-export commonly used types
pub use error::{JustifierError, Result};

// Re-export config types
pub use config::{JustifierConfig, LlmConfig, PipelineConfig};

// Re-export LLM types
pub use llm::{ChatMessage, CompletionClient, LlmError, OpenAIClient, SharedClient, Voice};

// Re-export agent types
pub use agents::{AgentDefinition, RoleAgent, Roster};

// Re-export pipeline types
pub use pipeline::{FailurePolicy, Orchestrator, PipelineResult, Transcript, TranscriptEntry};

/// Get the crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
