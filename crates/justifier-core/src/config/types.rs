//! Configuration types for Justifier
//!
//! Defines the structure of `.justifier.toml` configuration.

use crate::agents::Roster;
use crate::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::pipeline::FailurePolicy;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JustifierConfig {
    /// Completion service configuration
    #[serde(default)]
    pub llm: LlmConfig,

    /// Pipeline behaviour
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// LLM configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// API key (supports ${ENV_VAR} syntax)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL for the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f32>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    120
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
            temperature: None,
        }
    }
}

impl LlmConfig {
    /// The API key, unless it is blank or an unexpanded `${VAR}` placeholder
    pub fn resolved_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty() && !k.starts_with("${"))
    }
}

/// Pipeline configuration section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// What to do when a single agent call fails
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Custom roster; the built-in legal roster is used when absent
    #[serde(default)]
    pub roster: Option<Roster>,
}

impl JustifierConfig {
    /// Whether an API key is available after expansion
    pub fn has_api_key(&self) -> bool {
        self.llm.resolved_api_key().is_some()
    }

    /// The roster to run, falling back to the built-in one
    pub fn roster(&self) -> Roster {
        self.pipeline.roster.clone().unwrap_or_default()
    }
}
