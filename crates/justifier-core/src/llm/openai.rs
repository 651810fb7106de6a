//! OpenAI completion client
//!
//! Connects to OpenAI's API (or any compatible endpoint) for chat completions.

use super::{ChatMessage, CompletionClient, LlmError};
use crate::config::LlmConfig;
use std::time::Duration;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Blocking OpenAI chat completion client
pub struct OpenAIClient {
    /// API key; checked when a request is made, not at construction
    api_key: Option<String>,

    /// Base URL for the API (supports OpenAI-compatible APIs)
    base_url: String,

    /// Model identifier
    model: String,

    /// Sampling temperature, service default when unset
    temperature: Option<f32>,

    /// HTTP agent
    agent: ureq::Agent,
}

impl OpenAIClient {
    /// Create a new OpenAI client
    pub fn new(api_key: Option<String>, model: &str) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.to_string(),
            temperature: None,
            agent: ureq::Agent::new(),
        }
    }

    /// Create a client from the `[llm]` configuration section
    ///
    /// A key still holding an unexpanded `${VAR}` placeholder counts as missing.
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(config.resolved_api_key().map(str::to_string), &config.model)
            .with_base_url(&config.base_url)
            .with_timeout(Duration::from_secs(config.timeout))
            .with_temperature(config.temperature)
    }

    /// Create with a specific base URL (for OpenAI-compatible APIs like Azure, local proxies)
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the overall request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = ureq::AgentBuilder::new().timeout(timeout).build();
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Build the JSON request body
    fn request_body(&self, system_instruction: &str, messages: &[ChatMessage]) -> serde_json::Value {
        let mut conversation = vec![serde_json::json!({
            "role": "system",
            "content": system_instruction
        })];
        conversation.extend(messages.iter().map(|msg| {
            serde_json::json!({
                "role": msg.role_str(),
                "content": msg.content
            })
        }));

        let mut body = serde_json::json!({
            "model": self.model,
            "messages": conversation
        });
        if let Some(temperature) = self.temperature {
            body["temperature"] = serde_json::json!(temperature);
        }
        body
    }
}

impl CompletionClient for OpenAIClient {
    fn id(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn complete(&self, system_instruction: &str, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;
        let body = self.request_body(system_instruction, messages);
        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(model = %self.model, messages = messages.len(), "sending chat completion");

        let response = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {}", api_key))
            .send_json(&body)?;

        let json: serde_json::Value = response
            .into_json()
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;
        extract_content(&json)
    }
}

/// Pull the first choice's message content out of a completion response
fn extract_content(json: &serde_json::Value) -> Result<String, LlmError> {
    if let Some(error) = json.get("error") {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error");
        return Err(LlmError::Api {
            status: 500,
            message: message.to_string(),
        });
    }

    json.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| LlmError::InvalidResponse("missing choices[0].message.content".to_string()))
}
