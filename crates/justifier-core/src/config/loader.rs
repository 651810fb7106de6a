//! Configuration loader with environment variable expansion
//!
//! Loads configuration from `.justifier.toml` in the project root or the user config directory.

use super::types::JustifierConfig;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Load configuration from various sources
///
/// Priority order:
/// 1. Project-level `.justifier.toml`
/// 2. User-level `~/.config/justifier/config.toml`
/// 3. Default configuration
///
/// Environment overrides are applied in every case. A missing API key is not
/// an error here; it surfaces when the first completion call is made.
pub fn load_config(project_dir: &Path) -> Result<JustifierConfig, ConfigError> {
    let project_config = project_dir.join(".justifier.toml");
    if project_config.exists() {
        return load_from_file(&project_config);
    }

    if let Some(user_config) = get_user_config_path() {
        if user_config.exists() {
            return load_from_file(&user_config);
        }
    }

    Ok(apply_env_overrides(JustifierConfig::default()))
}

/// Get user config directory path
fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("justifier").join("config.toml"))
}

/// Load configuration from a specific file
pub fn load_from_file(path: &Path) -> Result<JustifierConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut config: JustifierConfig = toml::from_str(&content)?;

    expand_env_vars(&mut config);

    tracing::debug!(path = %path.display(), "loaded configuration");

    Ok(apply_env_overrides(config))
}

fn env_regex() -> &'static Regex {
    static ENV_REGEX: OnceLock<Regex> = OnceLock::new();
    ENV_REGEX.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

/// Expand ${VAR} patterns in string values
fn expand_env_vars(config: &mut JustifierConfig) {
    let regex = env_regex();

    if let Some(ref api_key) = config.llm.api_key {
        config.llm.api_key = Some(expand_string(api_key, regex));
    }
    config.llm.base_url = expand_string(&config.llm.base_url, regex);
    config.llm.model = expand_string(&config.llm.model, regex);
}

/// Expand environment variables in a single string
fn expand_string(s: &str, regex: &Regex) -> String {
    regex
        .replace_all(s, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
}

/// Apply environment variable overrides
///
/// Supports direct environment variables:
/// - OPENAI_API_KEY -> llm.api_key
/// - OPENAI_BASE_URL -> llm.base_url
/// - JUSTIFIER_MODEL -> llm.model
fn apply_env_overrides(mut config: JustifierConfig) -> JustifierConfig {
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        if !key.is_empty() {
            config.llm.api_key = Some(key);
        }
    }

    if let Ok(url) = std::env::var("OPENAI_BASE_URL") {
        if !url.is_empty() {
            config.llm.base_url = url;
        }
    }

    if let Ok(model) = std::env::var("JUSTIFIER_MODEL") {
        if !model.is_empty() {
            config.llm.model = model;
        }
    }

    config
}

/// Create a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# Justifier Configuration
# Place this file in your project root as .justifier.toml
# or in ~/.config/justifier/config.toml for global settings

[llm]
model = "gpt-3.5-turbo"
api_key = "${OPENAI_API_KEY}"
base_url = "https://api.openai.com/v1"

# Request timeout in seconds
timeout = 120

# temperature = 0.7

[pipeline]
# "degrade": a failed agent contributes an error note and the run continues
# "abort": the first failed agent ends the run with an error answer
failure_policy = "degrade"

# Replace the built-in legal roster:
#
# [pipeline.roster]
# client_label = "client"
#
# [pipeline.roster.questioner]
# label = "Senior Lawyer"
# voice = "initiator"
# instructions = "..."
#
# [[pipeline.roster.specialists]]
# label = "Criminal Lawyer"
# voice = "participant"
# instructions = "..."
#
# [pipeline.roster.summarizer]
# label = "Senior Lawyer"
# voice = "initiator"
# instructions = "..."
"#
}
