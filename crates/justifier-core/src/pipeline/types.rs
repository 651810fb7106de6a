//! Pipeline types

use serde::{Deserialize, Serialize};

/// How the orchestrator treats a failed agent call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Record an error note in place of the answer and keep going
    #[default]
    Degrade,
    /// End the run at the first failed agent
    Abort,
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "degrade" => Ok(FailurePolicy::Degrade),
            "abort" => Ok(FailurePolicy::Abort),
            _ => Err(format!("Unknown failure policy: {}", s)),
        }
    }
}

/// Outcome of one run, handed over to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Final answer for the client
    pub answer: String,
    /// One `label: text` entry per agent, in invocation order
    pub reasoning: Vec<String>,
}

impl PipelineResult {
    /// Result for a run that broke down; nothing from the run is kept
    pub fn failed(detail: &str) -> Self {
        Self {
            answer: format!("An error occurred in the legal analysis process: {}", detail),
            reasoning: vec![format!("Error in processing: {}", detail)],
        }
    }

    /// Split into `(answer, reasoning)`
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.answer, self.reasoning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_result() {
        let (answer, reasoning) = PipelineResult::failed("boom").into_parts();
        assert_eq!(answer, "An error occurred in the legal analysis process: boom");
        assert_eq!(reasoning, vec!["Error in processing: boom".to_string()]);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("Abort".parse::<FailurePolicy>().unwrap(), FailurePolicy::Abort);
        assert_eq!("degrade".parse::<FailurePolicy>().unwrap(), FailurePolicy::Degrade);
        assert!("retry".parse::<FailurePolicy>().is_err());
    }
}
