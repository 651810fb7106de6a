//! Orchestrator
//!
//! Owns the roster's agents and runs them strictly one after another, each
//! stage reading the text of every stage before it.

use super::{FailurePolicy, PipelineResult, Transcript};
use crate::agents::{sentinel, AgentDefinition, RoleAgent, Roster};
use crate::config::JustifierConfig;
use crate::llm::{OpenAIClient, SharedClient};
use crate::{JustifierError, Result};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use uuid::Uuid;

/// Runs the question → specialists → summary pipeline
#[derive(Debug)]
pub struct Orchestrator {
    client_label: String,
    questioner: RoleAgent,
    specialists: Vec<RoleAgent>,
    summarizer: RoleAgent,
    policy: FailurePolicy,
}

impl Orchestrator {
    /// Bind every agent in `roster` to `client`
    pub fn new(roster: Roster, client: SharedClient) -> Result<Self> {
        roster.validate().map_err(JustifierError::config)?;

        let bind = |definition: AgentDefinition| RoleAgent::new(Arc::new(definition), client.clone());

        Ok(Self {
            client_label: roster.client_label,
            questioner: bind(roster.questioner),
            specialists: roster.specialists.into_iter().map(&bind).collect(),
            summarizer: bind(roster.summarizer),
            policy: FailurePolicy::default(),
        })
    }

    /// Build an OpenAI-backed orchestrator from configuration
    pub fn from_config(config: &JustifierConfig) -> Result<Self> {
        let client: SharedClient = Arc::new(OpenAIClient::from_config(&config.llm));
        Ok(Self::new(config.roster(), client)?.with_policy(config.pipeline.failure_policy))
    }

    /// Set the per-agent failure policy
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Specialist labels in the order they are consulted
    pub fn specialist_labels(&self) -> Vec<&str> {
        self.specialists.iter().map(|s| s.label()).collect()
    }

    /// Answer `query`, treating `context` as opaque background text.
    ///
    /// Always returns a value. When the run breaks down as a whole the answer
    /// is an error message and the reasoning holds a single diagnostic entry.
    pub fn get_answer(&self, query: &str, context: &str) -> PipelineResult {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("pipeline", %run_id);
        let _enter = span.enter();

        tracing::info!(specialists = self.specialists.len(), policy = ?self.policy, "pipeline started");

        let outcome = catch_unwind(AssertUnwindSafe(|| self.run(query, context)));
        let detail = match outcome {
            Ok(Ok(result)) => {
                tracing::info!(answer_chars = result.answer.len(), "pipeline finished");
                return result;
            }
            Ok(Err(e)) => e.to_string(),
            Err(panic) => format!("panic: {}", panic_message(&panic)),
        };

        tracing::error!(error = %detail, "pipeline failed");
        PipelineResult::failed(&detail)
    }

    fn run(&self, query: &str, context: &str) -> Result<PipelineResult> {
        // Question generation
        let questions = self.ask(&self.questioner, query, &format!("Context:\n{}\n", context))?;

        let mut transcript = Transcript::new();
        transcript.push(&self.client_label, query);
        transcript.push(self.questioner.label(), questions);

        // Specialist round; the context block is fixed for every specialist
        let agent_context = format!("Context: {}\n\nclient question: {}", context, query);
        for specialist in &self.specialists {
            tracing::debug!(agent = specialist.label(), turn = transcript.len(), "specialist turn");
            let answer = self.ask(specialist, &transcript.render(), &agent_context)?;
            transcript.push(specialist.label(), answer);
        }

        // Summarization
        let summary_query = format!(
            "Context: {}\n\nclient question: {}\n\n{}\n\n{} to User:",
            context,
            query,
            transcript.render(),
            self.summarizer.label()
        );
        let answer = self.ask(&self.summarizer, &summary_query, "")?;

        Ok(self.assemble(&transcript, answer))
    }

    /// Reasoning mirrors the transcript after the client entry, then the answer
    fn assemble(&self, transcript: &Transcript, answer: String) -> PipelineResult {
        let mut reasoning: Vec<String> = transcript
            .entries()
            .iter()
            .skip(1)
            .map(|entry| entry.to_string())
            .collect();
        reasoning.push(format!("{}: {}", self.summarizer.label(), answer));

        PipelineResult { answer, reasoning }
    }

    /// Call one agent and apply the failure policy
    fn ask(&self, agent: &RoleAgent, query: &str, context: &str) -> Result<String> {
        match agent.respond(query, context) {
            Ok(text) => Ok(text),
            Err(e) => match self.policy {
                FailurePolicy::Degrade => Ok(sentinel(&e)),
                FailurePolicy::Abort => Err(JustifierError::agent(agent.label(), e)),
            },
        }
    }
}

fn panic_message(panic: &Box<dyn std::any::Any + Send>) -> String {
    panic
        .downcast_ref::<String>()
        .map(|s| s.as_str())
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ChatMessage, CompletionClient, LlmError};
    use pretty_assertions::assert_eq;

    /// Answers with the agent's first instruction line
    struct NameClient;

    impl CompletionClient for NameClient {
        fn id(&self) -> &str {
            "name"
        }

        fn model(&self) -> &str {
            "name-1"
        }

        fn complete(&self, system: &str, _messages: &[ChatMessage]) -> std::result::Result<String, LlmError> {
            Ok(format!(" {} ", system.lines().next().unwrap_or_default()))
        }
    }

    fn small_roster() -> Roster {
        Roster {
            client_label: "client".to_string(),
            questioner: AgentDefinition::initiator("Q", "questions"),
            specialists: vec![AgentDefinition::participant("S", "specialist")],
            summarizer: AgentDefinition::initiator("Z", "summary"),
        }
    }

    #[test]
    fn test_invalid_roster_rejected() {
        let mut roster = small_roster();
        roster.specialists.clear();
        let err = Orchestrator::new(roster, Arc::new(NameClient)).unwrap_err();
        assert!(matches!(err, JustifierError::Config(_)));
    }

    #[test]
    fn test_reasoning_labels() {
        let orchestrator = Orchestrator::new(small_roster(), Arc::new(NameClient)).unwrap();
        let result = orchestrator.get_answer("q", "");
        assert_eq!(
            result.reasoning,
            vec!["Q: questions", "S: specialist", "Z: summary"]
        );
        assert_eq!(result.answer, "summary");
    }

    #[test]
    fn test_from_config_uses_policy() {
        let mut config = JustifierConfig::default();
        config.pipeline.failure_policy = FailurePolicy::Abort;
        let orchestrator = Orchestrator::from_config(&config).unwrap();
        assert_eq!(orchestrator.policy(), FailurePolicy::Abort);
        assert_eq!(
            orchestrator.specialist_labels(),
            vec!["Criminal Lawyer", "Civil Lawyer", "Ethics Lawyer"]
        );
    }

    #[test]
    fn test_from_config_without_key_degrades() {
        let orchestrator = Orchestrator::from_config(&JustifierConfig::default()).unwrap();
        let result = orchestrator.get_answer("q", "");
        assert_eq!(result.reasoning.len(), 5);
        assert_eq!(result.answer, "An error occurred: No API key configured");
    }

    #[test]
    fn test_panic_message() {
        let panic: Box<dyn std::any::Any + Send> = Box::new("static str");
        assert_eq!(panic_message(&panic), "static str");
        let panic: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(&panic), "unknown panic");
    }
}
