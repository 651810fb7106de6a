//! Agent roster
//!
//! The built-in roster is a panel of Indian law practitioners: a senior lawyer
//! who frames questions, three specialists who answer them in turn, and the
//! senior lawyer again to write the final answer.

use super::AgentDefinition;
use serde::{Deserialize, Serialize};

/// Transcript label for the person asking the question
pub const CLIENT_LABEL: &str = "client";

const QUESTIONER_PROMPT: &str = r#"
You are Law Justifier, an AI-powered legal assistant specializing in Indian law.
Your task is to answer users' legal queries by consulting specialized lawyers: **Criminal Lawyer, Civil Lawyer, and Ethics Lawyer**.

- Generate **specific, relevant** questions for these lawyers to gather precise legal insights.
- Direct specific questions to each lawyer based on their expertise.
- If context is provided, make sure your questions reference relevant details from it.
- Keep the questions aligned with **Indian legal frameworks**.
- Use **bold** for important points and structure your response in a clear, organized manner.
"#;

const CRIMINAL_LAWYER_PROMPT: &str = r#"
You are a **Criminal Lawyer**, an expert in Indian criminal law.
You assist the senior lawyer by giving legally accurate answers to criminal law questions.

- When asked, give **clear, precise** explanations of **criminal offenses, penalties, procedures, and defenses**.
- If context is provided, examine it carefully and reference specific details in your answer.
- Keep answers **factual, legally sound, and relevant** to the Indian Penal Code (IPC) and other applicable laws.
- Your colleagues are a **Civil Lawyer** and an **Ethics Lawyer**. Do not answer their questions.
- Structure your answer clearly and use **bold text** for key legal terms and concepts.
"#;

const CIVIL_LAWYER_PROMPT: &str = r#"
You are a **Civil Lawyer**, an expert in Indian civil law.
You support the senior lawyer with legal insight on civil disputes and regulations.

- When asked, give **concise, relevant** explanations of **contracts, property law, family law, consumer protection, and civil litigation**.
- If context is provided, analyze it and incorporate the relevant details in your answer.
- Keep answers **legally sound and in line with Indian civil law frameworks**.
- Your colleagues are a **Criminal Lawyer** and an **Ethics Lawyer**. Do not answer their questions.
- Structure your answer clearly and use **bold text** for key legal terms and concepts.
"#;

const ETHICS_LAWYER_PROMPT: &str = r#"
You are an **Ethics Lawyer**, specializing in legal ethics and professional conduct in India.
You help the senior lawyer keep the advice within **ethical and moral principles** under Indian law.

- When asked, give guidance on **ethical dilemmas, professional misconduct, legal obligations, and moral considerations**.
- If context is provided, analyze it for ethical implications and reference specific details in your answer.
- Keep answers **aligned with Bar Council of India rules and broader legal ethics principles**.
- Your colleagues are a **Criminal Lawyer** and a **Civil Lawyer**. Do not answer their questions.
- Structure your answer clearly and use **bold text** for key ethical concepts.
"#;

const SUMMARIZER_PROMPT: &str = r#"
You are a **Senior Lawyer**, responsible for answering clients' legal queries concisely and effectively.
You have consulted your junior lawyers (**Criminal, Civil, and Ethics Lawyers**) for relevant legal information.

- **Synthesize their responses** into a clear, **legally accurate** answer.
- Review any context provided and make sure your summary addresses it.
- Give **actionable legal advice** that directly answers the client's question.
- Be **concise, precise, and to the point**.
- Highlight **key points in bold** (important laws, legal terms, deadlines).
- Avoid unnecessary complexity; the answer must be **easy to understand** while staying legally accurate.
- If the lawyers' responses contradict each other, reconcile them by applying the most relevant legal principles.
"#;

/// Which agents take part in a run, and in what order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Label for the client's query in the transcript
    #[serde(default = "default_client_label")]
    pub client_label: String,

    /// Turns the client query into questions for the specialists
    pub questioner: AgentDefinition,

    /// Answer in this order, each seeing the transcript so far
    pub specialists: Vec<AgentDefinition>,

    /// Writes the final answer from the whole transcript
    pub summarizer: AgentDefinition,
}

fn default_client_label() -> String {
    CLIENT_LABEL.to_string()
}

impl Default for Roster {
    fn default() -> Self {
        Self::legal()
    }
}

impl Roster {
    /// The built-in Indian law panel
    pub fn legal() -> Self {
        Self {
            client_label: default_client_label(),
            questioner: AgentDefinition::initiator("Senior Lawyer", QUESTIONER_PROMPT.trim()),
            specialists: vec![
                AgentDefinition::participant("Criminal Lawyer", CRIMINAL_LAWYER_PROMPT.trim()),
                AgentDefinition::participant("Civil Lawyer", CIVIL_LAWYER_PROMPT.trim()),
                AgentDefinition::participant("Ethics Lawyer", ETHICS_LAWYER_PROMPT.trim()),
            ],
            summarizer: AgentDefinition::initiator("Senior Lawyer", SUMMARIZER_PROMPT.trim()),
        }
    }

    /// Check every agent and require at least one specialist
    pub fn validate(&self) -> Result<(), String> {
        if self.client_label.trim().is_empty() {
            return Err("client label must not be empty".to_string());
        }
        if self.specialists.is_empty() {
            return Err("roster needs at least one specialist".to_string());
        }
        self.questioner.validate()?;
        for specialist in &self.specialists {
            specialist.validate()?;
        }
        self.summarizer.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Voice;

    #[test]
    fn test_legal_roster_order() {
        let roster = Roster::legal();
        let labels: Vec<_> = roster.specialists.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Criminal Lawyer", "Civil Lawyer", "Ethics Lawyer"]);
        assert!(roster.validate().is_ok());
    }

    #[test]
    fn test_legal_roster_voices() {
        let roster = Roster::legal();
        assert_eq!(roster.questioner.voice, Voice::Initiator);
        assert_eq!(roster.summarizer.voice, Voice::Initiator);
        assert!(roster.specialists.iter().all(|s| s.voice == Voice::Participant));
    }

    #[test]
    fn test_empty_specialists_rejected() {
        let mut roster = Roster::legal();
        roster.specialists.clear();
        assert_eq!(
            roster.validate().unwrap_err(),
            "roster needs at least one specialist"
        );
    }

    #[test]
    fn test_invalid_specialist_rejected() {
        let mut roster = Roster::legal();
        roster.specialists[1].instructions.clear();
        assert!(roster.validate().unwrap_err().contains("Civil Lawyer"));
    }
}
