//! The prompting pipeline
//!
//! Drives one run from a client query to a final answer:
//! - questioner: turns the query into questions for the specialists
//! - specialists: answer in roster order, each seeing the transcript so far
//! - summarizer: writes the answer from the whole transcript
//!
//! # Example
//!
//! ```no_run
//! use justifier_core::{OpenAIClient, Orchestrator, Roster};
//! use std::sync::Arc;
//!
//! let client = Arc::new(OpenAIClient::new(std::env::var("OPENAI_API_KEY").ok(), "gpt-4o-mini"));
//! let orchestrator = Orchestrator::new(Roster::legal(), client).unwrap();
//!
//! let (answer, reasoning) = orchestrator
//!     .get_answer("Is a verbal agreement binding?", "Agreement made over the phone in 2021")
//!     .into_parts();
//! assert_eq!(reasoning.len(), 5);
//! println!("{}", answer);
//! ```

mod orchestrator;
mod transcript;
mod types;

pub use orchestrator::Orchestrator;
pub use transcript::{Transcript, TranscriptEntry};
pub use types::{FailurePolicy, PipelineResult};
