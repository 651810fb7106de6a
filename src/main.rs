//! Justifier - multi-agent legal assistant
//!
//! Entry point: loads credentials and configuration, then answers either the
//! query given on the command line or every line read from stdin.

use anyhow::{Context, Result};
use clap::Parser;
use justifier_core::{config, FailurePolicy, JustifierConfig, Orchestrator, PipelineResult};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "justifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Answer legal questions by consulting a panel of specialist agents", long_about = None)]
struct Args {
    /// Question to answer; queries are read from stdin when omitted
    query: Option<String>,

    /// Background text attached to the query
    #[arg(short, long, conflicts_with = "context_file")]
    context: Option<String>,

    /// Read the context from a file
    #[arg(long, value_name = "PATH")]
    context_file: Option<PathBuf>,

    /// Configuration file (default: .justifier.toml, then the user config dir)
    #[arg(long, value_name = "PATH", env = "JUSTIFIER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured failure policy ("degrade" or "abort")
    #[arg(long, value_name = "POLICY")]
    failure_policy: Option<FailurePolicy>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging for justifier, on top of any RUST_LOG filter
    #[arg(short, long)]
    verbose: bool,

    /// Print a sample configuration file and exit
    #[arg(long)]
    sample_config: bool,
}

/// Build the log filter from `RUST_LOG` (default `warn`), raising justifier to
/// debug when verbose
fn log_filter(verbose: bool, rust_log: Option<&str>) -> Result<EnvFilter> {
    let mut filter = EnvFilter::new(rust_log.unwrap_or("warn"));
    if verbose {
        filter = filter
            .add_directive("justifier=debug".parse()?)
            .add_directive("justifier_core=debug".parse()?);
    }
    Ok(filter)
}

/// Initialize tracing subscriber on stderr
fn init_tracing(verbose: bool) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::registry()
        .with(log_filter(verbose, rust_log.as_deref())?)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.sample_config {
        print!("{}", config::sample_config());
        return Ok(());
    }

    // A missing .env file is fine; credentials may come from the environment
    let dotenv = dotenvy::dotenv();

    init_tracing(args.verbose)?;

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let mut config = load_config(args.config.as_deref())?;
    if let Some(policy) = args.failure_policy {
        config.pipeline.failure_policy = policy;
    }
    if !config.has_api_key() {
        tracing::warn!("no API key configured; every agent call will fail");
    }

    let orchestrator = Orchestrator::from_config(&config).context("Failed to build pipeline")?;
    let context = read_context(args.context, args.context_file.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.query {
        Some(query) => {
            let result = orchestrator.get_answer(&query, &context);
            write_result(&mut out, &result, args.json)?;
        }
        None => {
            let answered = answer_lines(&orchestrator, io::stdin().lock(), &mut out, &context, args.json)?;
            tracing::debug!(answered, "stdin closed");
        }
    }

    Ok(())
}

/// Answer every non-blank line of `input` as a separate query
fn answer_lines(
    orchestrator: &Orchestrator,
    input: impl BufRead,
    out: &mut impl Write,
    context: &str,
    json: bool,
) -> Result<usize> {
    let mut answered = 0;
    for line in input.lines() {
        let line = line.context("Failed to read query from stdin")?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        let result = orchestrator.get_answer(query, context);
        write_result(out, &result, json)?;
        out.flush()?;
        answered += 1;
    }
    Ok(answered)
}

/// Load configuration from an explicit file or the usual locations
fn load_config(path: Option<&Path>) -> Result<JustifierConfig> {
    let config = match path {
        Some(path) => config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir()?;
            config::load_config(&cwd).context("Failed to load config")?
        }
    };
    Ok(config)
}

/// Resolve the context text from the flag or a file
fn read_context(inline: Option<String>, file: Option<&Path>) -> Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read context file {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}

/// Print the answer followed by the numbered reasoning chain
fn write_result(out: &mut impl Write, result: &PipelineResult, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, result)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", result.answer)?;
    writeln!(out)?;
    writeln!(out, "Reasoning:")?;
    for (i, step) in result.reasoning.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, step)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use justifier_core::{AgentDefinition, ChatMessage, CompletionClient, LlmError, Roster};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    /// Replies with the last message it was sent, remembering each one
    #[derive(Default)]
    struct EchoClient {
        seen: Mutex<Vec<String>>,
    }

    impl CompletionClient for EchoClient {
        fn id(&self) -> &str {
            "echo"
        }

        fn model(&self) -> &str {
            "echo-1"
        }

        fn complete(&self, _system: &str, messages: &[ChatMessage]) -> std::result::Result<String, LlmError> {
            let content = messages.last().map(|m| m.content.clone()).unwrap_or_default();
            self.seen.lock().unwrap().push(content.clone());
            Ok(content)
        }
    }

    fn echo_orchestrator(client: Arc<EchoClient>) -> Orchestrator {
        let roster = Roster {
            client_label: "client".to_string(),
            questioner: AgentDefinition::initiator("Q", "questions"),
            specialists: vec![AgentDefinition::participant("S", "specialist")],
            summarizer: AgentDefinition::initiator("Z", "summary"),
        };
        Orchestrator::new(roster, client).unwrap()
    }

    fn sample_result() -> PipelineResult {
        PipelineResult {
            answer: "Yes.".to_string(),
            reasoning: vec![
                "Senior Lawyer: questions".to_string(),
                "Senior Lawyer: Yes.".to_string(),
            ],
        }
    }

    #[test]
    fn test_write_result_text() {
        let mut buf = Vec::new();
        write_result(&mut buf, &sample_result(), false).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Yes.\n\nReasoning:\n1. Senior Lawyer: questions\n2. Senior Lawyer: Yes.\n\n"
        );
    }

    #[test]
    fn test_write_result_json() {
        let mut buf = Vec::new();
        write_result(&mut buf, &sample_result(), true).unwrap();
        let parsed: PipelineResult = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, sample_result());
    }

    #[test]
    fn test_read_context_sources() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facts.txt");
        std::fs::write(&path, "FIR filed on 3 March").unwrap();

        assert_eq!(read_context(None, None).unwrap(), "");
        assert_eq!(read_context(Some("inline".into()), None).unwrap(), "inline");
        assert_eq!(read_context(None, Some(path.as_path())).unwrap(), "FIR filed on 3 March");
        assert!(read_context(None, Some(dir.path().join("missing.txt").as_path())).is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["justifier", "Can I be arrested?", "--context", "none", "--json"]);
        assert_eq!(args.query.as_deref(), Some("Can I be arrested?"));
        assert_eq!(args.context.as_deref(), Some("none"));
        assert!(args.json);
    }

    #[test]
    fn test_answer_lines_skips_blank_lines() {
        let client = Arc::new(EchoClient::default());
        let orchestrator = echo_orchestrator(client.clone());
        let input = Cursor::new("First question\n\n   \n  Second question  \n");

        let mut buf = Vec::new();
        let answered = answer_lines(&orchestrator, input, &mut buf, "", true).unwrap();

        assert_eq!(answered, 2);
        // Three agents per query
        let seen = client.seen.lock().unwrap();
        assert_eq!(seen.len(), 6);
        assert!(seen[0].ends_with("\n\nFirst question"));
        assert!(seen[3].ends_with("\n\nSecond question"));

        let results: Vec<PipelineResult> = serde_json::Deserializer::from_slice(&buf)
            .into_iter()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.reasoning.len() == 3));
    }

    #[test]
    fn test_answer_lines_empty_input() {
        let orchestrator = echo_orchestrator(Arc::new(EchoClient::default()));
        let mut buf = Vec::new();
        let answered = answer_lines(&orchestrator, Cursor::new("\n\n"), &mut buf, "", false).unwrap();
        assert_eq!(answered, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_failure_policy_flag() {
        let args = Args::parse_from(["justifier", "q", "--failure-policy", "abort"]);
        assert_eq!(args.failure_policy, Some(FailurePolicy::Abort));
        assert!(Args::try_parse_from(["justifier", "q", "--failure-policy", "retry"]).is_err());
        assert_eq!(Args::parse_from(["justifier", "q"]).failure_policy, None);
    }

    #[test]
    fn test_verbose_layers_on_rust_log() {
        let filter = log_filter(true, Some("info")).unwrap().to_string();
        assert!(filter.contains("info"));
        assert!(filter.contains("justifier_core=debug"));
        assert!(filter.contains("justifier=debug"));

        let quiet = log_filter(false, None).unwrap().to_string();
        assert!(quiet.contains("warn"));
        assert!(!quiet.contains("justifier"));
    }

    #[test]
    fn test_context_flags_conflict() {
        let result = Args::try_parse_from(["justifier", "q", "--context", "a", "--context-file", "b"]);
        assert!(result.is_err());
    }
}
