//! The `dirgate` pre-tool-use hook binary.
//!
//! Reads one JSON tool record from stdin, authorizes it against the
//! configured working directory, and signals the result through the exit
//! code: 2 blocks the tool call (reason on stderr), 0 lets it proceed.
//! Every failure of the gate itself — missing configuration, malformed
//! input — also exits 0, because the gate is a secondary defense and must
//! not take the agent down with it. Diagnostics go to stderr only; stdout
//! stays untouched.

use clap::Parser;
use dirgate::{hook, PathAuthorizer, ToolCall};
use std::io;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Exit code that lets the tool call proceed.
const EXIT_ALLOW: u8 = 0;
/// Exit code that blocks the tool call.
const EXIT_BLOCK: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "dirgate", version, about = "Gate agent tool calls to a working directory")]
struct Cli {
    /// Directory that all tool-call paths must stay within.
    #[arg(long, env = "CLAUDE_WORKING_DIR")]
    working_dir: Option<String>,

    /// Log filter, e.g. "debug" or "dirgate=trace".
    #[arg(long, env = "DIRGATE_LOG", default_value = "warn")]
    log: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let Some(working_dir) = cli.working_dir else {
        warn!("working directory not configured; allowing tool call");
        return ExitCode::from(EXIT_ALLOW);
    };

    let input = match hook::read_input(io::stdin().lock()) {
        Ok(input) => input,
        Err(error) => {
            warn!(%error, "could not decode hook input; allowing tool call");
            return ExitCode::from(EXIT_ALLOW);
        }
    };

    let call = ToolCall::from(input);
    let decision = PathAuthorizer::new(working_dir).evaluate(&call);

    match decision.reason {
        Some(reason) if !decision.allowed => {
            eprintln!("BLOCKED: {reason}");
            ExitCode::from(EXIT_BLOCK)
        }
        _ => ExitCode::from(EXIT_ALLOW),
    }
}
