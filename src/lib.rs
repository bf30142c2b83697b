//! # dirgate: a working-directory policy gate for agent tool calls
//!
//! `dirgate` sits between an automated coding agent and the filesystem as a
//! pre-tool-use hook. For every tool invocation the agent requests, it
//! extracts the filesystem paths the call would touch — direct path fields
//! and path-like tokens inside shell command strings — and decides whether
//! each one stays inside an authorized working directory.
//!
//! The check is lexical and best-effort: paths are normalized as text
//! without consulting the real filesystem, and command strings are scanned
//! heuristically rather than parsed as shell grammar. The gate fails open
//! when it cannot decide, on the assumption that it is a secondary defense
//! in front of human review, not the sole control.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dirgate::{PathAuthorizer, ToolCall};
//!
//! let authorizer = PathAuthorizer::new("/p/project");
//!
//! let call = ToolCall::Write {
//!     file_path: Some("../outside.py".to_string()),
//! };
//! let decision = authorizer.evaluate(&call);
//! assert!(!decision.allowed);
//! println!("{}", decision.reason.unwrap());
//! ```
//!
//! The `dirgate` binary wires this up as a hook: it reads one JSON tool
//! record from stdin, takes the working directory from the
//! `CLAUDE_WORKING_DIR` environment variable, and exits with code 2 on a
//! denial (reason on stderr) or 0 otherwise.

pub mod error;
pub mod guard;
pub mod hook;

pub use error::GuardError;
pub use guard::{Decision, PathAuthorizer};
pub use hook::{HookInput, ToolCall};
