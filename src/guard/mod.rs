//! The path-authorization engine.
//!
//! This module decides whether a tool call stays inside an authorized
//! working directory:
//!
//! - **Normalization** ([`path`]): pure lexical resolution of `~`, `.`,
//!   `..`, and separators — no filesystem access, no symlink following.
//! - **Extraction** ([`command`]): heuristic scan of shell command strings
//!   for candidate path references.
//! - **Dispatch** ([`PathAuthorizer`]): maps each tool kind to the paths it
//!   must authorize and renders a [`Decision`].
//!
//! ```rust,ignore
//! use dirgate::{PathAuthorizer, ToolCall};
//!
//! let authorizer = PathAuthorizer::new("/p/project");
//! let call = ToolCall::Bash {
//!     command: Some("cat ../../../etc/passwd".to_string()),
//! };
//! let decision = authorizer.evaluate(&call);
//! assert!(!decision.allowed);
//! ```
//!
//! The gate fails open: when evaluation itself malfunctions, the call is
//! allowed and a diagnostic is logged, on the assumption that this check
//! is a secondary defense rather than the sole control.

mod authorizer;
pub mod command;
pub mod path;

pub use authorizer::{Decision, PathAuthorizer};
