//! Path authorization against a working-directory root.
//!
//! [`PathAuthorizer`] is the decision engine: given one tool call it
//! determines which paths the call would touch, normalizes each one, and
//! checks containment within the working directory. Evaluation is pure and
//! stateless across calls; the authorizer holds only the immutable root.

use crate::error::GuardError;
use crate::guard::command::extract_paths;
use crate::guard::path::normalize;
use crate::hook::ToolCall;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Outcome of authorizing a single tool call.
///
/// `reason` is populated only on denial and names the offending path and
/// the tool kind. A decision carries no identity and no lifecycle beyond
/// the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Whether the tool call may proceed.
    pub allowed: bool,
    /// Human-readable denial reason; `None` when allowed.
    pub reason: Option<String>,
}

impl Decision {
    /// Creates an allow decision.
    #[must_use]
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    /// Creates a deny decision with the given reason.
    #[must_use]
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Decides whether tool calls stay inside an authorized working directory.
///
/// The check is best-effort and lexical: paths are normalized as text
/// (`~`, `.`, `..`, repeated separators) without consulting the real
/// filesystem, and shell commands are scanned heuristically rather than
/// parsed. The gate is a secondary defense, so when the checker itself
/// cannot produce a confident answer it fails open.
///
/// # Example
///
/// ```rust,ignore
/// use dirgate::{PathAuthorizer, ToolCall};
///
/// let authorizer = PathAuthorizer::new("/p/project");
/// let call = ToolCall::Write {
///     file_path: Some("../escape.py".to_string()),
/// };
/// assert!(!authorizer.evaluate(&call).allowed);
/// ```
#[derive(Debug, Clone)]
pub struct PathAuthorizer {
    /// The sole authorization boundary; treated as already absolute.
    working_dir: String,
}

impl PathAuthorizer {
    /// Creates an authorizer bound to the given working-directory root.
    ///
    /// The caller is responsible for supplying an absolute path.
    #[must_use]
    pub fn new(working_dir: impl Into<String>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Returns the working-directory root this authorizer enforces.
    #[must_use]
    pub fn working_dir(&self) -> &str {
        &self.working_dir
    }

    /// Evaluates one tool call and returns the decision.
    ///
    /// Never panics toward the caller: an unexpected fault anywhere in
    /// extraction or normalization is caught here and converted to an
    /// allow, with a diagnostic logged. Availability is prioritized over
    /// strict enforcement when the checker itself malfunctions.
    #[must_use]
    pub fn evaluate(&self, call: &ToolCall) -> Decision {
        match panic::catch_unwind(AssertUnwindSafe(|| self.evaluate_inner(call))) {
            Ok(decision) => decision,
            Err(payload) => {
                let error = GuardError::internal(panic_message(payload.as_ref()));
                warn!(%error, "internal fault during path authorization; failing open");
                Decision::allow()
            }
        }
    }

    fn evaluate_inner(&self, call: &ToolCall) -> Decision {
        match call {
            ToolCall::Write { file_path } => self.check_field(file_path.as_deref(), "Write"),
            ToolCall::Edit { file_path } => self.check_field(file_path.as_deref(), "Edit"),
            ToolCall::MultiEdit { file_path, edits } => {
                let primary = self.check_field(file_path.as_deref(), "MultiEdit");
                if !primary.allowed {
                    return primary;
                }
                for edit in edits {
                    let decision = self.check_field(edit.as_deref(), "MultiEdit");
                    if !decision.allowed {
                        return decision;
                    }
                }
                Decision::allow()
            }
            ToolCall::Bash { command } => {
                let Some(command) = command.as_deref() else {
                    return Decision::allow();
                };
                for candidate in extract_paths(command) {
                    if !self.is_path_safe(&candidate) {
                        return Decision::deny(format!(
                            "Command contains path '{candidate}' outside working directory '{}'",
                            self.working_dir
                        ));
                    }
                }
                Decision::allow()
            }
            ToolCall::Other => Decision::allow(),
        }
    }

    /// Checks a single optional path field. An absent or empty path is not
    /// a violation; it is skipped.
    fn check_field(&self, path: Option<&str>, kind: &str) -> Decision {
        let Some(path) = path else {
            return Decision::allow();
        };
        if self.is_path_safe(path) {
            Decision::allow()
        } else {
            Decision::deny(format!(
                "{kind} path '{path}' is outside working directory '{}'",
                self.working_dir
            ))
        }
    }

    /// Returns true when the path, after normalization, lies inside the
    /// working directory. Containment requires the candidate to equal the
    /// normalized root or to continue past it with a separator, so a
    /// sibling like `/root-evil` never matches a root of `/root`.
    fn is_path_safe(&self, path: &str) -> bool {
        if path.is_empty() {
            return true;
        }
        let candidate = normalize(path, &self.working_dir);
        let root = normalize(&self.working_dir, &self.working_dir);
        let is_safe = candidate == root || candidate.starts_with(&format!("{root}/"));
        debug!(path, %candidate, %root, is_safe, "containment check");
        is_safe
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "/p/project";

    fn authorizer() -> PathAuthorizer {
        PathAuthorizer::new(ROOT)
    }

    fn write(path: &str) -> ToolCall {
        ToolCall::Write {
            file_path: Some(path.to_string()),
        }
    }

    fn bash(command: &str) -> ToolCall {
        ToolCall::Bash {
            command: Some(command.to_string()),
        }
    }

    #[test]
    fn write_inside_root_is_allowed() {
        let decision = authorizer().evaluate(&write("/p/project/test.py"));
        assert!(decision.allowed);
        assert!(decision.reason.is_none());
    }

    #[test]
    fn write_escaping_root_is_denied() {
        let decision = authorizer().evaluate(&write("../test.py"));
        assert!(!decision.allowed);
        let reason = decision.reason.unwrap();
        assert!(reason.contains("outside working directory"));
        assert!(reason.contains("../test.py"));
        assert!(reason.contains(ROOT));
    }

    #[test]
    fn write_that_normalizes_back_inside_is_allowed() {
        let decision = authorizer().evaluate(&write("/p/project/subdir/../test.py"));
        assert!(decision.allowed);
    }

    #[test]
    fn working_dir_itself_is_safe() {
        assert!(authorizer().evaluate(&write(ROOT)).allowed);
    }

    #[test]
    fn sibling_prefix_is_not_containment() {
        let authorizer = PathAuthorizer::new("/a/b");
        let decision = authorizer.evaluate(&write("/a/bc/file.txt"));
        assert!(!decision.allowed);
    }

    #[test]
    fn empty_path_field_is_skipped() {
        assert!(authorizer().evaluate(&write("")).allowed);
        let absent = ToolCall::Write { file_path: None };
        assert!(authorizer().evaluate(&absent).allowed);
    }

    #[test]
    fn edit_uses_its_own_label() {
        let call = ToolCall::Edit {
            file_path: Some("/etc/passwd".to_string()),
        };
        let decision = authorizer().evaluate(&call);
        assert!(!decision.allowed);
        assert!(decision.reason.unwrap().starts_with("Edit path"));
    }

    #[test]
    fn multi_edit_denies_on_first_offending_edit() {
        let call = ToolCall::MultiEdit {
            file_path: Some("/p/project/main.py".to_string()),
            edits: vec![
                Some("/p/project/ok.py".to_string()),
                Some("../other/hack.py".to_string()),
                Some("/also/outside.py".to_string()),
            ],
        };
        let decision = authorizer().evaluate(&call);
        assert!(!decision.allowed);
        let reason = decision.reason.unwrap();
        assert!(reason.contains("hack.py"));
        assert!(reason.starts_with("MultiEdit path"));
        assert!(!reason.contains("outside.py"));
    }

    #[test]
    fn multi_edit_primary_path_is_checked_first() {
        let call = ToolCall::MultiEdit {
            file_path: Some("/elsewhere/main.py".to_string()),
            edits: vec![Some("../other/hack.py".to_string())],
        };
        let reason = authorizer().evaluate(&call).reason.unwrap();
        assert!(reason.contains("/elsewhere/main.py"));
    }

    #[test]
    fn multi_edit_with_absent_entries_is_allowed() {
        let call = ToolCall::MultiEdit {
            file_path: None,
            edits: vec![None, Some("/p/project/a.py".to_string())],
        };
        assert!(authorizer().evaluate(&call).allowed);
    }

    #[test]
    fn bash_traversal_is_denied() {
        let decision = authorizer().evaluate(&bash("cat ../../../etc/passwd"));
        assert!(!decision.allowed);
        let reason = decision.reason.unwrap();
        assert!(reason.contains("../../../etc/passwd"));
        assert!(reason.starts_with("Command contains path"));
    }

    #[test]
    fn bash_cd_out_of_root_is_denied() {
        assert!(!authorizer().evaluate(&bash("cd ../")).allowed);
    }

    #[test]
    fn bash_listing_inside_root_is_allowed() {
        assert!(authorizer().evaluate(&bash("ls -la ./src")).allowed);
    }

    #[test]
    fn bash_redirection_outside_root_is_denied() {
        let decision = authorizer().evaluate(&bash("echo data > /tmp/leak.txt"));
        assert!(!decision.allowed);
        assert!(decision.reason.unwrap().contains("/tmp/leak.txt"));
    }

    #[test]
    fn bash_tilde_target_is_denied() {
        // Only meaningful when a home directory exists and is not itself
        // under the project root.
        if let Some(home) = dirs::home_dir() {
            if !home.starts_with(ROOT) {
                let decision = authorizer().evaluate(&bash("cat ~/.ssh/id_rsa"));
                assert!(!decision.allowed);
            }
        }
    }

    #[test]
    fn bash_without_command_is_allowed() {
        let call = ToolCall::Bash { command: None };
        assert!(authorizer().evaluate(&call).allowed);
    }

    #[test]
    fn unrecognized_tool_kinds_are_always_allowed() {
        assert!(authorizer().evaluate(&ToolCall::Other).allowed);
    }

    #[test]
    fn reason_quotes_the_working_dir_as_supplied() {
        // The reason cites the configured root verbatim, not a normalized
        // rendering of it.
        let authorizer = PathAuthorizer::new("/p/project/");
        let reason = authorizer
            .evaluate(&write("/outside.txt"))
            .reason
            .unwrap();
        assert!(reason.contains("'/p/project/'"));
    }
}
