//! Hook transport decoding.
//!
//! A pre-tool-use hook receives one JSON record on stdin describing the
//! tool invocation the agent wants to perform. The record shape is loose:
//! every field is optional and tool-specific fields we do not understand
//! are ignored. Decoding collapses that looseness into the closed
//! [`ToolCall`] variant the authorizer dispatches on.

use crate::error::GuardError;
use serde::Deserialize;
use std::io::Read;

/// Raw hook record as it arrives on stdin.
#[derive(Debug, Deserialize)]
pub struct HookInput {
    /// Name of the tool the agent wants to invoke.
    pub tool_name: Option<String>,
    /// Tool-specific arguments; absent for tools that take none.
    #[serde(default)]
    pub tool_input: ToolInput,
}

/// The subset of tool arguments relevant to path authorization.
#[derive(Debug, Default, Deserialize)]
pub struct ToolInput {
    /// Shell command string (execute tools).
    pub command: Option<String>,
    /// Single target file path (write/edit tools).
    pub file_path: Option<String>,
    /// Batch edit entries (multi-edit tools).
    pub edits: Option<Vec<EditEntry>>,
}

/// One entry of a batch edit; only its target path matters here.
#[derive(Debug, Deserialize)]
pub struct EditEntry {
    /// Target file path of this edit.
    pub file_path: Option<String>,
}

/// A tool call, narrowed to the fields each kind needs.
///
/// Only the kinds that write, edit, or execute are security-relevant;
/// everything else maps to [`ToolCall::Other`] and is never checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    /// Single-target file write.
    Write {
        /// Target file path.
        file_path: Option<String>,
    },
    /// Single-target file edit.
    Edit {
        /// Target file path.
        file_path: Option<String>,
    },
    /// Batch edit with a primary target and per-edit targets.
    MultiEdit {
        /// Primary target file path.
        file_path: Option<String>,
        /// Target path of each edit, in order.
        edits: Vec<Option<String>>,
    },
    /// Shell command execution.
    Bash {
        /// The command string to be executed.
        command: Option<String>,
    },
    /// Any other tool kind; carries no paths to check.
    Other,
}

impl From<HookInput> for ToolCall {
    fn from(input: HookInput) -> Self {
        let ToolInput {
            command,
            file_path,
            edits,
        } = input.tool_input;

        match input.tool_name.as_deref() {
            Some("Write") => ToolCall::Write { file_path },
            Some("Edit") => ToolCall::Edit { file_path },
            Some("MultiEdit") => ToolCall::MultiEdit {
                file_path,
                edits: edits
                    .unwrap_or_default()
                    .into_iter()
                    .map(|entry| entry.file_path)
                    .collect(),
            },
            Some("Bash") => ToolCall::Bash { command },
            _ => ToolCall::Other,
        }
    }
}

/// Reads and decodes one hook record from the given reader.
///
/// # Errors
///
/// Returns [`GuardError::MalformedInput`] when the record is not valid
/// JSON or does not match the expected shape. The process boundary maps
/// that to a fail-open allow.
pub fn read_input<R: Read>(reader: R) -> Result<HookInput, GuardError> {
    serde_json::from_reader(reader).map_err(|e| GuardError::malformed_input(e.to_string()))
}
