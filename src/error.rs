//! Error types for the policy gate.
//!
//! There are no fatal errors in this crate: every failure path resolves to
//! a decision, defaulting to allow whenever the gate cannot confidently
//! determine the contrary. These types exist so the fail-open policy is
//! visible at the call sites that apply it, rather than hidden in implicit
//! unwinding.

use std::fmt;

/// Errors that can occur while gating a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// The hook record could not be decoded into a tool call.
    MalformedInput {
        /// Why decoding failed.
        reason: String,
    },
    /// An unexpected fault occurred during evaluation.
    Internal {
        /// Description of the fault.
        message: String,
    },
}

impl GuardError {
    /// Creates a malformed-input error.
    #[must_use]
    pub fn malformed_input(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Creates an internal fault error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput { reason } => {
                write!(f, "malformed hook input: {reason}")
            }
            Self::Internal { message } => {
                write!(f, "internal fault: {message}")
            }
        }
    }
}

impl std::error::Error for GuardError {}
