//! Semantic error types for GUI operations.
//!
//! These errors are domain-focused, not HTTP-focused. Adapters map
//! `GuiError` to their specific error types (HTTP status codes, dialog
//! text).

use std::fmt;

use syscheck_core::TestExecError;

/// Semantic errors for GUI backend operations.
///
/// Check failures are never errors - they arrive as a `TestReport` with
/// `success == false`. `GuiError` covers only the substrate-level faults a
/// collaborator must surface distinctly.
#[derive(Debug, Clone)]
pub enum GuiError {
    /// The execution substrate could not run the request (503-ish).
    Unavailable(String),

    /// Unexpected internal error - should be refined over time.
    Internal(String),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "service unavailable: {msg}"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for GuiError {}

impl From<TestExecError> for GuiError {
    fn from(err: TestExecError) -> Self {
        match err {
            TestExecError::Submit(msg) => {
                Self::Unavailable(format!("test execution could not be submitted: {msg}"))
            }
            other => Self::Internal(other.to_string()),
        }
    }
}
