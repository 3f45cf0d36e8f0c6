//! The immutable outcome of a check run.

use chrono::{DateTime, Utc};
use std::fmt;

/// Verdict produced by every check run.
///
/// A `TestReport` is constructed by the orchestrator only - callers read it,
/// render it, or map it to a wire DTO, but never build or mutate one. Every
/// field is set exactly once at creation.
#[derive(Debug, Clone)]
pub struct TestReport {
    success: bool,
    message: String,
    subject: String,
    timestamp: DateTime<Utc>,
}

impl TestReport {
    /// Build a passing report. Crate-internal: only the runner creates reports.
    pub(crate) fn passed(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(true, subject, message)
    }

    /// Build a failing report. Crate-internal: only the runner creates reports.
    pub(crate) fn failed(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(false, subject, message)
    }

    fn new(success: bool, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
            subject: subject.into(),
            timestamp: Utc::now(),
        }
    }

    /// Whether the run passed.
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Human-readable verdict message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The name under test, echoed back unmodified (including empty input).
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Creation time, captured once at construction.
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for TestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            if self.success { "SUCCESS" } else { "FAILED" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_echo_construction_values() {
        let report = TestReport::failed("", "Please enter your name to run the test!");
        assert!(!report.success());
        assert_eq!(report.subject(), "");
        assert_eq!(report.message(), "Please enter your name to run the test!");
    }

    #[test]
    fn display_renders_verdict_and_message() {
        let passed = TestReport::passed("Alice", "all good");
        let rendered = passed.to_string();
        assert!(rendered.contains("SUCCESS: all good"), "got: {rendered}");
        assert!(rendered.starts_with('['), "got: {rendered}");

        let failed = TestReport::failed("Alice", "nope");
        assert!(failed.to_string().contains("FAILED: nope"));
    }

    #[test]
    fn timestamps_are_non_decreasing_in_call_order() {
        let first = TestReport::passed("a", "first");
        let second = TestReport::passed("b", "second");
        assert!(second.timestamp() >= first.timestamp());
    }
}
