//! Diagnostics operations for the GUI backend.

use std::sync::Arc;

use syscheck_core::ports::CompletionSink;
use syscheck_core::{SystemSnapshot, TestReport};

use crate::deps::GuiDeps;
use crate::error::GuiError;

/// Diagnostics operations handler.
pub struct DiagnosticsOps<'a> {
    deps: &'a GuiDeps,
}

impl<'a> DiagnosticsOps<'a> {
    pub fn new(deps: &'a GuiDeps) -> Self {
        Self { deps }
    }

    /// Run the quick validation test on the caller's thread.
    pub fn quick(&self, name: &str) -> TestReport {
        self.deps.runner().run_quick_test(name)
    }

    /// Run the full system test and block this task until it resolves.
    pub async fn system(&self, name: &str) -> Result<TestReport, GuiError> {
        self.deps
            .runner()
            .run_system_test(name)
            .wait()
            .await
            .map_err(GuiError::from)
    }

    /// Start the full system test and deliver the verdict through `sink`.
    ///
    /// Returns immediately. A UI event loop implements the sink by marshaling
    /// the report onto its own rendering thread before touching any widget
    /// state.
    pub fn spawn_system(&self, name: &str, sink: Arc<dyn CompletionSink>) {
        self.deps.runner().run_system_test(name).forward_to(sink);
    }

    /// Descriptive snapshot of the probed environment for status displays.
    pub fn snapshot(&self) -> SystemSnapshot {
        self.deps.probe().snapshot()
    }
}
