//! GuiBackend - the unified GUI orchestration facade.
//!
//! This is the main entry point for all GUI operations. Both a desktop
//! shell's event handlers and Axum handlers delegate to this facade.

use std::sync::Arc;

use syscheck_core::ports::CompletionSink;
use syscheck_core::{SystemSnapshot, TestReport};

use crate::deps::GuiDeps;
use crate::diagnostics::DiagnosticsOps;
use crate::error::GuiError;

/// Unified GUI backend facade.
///
/// Provides a consistent API for GUI operations, used by the web adapter
/// and any desktop shell. All operations are delegated to specialized ops
/// modules.
///
/// # Construction
///
/// ```ignore
/// let deps = GuiDeps::new(runner, probe);
/// let backend = GuiBackend::new(deps);
/// ```
pub struct GuiBackend {
    deps: GuiDeps,
}

impl GuiBackend {
    /// Create a new GUI backend with the provided dependencies.
    pub fn new(deps: GuiDeps) -> Self {
        Self { deps }
    }

    // Accessor for ops module - created on demand to avoid Arc<&T> issues
    fn diagnostics_ops(&self) -> DiagnosticsOps<'_> {
        DiagnosticsOps::new(&self.deps)
    }

    /// Run the quick validation test.
    pub fn quick_test(&self, name: &str) -> TestReport {
        self.diagnostics_ops().quick(name)
    }

    /// Run the full system test, blocking this task until the verdict.
    pub async fn system_test(&self, name: &str) -> Result<TestReport, GuiError> {
        self.diagnostics_ops().system(name).await
    }

    /// Start the full system test, delivering the verdict through `sink`.
    pub fn spawn_system_test(&self, name: &str, sink: Arc<dyn CompletionSink>) {
        self.diagnostics_ops().spawn_system(name, sink);
    }

    /// Snapshot of the probed environment for status displays.
    pub fn system_snapshot(&self) -> SystemSnapshot {
        self.diagnostics_ops().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use syscheck_core::{CheckConfig, TestRunner};
    use syscheck_core::ports::ChannelSink;
    use syscheck_runtime::DefaultSystemProbe;

    fn backend() -> GuiBackend {
        let probe = Arc::new(DefaultSystemProbe::new());
        let runner = TestRunner::new(
            probe.clone(),
            CheckConfig {
                liveness_delay: Duration::from_millis(10),
                ..CheckConfig::default()
            },
        );
        GuiBackend::new(GuiDeps::new(runner, probe))
    }

    #[test]
    fn quick_test_delegates_to_runner() {
        let report = backend().quick_test("Al");
        assert!(report.success());
        assert!(report.message().contains("Al"));
    }

    #[tokio::test]
    async fn system_test_resolves_on_a_healthy_host() {
        let report = backend().system_test("Bob").await.expect("resolved");
        assert!(report.success(), "got: {}", report.message());
        assert!(report.message().contains("Bob"));
    }

    #[tokio::test]
    async fn spawn_system_test_delivers_through_sink() {
        let (sink, mut rx) = ChannelSink::channel();
        backend().spawn_system_test("Bob", Arc::new(sink));
        let report = rx.recv().await.expect("report delivered");
        assert!(report.success());
    }

    #[tokio::test]
    async fn invalid_name_is_a_verdict_not_an_error() {
        let report = backend().system_test("").await.expect("resolved");
        assert!(!report.success());
        assert_eq!(report.message(), "Please enter your name to run the test!");
    }

    #[test]
    fn snapshot_reports_cpu_count() {
        assert!(backend().system_snapshot().cpu_count >= 1);
    }
}
