//! The check orchestrator: quick validation and the full system test.
//!
//! `TestRunner` is a pure orchestrator - it holds an injected probe and a
//! config, no per-invocation state, and is safe to invoke concurrently from
//! any number of callers.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::handle::{TestExecError, TestHandle};
use crate::ports::SystemProbePort;
use crate::report::TestReport;

/// Minimum memory ceiling the resource check accepts (64 MiB).
pub const MIN_MEMORY_BYTES: u64 = 64 * 1024 * 1024;

/// Tunables for the full check sequence.
///
/// Constructed at a composition root and passed in; nothing here is read
/// from process-wide state at run time.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Memory threshold for the resource availability check.
    pub min_memory_bytes: u64,
    /// Simulated processing duration for the scheduler liveness check.
    pub liveness_delay: Duration,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            min_memory_bytes: MIN_MEMORY_BYTES,
            liveness_delay: Duration::from_millis(250),
        }
    }
}

/// Stateless check orchestrator shared by all front-ends.
///
/// `run_quick_test` validates on the caller's thread and never yields.
/// `run_system_test` submits the full sequence to the ambient Tokio runtime
/// and returns a [`TestHandle`]. Cloning is cheap (the probe is shared).
#[derive(Clone)]
pub struct TestRunner {
    probe: Arc<dyn SystemProbePort>,
    config: CheckConfig,
}

impl TestRunner {
    /// Create a runner around the given probe and config.
    pub fn new(probe: Arc<dyn SystemProbePort>, config: CheckConfig) -> Self {
        Self { probe, config }
    }

    /// Run the minimal validation test synchronously.
    ///
    /// Pure with respect to pass/fail classification; the only side effect
    /// is the report's timestamp capture.
    pub fn run_quick_test(&self, name: &str) -> TestReport {
        if let Some(msg) = validate_name(name) {
            return TestReport::failed(name, msg);
        }
        TestReport::passed(
            name,
            format!("Hello {name}! Your system is working correctly."),
        )
    }

    /// Submit the full check sequence and return its handle.
    ///
    /// The handle resolves to exactly one report; check failures and
    /// interruption resolve with `success == false`. Only a substrate fault
    /// rejects - here, calling without an ambient Tokio runtime.
    pub fn run_system_test(&self, name: impl Into<String>) -> TestHandle {
        let name = name.into();
        let probe = Arc::clone(&self.probe);
        let config = self.config.clone();
        let cancel = CancellationToken::new();
        let observed = cancel.clone();

        match Handle::try_current() {
            Ok(rt) => {
                let task = rt.spawn(run_checks(name, probe, config, observed));
                TestHandle::spawned(task, cancel)
            }
            Err(e) => TestHandle::rejected(TestExecError::Submit(e.to_string())),
        }
    }
}

/// Shared name rule: non-blank, at least 2 characters after trimming.
fn validate_name(name: &str) -> Option<&'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Please enter your name to run the test!");
    }
    if trimmed.chars().count() < 2 {
        return Some("Name must be at least 2 characters long");
    }
    None
}

/// The full sequence. Checks run strictly in order and the first failure
/// resolves the run - later checks are never evaluated.
async fn run_checks(
    name: String,
    probe: Arc<dyn SystemProbePort>,
    config: CheckConfig,
    cancel: CancellationToken,
) -> TestReport {
    // Check 1: input validation
    if let Some(msg) = validate_name(&name) {
        return TestReport::failed(name.as_str(), msg);
    }

    // Check 2: system properties
    tracing::debug!(subject = %name, "reading system properties");
    let (Some(platform), Some(runtime)) = (probe.platform_name(), probe.runtime_version()) else {
        return TestReport::failed(name.as_str(), "Unable to read system properties");
    };

    // Check 3: memory availability
    tracing::debug!(threshold = config.min_memory_bytes, "checking memory ceiling");
    match probe.total_memory_bytes() {
        Some(total) if total >= config.min_memory_bytes => {}
        _ => return TestReport::failed(name.as_str(), "Insufficient memory available"),
    }

    // Check 4: scheduler liveness - the run's single suspension point and
    // the only place cancellation is observable
    tracing::debug!(delay = ?config.liveness_delay, "exercising scheduler");
    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            return TestReport::failed(name.as_str(), "Threading test interrupted");
        }
        () = tokio::time::sleep(config.liveness_delay) => {}
    }

    // Check 5: filesystem access
    tracing::debug!("resolving temporary directory");
    match probe.temp_dir() {
        Some(dir) if !dir.as_os_str().is_empty() => {}
        _ => return TestReport::failed(name.as_str(), "Unable to access temporary directory"),
    }

    let message = format!("System test passed for user '{name}' on {platform} with {runtime}");
    TestReport::passed(name, message)
}
