//! Async handle for an in-flight check run.
//!
//! A `TestHandle` moves through `Pending` (worker task running) to either
//! `Resolved` (a `TestReport`, surfaced by `wait`) or `Rejected` (a
//! `TestExecError`). Domain-level failures always resolve - rejection is
//! reserved for the execution substrate itself.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::ports::CompletionSink;
use crate::report::TestReport;

/// Substrate-level fault: the run could not be executed at all.
///
/// Never produced by a failing check - those resolve into a `TestReport`
/// with `success == false`.
#[derive(Debug, thiserror::Error)]
pub enum TestExecError {
    /// The run could not be submitted (no async runtime available).
    #[error("task submission failed: {0}")]
    Submit(String),

    /// The worker task was aborted before resolving.
    #[error("system test task was aborted")]
    Aborted,

    /// The worker task panicked.
    #[error("system test task panicked: {0}")]
    Panicked(String),
}

enum HandleState {
    Running(JoinHandle<TestReport>),
    Rejected(TestExecError),
}

/// Handle to one submitted system-test run.
///
/// Resolves to exactly one `TestReport`. `cancel` requests cooperative
/// cancellation: the run observes it at its single suspension point and
/// resolves with an interruption failure rather than leaving the handle
/// unresolved. Once resolved, the report is an immutable value owned by the
/// caller.
pub struct TestHandle {
    state: HandleState,
    cancel: CancellationToken,
}

impl TestHandle {
    pub(crate) fn spawned(task: JoinHandle<TestReport>, cancel: CancellationToken) -> Self {
        Self {
            state: HandleState::Running(task),
            cancel,
        }
    }

    pub(crate) fn rejected(fault: TestExecError) -> Self {
        Self {
            state: HandleState::Rejected(fault),
            cancel: CancellationToken::new(),
        }
    }

    /// Request cooperative cancellation of the run.
    ///
    /// Observable only while the run is suspended in its liveness check;
    /// cancelling a run that already resolved is a no-op.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Await the verdict.
    ///
    /// `Ok` carries the resolved report, including all domain-level failures
    /// and interruption. `Err` means the substrate failed: submission was
    /// impossible, or the worker task was lost.
    pub async fn wait(self) -> Result<TestReport, TestExecError> {
        match self.state {
            HandleState::Running(task) => task.await.map_err(|e| {
                if e.is_panic() {
                    TestExecError::Panicked(e.to_string())
                } else {
                    TestExecError::Aborted
                }
            }),
            HandleState::Rejected(fault) => Err(fault),
        }
    }

    /// Register a continuation instead of awaiting in place.
    ///
    /// Spawns a forwarding task that resolves the handle and pushes the
    /// outcome into `sink`. When no runtime is available the sink's
    /// `rejected` fires synchronously on the caller's thread.
    pub fn forward_to(self, sink: Arc<dyn CompletionSink>) {
        match Handle::try_current() {
            Ok(rt) => {
                rt.spawn(async move {
                    match self.wait().await {
                        Ok(report) => sink.completed(report),
                        Err(fault) => sink.rejected(fault),
                    }
                });
            }
            Err(e) => sink.rejected(TestExecError::Submit(e.to_string())),
        }
    }
}
