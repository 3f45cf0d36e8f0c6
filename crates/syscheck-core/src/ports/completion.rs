//! Completion delivery port for continuation-style callers.
//!
//! Blocking callers await `TestHandle::wait` directly. Callers that instead
//! register a continuation (a GUI event loop, a detached CLI run) implement
//! `CompletionSink`; the resolved report is pushed into the sink from the
//! worker task, and the sink marshals it onto whatever thread of control the
//! caller renders from.

use tokio::sync::mpsc;

use crate::handle::TestExecError;
use crate::report::TestReport;

/// Receiver of a resolved check run.
///
/// `completed` is called exactly once per run with the final report.
/// `rejected` fires only on a substrate fault (submission failure, worker
/// task lost) - the distinct condition collaborators must surface separately
/// from a `success=false` report.
pub trait CompletionSink: Send + Sync {
    /// Deliver the resolved report.
    fn completed(&self, report: TestReport);

    /// Deliver a substrate fault. Default implementation logs and drops.
    fn rejected(&self, fault: TestExecError) {
        tracing::error!("system test execution rejected: {fault}");
    }
}

/// Sink that discards reports. Useful as a default wiring.
pub struct NoopSink;

impl CompletionSink for NoopSink {
    fn completed(&self, _report: TestReport) {}
}

/// Sink backed by an unbounded channel.
///
/// The receiving half lives on the caller's own thread of control (a UI
/// event loop, a CLI main task). A channel that closes without delivering a
/// report signals a rejected run - `rejected` drops the sender after logging,
/// so `recv()` returning `None` is the rejection signal.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<TestReport>,
}

impl ChannelSink {
    /// Create a sink and the receiver the caller consumes it from.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TestReport>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl CompletionSink for ChannelSink {
    fn completed(&self, report: TestReport) {
        if self.tx.send(report).is_err() {
            tracing::debug!("completion receiver dropped before delivery");
        }
    }
}
