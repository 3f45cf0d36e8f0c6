//! Dependency injection for GuiBackend.
//!
//! All dependencies are injected to maintain adapter neutrality.

use std::sync::Arc;

use syscheck_core::ports::SystemProbePort;
use syscheck_core::runner::TestRunner;

/// Dependencies required to construct a `GuiBackend`.
///
/// Fields are private to enforce construction via `GuiDeps::new()`, which
/// prevents partial injection.
pub struct GuiDeps {
    /// The check orchestrator shared by all front-ends.
    pub(crate) runner: TestRunner,
    /// System probe for status surfaces.
    pub(crate) probe: Arc<dyn SystemProbePort>,
}

impl GuiDeps {
    /// Create a new `GuiDeps` with all required dependencies.
    pub fn new(runner: TestRunner, probe: Arc<dyn SystemProbePort>) -> Self {
        Self { runner, probe }
    }

    /// Access the check orchestrator.
    pub fn runner(&self) -> &TestRunner {
        &self.runner
    }

    /// Access the system probe.
    pub fn probe(&self) -> &Arc<dyn SystemProbePort> {
        &self.probe
    }
}
