//! CLI bootstrap - context construction for command handlers.
//!
//! This is the only place where infrastructure is wired together for
//! terminal use. Handlers receive a `CliContext` and never construct probes
//! or runners themselves.

use std::sync::Arc;

use syscheck_core::ports::SystemProbePort;
use syscheck_core::{CheckConfig, TestRunner};
use syscheck_runtime::DefaultSystemProbe;

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Check pipeline tunables.
    pub check: CheckConfig,
}

impl CliConfig {
    /// Create config with defaults.
    pub fn with_defaults() -> Self {
        Self::default()
    }
}

/// Initialized services for command handlers.
pub struct CliContext {
    /// The check orchestrator.
    pub runner: TestRunner,
    /// System probe for status display.
    pub probe: Arc<dyn SystemProbePort>,
}

/// Bootstrap the CLI context (composition root).
pub fn bootstrap(config: CliConfig) -> CliContext {
    let probe: Arc<dyn SystemProbePort> = Arc::new(DefaultSystemProbe::new());
    let runner = TestRunner::new(Arc::clone(&probe), config.check);
    CliContext { runner, probe }
}
