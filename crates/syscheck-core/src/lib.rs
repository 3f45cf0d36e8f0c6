//! Core domain types and orchestration for syscheck.
//!
//! This crate owns the check pipeline (`TestRunner`), its immutable outcome
//! (`TestReport`), and the port traits adapters implement. It contains no
//! adapter-specific code: probing is injected through `SystemProbePort`, and
//! continuation-style delivery goes through `CompletionSink`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod handle;
pub mod ports;
pub mod report;
pub mod runner;
pub mod system;

// Re-export commonly used types for convenience
pub use handle::{TestExecError, TestHandle};
pub use ports::{ChannelSink, CompletionSink, NoopSink, SystemProbePort};
pub use report::TestReport;
pub use runner::{CheckConfig, MIN_MEMORY_BYTES, TestRunner};
pub use system::SystemSnapshot;
