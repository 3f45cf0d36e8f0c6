//! System probe port for environment attribute reads.
//!
//! This port abstracts active system probing (OS identification, memory
//! queries, temp-dir resolution) from the core pipeline. The concrete
//! implementation lives in `syscheck-runtime`; tests inject mocks.
//!
//! # Design Notes
//!
//! - Core owns the trait and the `SystemSnapshot` type (pure)
//! - Runtime owns `DefaultSystemProbe` which performs actual queries
//! - Adapters inject the probe at their composition root

use std::path::PathBuf;

use crate::system::SystemSnapshot;

#[cfg(test)]
use mockall::automock;

/// Port for reading descriptive attributes of the host environment.
///
/// Every method returns `Option`: an unavailable attribute is a state the
/// check pipeline observes and reports, not an error to propagate. All
/// methods are cheap, synchronous reads.
#[cfg_attr(test, automock)]
pub trait SystemProbePort: Send + Sync {
    /// Platform/OS name, if it can be determined.
    fn platform_name(&self) -> Option<String>;

    /// OS/runtime version string, if it can be determined.
    fn runtime_version(&self) -> Option<String>;

    /// Total physical memory in bytes.
    fn total_memory_bytes(&self) -> Option<u64>;

    /// Currently available memory in bytes.
    fn available_memory_bytes(&self) -> Option<u64>;

    /// Number of logical CPUs.
    fn cpu_count(&self) -> usize;

    /// Temporary-storage location configured for this process.
    fn temp_dir(&self) -> Option<PathBuf>;

    /// Assemble a full descriptive snapshot for status surfaces.
    fn snapshot(&self) -> SystemSnapshot {
        SystemSnapshot {
            platform: self.platform_name(),
            runtime_version: self.runtime_version(),
            total_memory_bytes: self.total_memory_bytes(),
            available_memory_bytes: self.available_memory_bytes(),
            cpu_count: self.cpu_count(),
        }
    }
}
