//! Pure domain types describing the probed environment.
//!
//! Active probing lives in `syscheck-runtime`; core only defines the shape
//! the probe reports and the status surfaces consume.

/// Descriptive snapshot of the host environment.
///
/// All attributes are optional because "unavailable" is a legitimate state
/// the checks must be able to observe. Consumers render missing attributes
/// as unknown rather than treating them as errors.
#[derive(Debug, Clone)]
pub struct SystemSnapshot {
    /// Platform/OS name (e.g. "Ubuntu", "macOS").
    pub platform: Option<String>,
    /// OS/runtime version string.
    pub runtime_version: Option<String>,
    /// Total physical memory in bytes.
    pub total_memory_bytes: Option<u64>,
    /// Currently available memory in bytes.
    pub available_memory_bytes: Option<u64>,
    /// Number of logical CPUs.
    pub cpu_count: usize,
}
