//! `DefaultSystemProbe` - host environment reads backed by `sysinfo`.

use std::path::PathBuf;

use sysinfo::System;

use syscheck_core::ports::SystemProbePort;

/// Probe implementation that queries the real host.
///
/// Stateless: each memory read refreshes a fresh `sysinfo::System`, so
/// concurrent callers never contend on shared probe state.
#[derive(Debug, Default)]
pub struct DefaultSystemProbe;

impl DefaultSystemProbe {
    /// Create a new probe.
    pub const fn new() -> Self {
        Self
    }
}

impl SystemProbePort for DefaultSystemProbe {
    fn platform_name(&self) -> Option<String> {
        System::name().or_else(|| {
            let os = std::env::consts::OS;
            (!os.is_empty()).then(|| os.to_string())
        })
    }

    fn runtime_version(&self) -> Option<String> {
        System::os_version().or_else(System::kernel_version)
    }

    fn total_memory_bytes(&self) -> Option<u64> {
        let mut sys = System::new();
        sys.refresh_memory();
        let total = sys.total_memory();
        if total == 0 {
            tracing::warn!("sysinfo reported zero total memory");
            return None;
        }
        Some(total)
    }

    fn available_memory_bytes(&self) -> Option<u64> {
        let mut sys = System::new();
        sys.refresh_memory();
        let available = sys.available_memory();
        (available > 0).then_some(available)
    }

    fn cpu_count(&self) -> usize {
        num_cpus::get()
    }

    fn temp_dir(&self) -> Option<PathBuf> {
        let dir = std::env::temp_dir();
        (!dir.as_os_str().is_empty()).then_some(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_and_version_are_readable_on_a_real_host() {
        let probe = DefaultSystemProbe::new();
        let platform = probe.platform_name().expect("platform name");
        assert!(!platform.is_empty());
        let version = probe.runtime_version().expect("runtime version");
        assert!(!version.is_empty());
    }

    #[test]
    fn memory_reads_are_positive() {
        let probe = DefaultSystemProbe::new();
        assert!(probe.total_memory_bytes().expect("total memory") > 0);
    }

    #[test]
    fn cpu_count_is_at_least_one() {
        let probe = DefaultSystemProbe::new();
        assert!(probe.cpu_count() >= 1);
    }

    #[test]
    fn temp_dir_is_configured() {
        let probe = DefaultSystemProbe::new();
        let dir = probe.temp_dir().expect("temp dir");
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn snapshot_carries_probe_attributes() {
        let snapshot = DefaultSystemProbe::new().snapshot();
        assert!(snapshot.platform.is_some());
        assert!(snapshot.total_memory_bytes.unwrap_or(0) > 0);
        assert!(snapshot.cpu_count >= 1);
    }
}
