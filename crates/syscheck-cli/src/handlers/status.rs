//! Status command handler.

use syscheck_core::ports::SystemProbePort;

use crate::bootstrap::CliContext;
use crate::presentation::format_bytes;

/// Print a descriptive snapshot of the probed environment.
pub fn execute(ctx: &CliContext) {
    let snapshot = ctx.probe.snapshot();

    let fmt_mem = |bytes: Option<u64>| bytes.map_or_else(|| "unknown".to_string(), format_bytes);

    println!("Environment snapshot");
    println!("====================");
    println!(
        "  Platform:         {}",
        snapshot.platform.as_deref().unwrap_or("unknown")
    );
    println!(
        "  Version:          {}",
        snapshot.runtime_version.as_deref().unwrap_or("unknown")
    );
    println!("  Total memory:     {}", fmt_mem(snapshot.total_memory_bytes));
    println!(
        "  Available memory: {}",
        fmt_mem(snapshot.available_memory_bytes)
    );
    println!("  CPUs:             {}", snapshot.cpu_count);
}
