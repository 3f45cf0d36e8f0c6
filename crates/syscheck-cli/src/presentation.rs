//! Terminal rendering helpers.

use syscheck_core::TestReport;

/// Render a verdict to stdout.
///
/// `kind` names the run for the closing line, e.g. "Quick test".
pub fn print_report(report: &TestReport, kind: &str) {
    if report.success() {
        println!("✅ {}", report.message());
        println!("🎉 {kind} completed successfully!");
    } else {
        println!("❌ {}", report.message());
        println!("💥 {kind} failed!");
    }
}

/// Render the timestamped verdict line (verbose mode).
pub fn print_report_verbose(report: &TestReport) {
    println!("{report}");
}

/// Format a byte count with a binary-unit suffix.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_below_one_kib_render_raw() {
        assert_eq!(format_bytes(512), "512 B");
    }

    #[test]
    fn bytes_render_with_binary_units() {
        assert_eq!(format_bytes(64 * 1024 * 1024), "64.0 MiB");
        assert_eq!(format_bytes(8 * 1024 * 1024 * 1024), "8.0 GiB");
    }

    #[test]
    fn fractions_round_to_one_decimal() {
        assert_eq!(format_bytes(1536), "1.5 KiB");
    }
}
