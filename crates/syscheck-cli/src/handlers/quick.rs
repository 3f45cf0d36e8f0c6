//! Quick test command handler.

use crate::bootstrap::CliContext;
use crate::presentation;

/// Execute the quick validation test. Returns the verdict's success flag.
pub fn execute(ctx: &CliContext, name: &str, verbose: bool) -> bool {
    println!("⚡ Running quick system test...");

    let report = ctx.runner.run_quick_test(name);
    if verbose {
        presentation::print_report_verbose(&report);
    }
    presentation::print_report(&report, "Quick test");

    report.success()
}
