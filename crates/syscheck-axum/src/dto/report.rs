//! Test verdict DTO.

use serde::{Deserialize, Serialize};
use syscheck_core::TestReport;

/// Verdict DTO for the HTTP API.
///
/// The field names are the wire contract: `success`, `message`, `name`,
/// `timestamp` (RFC 3339).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReportDto {
    pub success: bool,
    pub message: String,
    pub name: String,
    pub timestamp: String,
}

impl From<TestReport> for TestReportDto {
    fn from(report: TestReport) -> Self {
        Self {
            success: report.success(),
            message: report.message().to_string(),
            name: report.subject().to_string(),
            timestamp: report.timestamp().to_rfc3339(),
        }
    }
}
