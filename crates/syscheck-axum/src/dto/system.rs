//! System status DTO.

use serde::{Deserialize, Serialize};
use syscheck_core::SystemSnapshot;

/// Environment snapshot DTO for the HTTP API.
///
/// This DTO ensures stable JSON field names (camelCase) for frontend
/// consumption. Unavailable attributes are omitted; clients treat a missing
/// key as "unknown" rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSnapshotDto {
    /// Platform/OS name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// OS/runtime version string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
    /// Total physical memory in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_memory_bytes: Option<u64>,
    /// Currently available memory in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_memory_bytes: Option<u64>,
    /// Number of logical CPUs.
    pub cpu_count: usize,
}

impl From<SystemSnapshot> for SystemSnapshotDto {
    fn from(snapshot: SystemSnapshot) -> Self {
        Self {
            platform: snapshot.platform,
            runtime_version: snapshot.runtime_version,
            total_memory_bytes: snapshot.total_memory_bytes,
            available_memory_bytes: snapshot.available_memory_bytes,
            cpu_count: snapshot.cpu_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_serialization_camel_case() {
        let dto = SystemSnapshotDto {
            platform: Some("TestOS".to_string()),
            runtime_version: Some("1.2.3".to_string()),
            total_memory_bytes: Some(8 * 1024 * 1024 * 1024),
            available_memory_bytes: Some(4 * 1024 * 1024 * 1024),
            cpu_count: 8,
        };

        let json = serde_json::to_value(&dto).unwrap();

        assert!(json.get("runtimeVersion").is_some());
        assert!(json.get("totalMemoryBytes").is_some());
        assert!(json.get("cpuCount").is_some());

        // Ensure snake_case fields don't exist
        assert!(json.get("runtime_version").is_none());
        assert!(json.get("total_memory_bytes").is_none());
    }

    #[test]
    fn dto_unknown_attributes_omitted() {
        let dto = SystemSnapshotDto {
            platform: None,
            runtime_version: None,
            total_memory_bytes: None,
            available_memory_bytes: None,
            cpu_count: 1,
        };

        let json = serde_json::to_string(&dto).unwrap();

        assert!(!json.contains("platform"));
        assert!(!json.contains("totalMemoryBytes"));
    }
}
