use serde::{Deserialize, Serialize};

/// Snapshot logging status of the backend; consumption figures only exist
/// when logging is enabled and has produced snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemperatureLogStats {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub total_snapshots: u64,
}

impl TemperatureLogStats {
    pub fn has_consumption_data(&self) -> bool {
        self.enabled && self.total_snapshots > 0
    }
}
