use super::client::{BackendClient, BackendError};
use crate::models::TemperatureLogStats;

impl BackendClient {
    /// Snapshot logging status, used to decide whether consumption is shown.
    pub async fn get_temperature_log_stats(&self) -> Result<TemperatureLogStats, BackendError> {
        self.get("/api/temperature-log/stats", &[]).await
    }
}
