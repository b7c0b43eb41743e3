use serde::Deserialize;

use super::client::{ensure_success, BackendClient, BackendError};
use crate::cache::StatsKey;
use crate::models::ConsumptionStats;

#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    success: bool,
    #[serde(default)]
    stats: Option<ConsumptionStats>,
    #[serde(default)]
    error: Option<String>,
}

impl BackendClient {
    /// Raw, uncorrected consumption statistics for one device and period.
    pub async fn get_consumption_stats(
        &self,
        key: &StatsKey,
    ) -> Result<Option<ConsumptionStats>, BackendError> {
        let mut query = vec![
            ("installationId", key.installation_id.clone()),
            ("gatewaySerial", key.gateway_serial.clone()),
            ("deviceId", key.device_id.clone()),
            ("period", key.period.to_string()),
        ];
        if let Some(date) = key.date {
            query.push(("date", date.format("%Y-%m-%d").to_string()));
        }

        let envelope: StatsEnvelope = self.get("/api/consumption/stats", &query).await?;
        ensure_success(envelope.success, envelope.error)?;
        Ok(envelope.stats)
    }
}
