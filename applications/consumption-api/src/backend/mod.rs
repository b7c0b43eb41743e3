pub mod client;
pub mod consumption;
pub mod settings;
pub mod temperature_log;

use async_trait::async_trait;

use crate::cache::StatsKey;
use crate::models::{ConsumptionStats, DeviceCorrectionSettings, TemperatureLogStats};

pub use client::{BackendClient, BackendError};

/// The parts of the heating backend the consumption service depends on.
#[async_trait]
pub trait ConsumptionBackend: Send + Sync {
    async fn consumption_stats(
        &self,
        key: &StatsKey,
    ) -> Result<Option<ConsumptionStats>, BackendError>;

    async fn device_settings(
        &self,
        account_id: &str,
        installation_id: &str,
        device_id: &str,
    ) -> Result<DeviceCorrectionSettings, BackendError>;

    async fn temperature_log_stats(&self) -> Result<TemperatureLogStats, BackendError>;
}

#[async_trait]
impl ConsumptionBackend for BackendClient {
    async fn consumption_stats(
        &self,
        key: &StatsKey,
    ) -> Result<Option<ConsumptionStats>, BackendError> {
        self.get_consumption_stats(key).await
    }

    async fn device_settings(
        &self,
        account_id: &str,
        installation_id: &str,
        device_id: &str,
    ) -> Result<DeviceCorrectionSettings, BackendError> {
        self.get_device_settings(account_id, installation_id, device_id)
            .await
    }

    async fn temperature_log_stats(&self) -> Result<TemperatureLogStats, BackendError> {
        self.get_temperature_log_stats().await
    }
}
