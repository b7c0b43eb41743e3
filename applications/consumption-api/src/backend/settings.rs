use serde::Deserialize;

use super::client::{ensure_success, BackendClient, BackendError};
use crate::models::settings::{DEFAULT_ELECTRICITY_PRICE, DEFAULT_POWER_CORRECTION_FACTOR};
use crate::models::DeviceCorrectionSettings;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeviceSettingsEnvelope {
    success: bool,
    #[serde(default)]
    compressor_power_correction_factor: Option<f64>,
    #[serde(default)]
    electricity_price: Option<f64>,
    #[serde(default)]
    error: Option<String>,
}

impl BackendClient {
    /// Correction settings of a device, with defaults for anything the
    /// backend has not stored.
    pub async fn get_device_settings(
        &self,
        account_id: &str,
        installation_id: &str,
        device_id: &str,
    ) -> Result<DeviceCorrectionSettings, BackendError> {
        let query = [
            ("accountId", account_id.to_string()),
            ("installationId", installation_id.to_string()),
            ("deviceId", device_id.to_string()),
        ];

        let envelope: DeviceSettingsEnvelope =
            self.get("/api/device-settings/get", &query).await?;
        ensure_success(envelope.success, envelope.error)?;

        Ok(DeviceCorrectionSettings {
            power_correction_factor: envelope
                .compressor_power_correction_factor
                .unwrap_or(DEFAULT_POWER_CORRECTION_FACTOR),
            electricity_price: envelope
                .electricity_price
                .unwrap_or(DEFAULT_ELECTRICITY_PRICE),
        })
    }
}
