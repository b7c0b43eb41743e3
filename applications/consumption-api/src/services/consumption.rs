use std::sync::Arc;

use chrono::Utc;

use crate::backend::ConsumptionBackend;
use crate::cache::{Completion, CorrectedStats, StatsCache, StatsKey};
use crate::domain::apply_power_correction;
use crate::error::{AppError, Result};
use crate::models::{ConsumptionView, DeviceCorrectionSettings, TemperatureLogStats};

/// Fetches, corrects and caches consumption statistics for the dashboard.
#[derive(Clone)]
pub struct ConsumptionService {
    backend: Arc<dyn ConsumptionBackend>,
    cache: StatsCache,
    account_id: String,
    defaults: DeviceCorrectionSettings,
}

impl ConsumptionService {
    pub fn new(
        backend: Arc<dyn ConsumptionBackend>,
        account_id: impl Into<String>,
        defaults: DeviceCorrectionSettings,
    ) -> Self {
        Self {
            backend,
            cache: StatsCache::new(),
            account_id: account_id.into(),
            defaults,
        }
    }

    pub fn cache(&self) -> &StatsCache {
        &self.cache
    }

    /// Fetch fresh statistics for `key`, correct them with the device's
    /// power correction factor and cache the result.
    ///
    /// If a newer request for the same key was issued while this one was in
    /// flight, this response is not cached. The caller gets the newer cached
    /// result when one has already been stored, and this response otherwise.
    pub async fn load_stats(&self, key: StatsKey) -> Result<ConsumptionView> {
        let token = self.cache.begin(&key).await;

        let entry = match self.fetch_corrected(&key).await {
            Ok(entry) => entry,
            Err(e) => {
                self.cache.abandon(&token).await;
                return Err(e);
            }
        };

        match self.cache.complete(&token, entry.clone()).await {
            Completion::Stored => {
                tracing::debug!(
                    device_id = %key.device_id,
                    period = %key.period,
                    factor = entry.settings.power_correction_factor,
                    "Cached corrected consumption stats"
                );
                Ok(ConsumptionView::build(&key, &entry))
            }
            Completion::Superseded(Some(newer)) => Ok(ConsumptionView::build(&key, &newer)),
            Completion::Superseded(None) => Ok(ConsumptionView::build(&key, &entry)),
        }
    }

    async fn fetch_corrected(&self, key: &StatsKey) -> Result<CorrectedStats> {
        let (stats, settings) = tokio::join!(
            self.backend.consumption_stats(key),
            self.backend
                .device_settings(&self.account_id, &key.installation_id, &key.device_id),
        );

        let raw = stats?;
        let settings = settings.unwrap_or_else(|e| {
            tracing::warn!(
                device_id = %key.device_id,
                error = %e,
                "Device settings unavailable, using defaults"
            );
            self.defaults
        });

        let corrected = apply_power_correction(raw.as_ref(), settings.power_correction_factor)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No consumption statistics for device {} ({})",
                    key.device_id, key.period
                ))
            })?
            .into_owned();

        Ok(CorrectedStats {
            stats: corrected,
            settings,
            fetched_at: Utc::now(),
        })
    }

    /// Last successfully loaded statistics for `key`, without a fetch.
    pub async fn cached_stats(&self, key: &StatsKey) -> Result<ConsumptionView> {
        self.cache
            .get(key)
            .await
            .map(|entry| ConsumptionView::build(key, &entry))
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No cached statistics for device {} ({})",
                    key.device_id, key.period
                ))
            })
    }

    /// Snapshot logging status; the consumption tile is only shown when
    /// logging has produced data.
    pub async fn consumption_available(&self) -> Result<TemperatureLogStats> {
        Ok(self.backend.temperature_log_stats().await?)
    }
}
