use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::domain::Period;
use crate::models::{ConsumptionStats, DeviceCorrectionSettings};

/// Identifies one consumption request: which device, which period.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatsKey {
    pub installation_id: String,
    pub gateway_serial: String,
    pub device_id: String,
    pub period: Period,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Handed out when a fetch starts; only the newest token for a key may
/// store its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestToken {
    key: StatsKey,
    generation: u64,
}

/// Stats after the device's correction has been applied, with the settings
/// that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectedStats {
    pub stats: ConsumptionStats,
    pub settings: DeviceCorrectionSettings,
    pub fetched_at: DateTime<Utc>,
}

/// Outcome of [`StatsCache::complete`].
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Stored,
    /// A newer fetch was started. Carries the cached entry when that entry
    /// comes from a newer fetch than the completing one.
    Superseded(Option<Arc<CorrectedStats>>),
}

#[derive(Debug, Default)]
struct Slot {
    latest: u64,
    /// Generation that produced `entry`
    stored: u64,
    entry: Option<Arc<CorrectedStats>>,
}

/// In-memory store of corrected stats, last issued request wins.
#[derive(Debug, Clone, Default)]
pub struct StatsCache {
    slots: Arc<RwLock<HashMap<StatsKey, Slot>>>,
    /// Shared by all keys so a forgotten key never reuses a generation
    generations: Arc<AtomicU64>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new fetch for `key`, superseding any fetch still in flight.
    pub async fn begin(&self, key: &StatsKey) -> RequestToken {
        let mut slots = self.slots.write().await;
        let slot = slots.entry(key.clone()).or_default();
        slot.latest = self.generations.fetch_add(1, Ordering::Relaxed) + 1;

        RequestToken {
            key: key.clone(),
            generation: slot.latest,
        }
    }

    /// Store the result of the fetch identified by `token`.
    ///
    /// When a newer fetch for the same key has been started since, `stats`
    /// is dropped and the cache is left as it is.
    pub async fn complete(&self, token: &RequestToken, stats: CorrectedStats) -> Completion {
        let mut slots = self.slots.write().await;
        let Some(slot) = slots.get_mut(&token.key) else {
            return Completion::Superseded(None);
        };

        if token.generation != slot.latest {
            tracing::debug!(
                device_id = %token.key.device_id,
                period = %token.key.period,
                generation = token.generation,
                latest = slot.latest,
                "Dropping stale consumption response"
            );
            let newer = slot
                .entry
                .clone()
                .filter(|_| slot.stored > token.generation);
            return Completion::Superseded(newer);
        }

        slot.stored = token.generation;
        slot.entry = Some(Arc::new(stats));
        Completion::Stored
    }

    /// End the fetch identified by `token` without a result.
    ///
    /// A key that never stored anything is forgotten once its latest fetch
    /// is abandoned.
    pub async fn abandon(&self, token: &RequestToken) {
        let mut slots = self.slots.write().await;
        let forget = slots
            .get(&token.key)
            .is_some_and(|slot| slot.latest == token.generation && slot.entry.is_none());
        if forget {
            slots.remove(&token.key);
        }
    }

    pub async fn get(&self, key: &StatsKey) -> Option<Arc<CorrectedStats>> {
        let slots = self.slots.read().await;
        slots.get(key).and_then(|slot| slot.entry.clone())
    }

    pub async fn len(&self) -> usize {
        let slots = self.slots.read().await;
        slots.values().filter(|slot| slot.entry.is_some()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Keys with a slot, stored or in flight.
    #[cfg(test)]
    pub(crate) async fn tracked_keys(&self) -> usize {
        self.slots.read().await.len()
    }
}
