use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cache::StatsKey;
use crate::domain::Period;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsQuery {
    pub installation_id: String,
    pub gateway_serial: String,
    pub device_id: String,
    #[serde(default)]
    pub period: Period,
    pub date: Option<NaiveDate>,
}

impl From<StatsQuery> for StatsKey {
    fn from(q: StatsQuery) -> Self {
        StatsKey {
            installation_id: q.installation_id,
            gateway_serial: q.gateway_serial,
            device_id: q.device_id,
            period: q.period,
            date: q.date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub total_snapshots: u64,
}
