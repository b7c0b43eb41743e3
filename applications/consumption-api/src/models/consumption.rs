use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Consumption figures for one hour or one day of a reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketStat {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub electricity_kwh: f64,
    #[serde(default)]
    pub thermal_kwh: f64,
    #[serde(default)]
    pub avg_cop: f64,
    #[serde(default)]
    pub runtime_hours: f64,
    #[serde(default)]
    pub samples: u64,
}

/// Statistics for a whole reporting period as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConsumptionStats {
    #[serde(default)]
    pub electricity_kwh: f64,
    #[serde(default)]
    pub thermal_kwh: f64,
    #[serde(default)]
    pub avg_cop: f64,
    #[serde(default)]
    pub runtime_hours: f64,
    #[serde(default)]
    pub samples: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_breakdown: Option<Vec<BucketStat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_breakdown: Option<Vec<BucketStat>>,
}
