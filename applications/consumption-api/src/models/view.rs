use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::{CorrectedStats, StatsKey};
use crate::domain::{cop_axis_max, select_breakdown, BucketView, Granularity, Period, PeriodSummary};
use crate::models::ConsumptionStats;

/// Everything the consumption tile renders for one device and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionView {
    pub device_id: String,
    pub period: Period,
    pub date: Option<NaiveDate>,
    pub granularity: Granularity,
    pub summary: PeriodSummary,
    pub buckets: Vec<BucketView>,
    pub cop_axis_max: f64,
    pub power_correction_factor: f64,
    pub electricity_price: f64,
    pub fetched_at: DateTime<Utc>,
    /// Corrected statistics the view was derived from
    pub stats: ConsumptionStats,
}

impl ConsumptionView {
    pub fn build(key: &StatsKey, corrected: &CorrectedStats) -> Self {
        let price = corrected.settings.electricity_price;
        let breakdown = select_breakdown(&corrected.stats, key.period, key.date);

        Self {
            device_id: key.device_id.clone(),
            period: key.period,
            date: key.date,
            granularity: breakdown.granularity,
            summary: PeriodSummary::derive(&corrected.stats, price),
            buckets: breakdown
                .buckets
                .iter()
                .map(|bucket| BucketView::derive(bucket, price))
                .collect(),
            cop_axis_max: cop_axis_max(breakdown.buckets),
            power_correction_factor: corrected.settings.power_correction_factor,
            electricity_price: price,
            fetched_at: corrected.fetched_at,
            stats: corrected.stats.clone(),
        }
    }
}
