use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::correction::cop;
use crate::models::{BucketStat, ConsumptionStats};

/// Lowest upper bound of the COP chart axis.
pub const MIN_COP_AXIS_MAX: f64 = 6.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Today,
    Yesterday,
    Week,
    Month,
    Last30days,
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Week => "week",
            Self::Month => "month",
            Self::Last30days => "last30days",
            Self::Year => "year",
        }
    }

    /// Periods covering a single day are broken down per hour.
    pub fn is_single_day(&self) -> bool {
        matches!(self, Self::Today | Self::Yesterday)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Hourly,
    Daily,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown<'a> {
    pub granularity: Granularity,
    pub buckets: &'a [BucketStat],
}

/// Pick the hourly or daily breakdown to display for `period`.
///
/// An explicit date always means a single day and therefore hourly buckets.
/// A breakdown the backend did not send yields no buckets.
pub fn select_breakdown(
    stats: &ConsumptionStats,
    period: Period,
    custom_date: Option<NaiveDate>,
) -> Breakdown<'_> {
    let (granularity, buckets) = if period.is_single_day() || custom_date.is_some() {
        (Granularity::Hourly, stats.hourly_breakdown.as_deref())
    } else {
        (Granularity::Daily, stats.daily_breakdown.as_deref())
    };

    Breakdown {
        granularity,
        buckets: buckets.unwrap_or_default(),
    }
}

/// One bucket as shown in the chart and table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketView {
    pub timestamp: DateTime<Utc>,
    pub electricity_kwh: f64,
    pub thermal_kwh: f64,
    pub avg_cop: f64,
    pub runtime_hours: f64,
    pub samples: u64,
    /// €
    pub cost: f64,
    pub efficiency: f64,
}

impl BucketView {
    pub fn derive(bucket: &BucketStat, electricity_price: f64) -> Self {
        Self {
            timestamp: bucket.timestamp,
            electricity_kwh: bucket.electricity_kwh,
            thermal_kwh: bucket.thermal_kwh,
            avg_cop: bucket.avg_cop,
            runtime_hours: bucket.runtime_hours,
            samples: bucket.samples,
            cost: bucket.electricity_kwh * electricity_price,
            efficiency: cop(bucket.thermal_kwh, bucket.electricity_kwh),
        }
    }
}

/// Totals for the whole period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub electricity_kwh: f64,
    pub thermal_kwh: f64,
    pub avg_cop: f64,
    pub runtime_hours: f64,
    pub cost: f64,
    pub efficiency: f64,
}

impl PeriodSummary {
    pub fn derive(stats: &ConsumptionStats, electricity_price: f64) -> Self {
        Self {
            electricity_kwh: stats.electricity_kwh,
            thermal_kwh: stats.thermal_kwh,
            avg_cop: stats.avg_cop,
            runtime_hours: stats.runtime_hours,
            cost: stats.electricity_kwh * electricity_price,
            efficiency: cop(stats.thermal_kwh, stats.electricity_kwh),
        }
    }
}

/// Upper bound for the COP axis: at least one above the highest bucket COP,
/// rounded up, and never below [`MIN_COP_AXIS_MAX`].
pub fn cop_axis_max(buckets: &[BucketStat]) -> f64 {
    let max_cop = buckets
        .iter()
        .map(|b| b.avg_cop)
        .filter(|c| c.is_finite())
        .fold(0.0_f64, f64::max);

    (max_cop + 1.0).ceil().max(MIN_COP_AXIS_MAX)
}
