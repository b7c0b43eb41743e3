use std::borrow::Cow;

use crate::models::{BucketStat, ConsumptionStats};

/// Thermal output per unit of electricity, 0 when nothing was consumed.
pub fn cop(thermal_kwh: f64, electricity_kwh: f64) -> f64 {
    if electricity_kwh > 0.0 {
        thermal_kwh / electricity_kwh
    } else {
        0.0
    }
}

impl BucketStat {
    fn correct(&mut self, factor: f64) {
        self.electricity_kwh *= factor;
        self.avg_cop = cop(self.thermal_kwh, self.electricity_kwh);
    }
}

impl ConsumptionStats {
    /// Copy of these statistics with electricity scaled by `factor` and every
    /// COP recomputed from the scaled figures.
    ///
    /// Must only be called on raw backend data; correcting twice compounds
    /// the factor.
    pub fn corrected(&self, factor: f64) -> ConsumptionStats {
        let correct_all = |buckets: &Option<Vec<BucketStat>>| {
            buckets.as_ref().map(|buckets| {
                buckets
                    .iter()
                    .map(|bucket| {
                        let mut bucket = bucket.clone();
                        bucket.correct(factor);
                        bucket
                    })
                    .collect::<Vec<_>>()
            })
        };

        let electricity_kwh = self.electricity_kwh * factor;
        ConsumptionStats {
            electricity_kwh,
            thermal_kwh: self.thermal_kwh,
            avg_cop: cop(self.thermal_kwh, electricity_kwh),
            runtime_hours: self.runtime_hours,
            samples: self.samples,
            hourly_breakdown: correct_all(&self.hourly_breakdown),
            daily_breakdown: correct_all(&self.daily_breakdown),
        }
    }
}

/// Apply a device's power correction factor.
///
/// A factor of exactly 1.0 borrows the input untouched; any other factor
/// yields a corrected copy. Missing stats pass through.
pub fn apply_power_correction(
    stats: Option<&ConsumptionStats>,
    factor: f64,
) -> Option<Cow<'_, ConsumptionStats>> {
    let stats = stats?;
    if factor == 1.0 {
        return Some(Cow::Borrowed(stats));
    }
    Some(Cow::Owned(stats.corrected(factor)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn bucket(hour: u32, electricity_kwh: f64, thermal_kwh: f64) -> BucketStat {
        BucketStat {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap(),
            electricity_kwh,
            thermal_kwh,
            avg_cop: cop(thermal_kwh, electricity_kwh),
            runtime_hours: 0.5,
            samples: 60,
        }
    }

    fn raw_stats() -> ConsumptionStats {
        ConsumptionStats {
            electricity_kwh: 10.0,
            thermal_kwh: 35.0,
            avg_cop: 3.5,
            runtime_hours: 8.0,
            samples: 1440,
            hourly_breakdown: Some(vec![bucket(0, 2.0, 7.0), bucket(1, 0.0, 0.0)]),
            daily_breakdown: Some(vec![bucket(0, 10.0, 35.0)]),
        }
    }

    #[test]
    fn test_factor_one_is_identity() {
        let stats = raw_stats();
        let corrected = apply_power_correction(Some(&stats), 1.0).unwrap();
        assert!(matches!(corrected, Cow::Borrowed(_)));
        assert_eq!(*corrected, stats);
    }

    #[test]
    fn test_missing_stats_pass_through() {
        assert!(apply_power_correction(None, 1.05).is_none());
    }

    #[test]
    fn test_correction_scenario() {
        let corrected = raw_stats().corrected(1.05);
        assert!((corrected.electricity_kwh - 10.5).abs() < 1e-9);
        assert_eq!(corrected.thermal_kwh, 35.0);
        assert!((corrected.avg_cop - 35.0 / 10.5).abs() < 1e-9);
        assert!((corrected.avg_cop - 3.333_333_333).abs() < 1e-6);
        assert_eq!(corrected.runtime_hours, 8.0);
        assert_eq!(corrected.samples, 1440);
    }

    #[test]
    fn test_correction_does_not_touch_input() {
        let stats = raw_stats();
        let _ = apply_power_correction(Some(&stats), 1.2);
        assert_eq!(stats, raw_stats());
    }

    #[test]
    fn test_buckets_are_corrected_independently() {
        let corrected = raw_stats().corrected(1.25);

        let hourly = corrected.hourly_breakdown.as_ref().unwrap();
        assert!((hourly[0].electricity_kwh - 2.5).abs() < 1e-9);
        assert!((hourly[0].avg_cop - 7.0 / 2.5).abs() < 1e-9);
        assert_eq!(hourly[0].thermal_kwh, 7.0);
        assert_eq!(hourly[0].runtime_hours, 0.5);

        let daily = corrected.daily_breakdown.as_ref().unwrap();
        assert!((daily[0].electricity_kwh - 12.5).abs() < 1e-9);
        assert!((daily[0].avg_cop - 35.0 / 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_hourly_only_leaves_daily_absent() {
        let stats = ConsumptionStats {
            daily_breakdown: None,
            ..raw_stats()
        };
        let corrected = stats.corrected(0.9);
        assert!(corrected.daily_breakdown.is_none());
        assert_eq!(corrected.hourly_breakdown.unwrap().len(), 2);
    }

    #[test]
    fn test_zero_electricity_gives_zero_cop() {
        let corrected = raw_stats().corrected(1.1);
        let idle = &corrected.hourly_breakdown.as_ref().unwrap()[1];
        assert_eq!(idle.electricity_kwh, 0.0);
        assert_eq!(idle.avg_cop, 0.0);

        let empty = ConsumptionStats {
            thermal_kwh: 4.0,
            ..Default::default()
        };
        assert_eq!(empty.corrected(1.3).avg_cop, 0.0);
    }

    #[test]
    fn test_cop_invariant_holds_for_many_factors() {
        for factor in [0.1, 0.5, 0.95, 1.05, 2.0, 10.0] {
            let stats = raw_stats();
            let corrected = stats.corrected(factor);
            assert!((corrected.electricity_kwh - stats.electricity_kwh * factor).abs() < 1e-9);
            assert!(
                (corrected.avg_cop - corrected.thermal_kwh / corrected.electricity_kwh).abs()
                    < 1e-9
            );
            for b in corrected.hourly_breakdown.iter().flatten() {
                if b.electricity_kwh > 0.0 {
                    assert!((b.avg_cop - b.thermal_kwh / b.electricity_kwh).abs() < 1e-9);
                } else {
                    assert_eq!(b.avg_cop, 0.0);
                }
            }
        }
    }
}
