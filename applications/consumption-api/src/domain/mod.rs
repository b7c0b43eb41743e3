//! Numerical rules behind the consumption tile: power correction, bucket
//! selection and the value/density helpers shared with the device views.

pub mod breakdown;
pub mod correction;
pub mod density;
pub mod units;
pub mod value;

pub use breakdown::{
    cop_axis_max, select_breakdown, Breakdown, BucketView, Granularity, Period, PeriodSummary,
};
pub use correction::{apply_power_correction, cop};
pub use density::{density, thermal_power_kw};
pub use units::{format_unit, format_value, PLACEHOLDER};
pub use value::{unwrap_value, FeatureValue, MalformedValueError, Scalar, Unwrapped};
