pub mod consumption;
pub mod format;
pub mod water;

pub use consumption::{AvailabilityResponse, StatsQuery};
pub use format::FormatResponse;
pub use water::{DensityQuery, DensityResponse, ThermalPowerQuery, ThermalPowerResponse};
