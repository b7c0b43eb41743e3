use serde::{Deserialize, Serialize};

pub const DEFAULT_POWER_CORRECTION_FACTOR: f64 = 1.0;
pub const DEFAULT_ELECTRICITY_PRICE: f64 = 0.30;

/// Per-device correction settings, persisted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceCorrectionSettings {
    /// Multiplier applied to measured compressor power.
    pub power_correction_factor: f64,
    /// €/kWh
    pub electricity_price: f64,
}

impl Default for DeviceCorrectionSettings {
    fn default() -> Self {
        Self {
            power_correction_factor: DEFAULT_POWER_CORRECTION_FACTOR,
            electricity_price: DEFAULT_ELECTRICITY_PRICE,
        }
    }
}

impl DeviceCorrectionSettings {
    /// Range accepted when settings are written: factor in (0, 10],
    /// price in (0, 1].
    pub fn is_valid(&self) -> bool {
        self.power_correction_factor > 0.0
            && self.power_correction_factor <= 10.0
            && self.electricity_price > 0.0
            && self.electricity_price <= 1.0
    }
}
