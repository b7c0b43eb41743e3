use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityQuery {
    pub temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityResponse {
    pub temperature: f64,
    /// kg/m³
    pub density: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThermalPowerQuery {
    pub flow_l_per_h: f64,
    pub supply_temp: f64,
    pub return_temp: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThermalPowerResponse {
    pub thermal_power_kw: f64,
    /// Density at the return temperature, kg/m³
    pub density: f64,
}
