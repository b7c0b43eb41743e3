use axum::{extract::Query, response::Json};

use crate::api::models::{DensityQuery, DensityResponse, ThermalPowerQuery, ThermalPowerResponse};
use crate::domain::{density, thermal_power_kw};
use crate::error::{AppError, Result};

pub async fn get_density(Query(query): Query<DensityQuery>) -> Result<Json<DensityResponse>> {
    if !query.temperature.is_finite() {
        return Err(AppError::InvalidInput(
            "temperature must be a finite number".to_string(),
        ));
    }

    Ok(Json(DensityResponse {
        temperature: query.temperature,
        density: density(query.temperature),
    }))
}

pub async fn get_thermal_power(
    Query(query): Query<ThermalPowerQuery>,
) -> Result<Json<ThermalPowerResponse>> {
    let values = [query.flow_l_per_h, query.supply_temp, query.return_temp];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(AppError::InvalidInput(
            "flow and temperatures must be finite numbers".to_string(),
        ));
    }

    Ok(Json(ThermalPowerResponse {
        thermal_power_kw: thermal_power_kw(query.flow_l_per_h, query.supply_temp, query.return_temp),
        density: density(query.return_temp),
    }))
}
