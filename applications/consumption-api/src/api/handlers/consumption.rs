use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::api::models::{AvailabilityResponse, StatsQuery};
use crate::error::Result;
use crate::models::ConsumptionView;
use crate::services::ConsumptionService;

/// GET /api/v1/consumption/stats
/// Fetches fresh statistics from the backend and returns them corrected
pub async fn get_stats(
    State(service): State<ConsumptionService>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<ConsumptionView>> {
    let view = service.load_stats(query.into()).await?;
    Ok(Json(view))
}

/// GET /api/v1/consumption/cached
/// Returns the last corrected statistics without contacting the backend
pub async fn get_cached(
    State(service): State<ConsumptionService>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<ConsumptionView>> {
    let view = service.cached_stats(&query.into()).await?;
    Ok(Json(view))
}

/// GET /api/v1/consumption/available
pub async fn get_available(
    State(service): State<ConsumptionService>,
) -> Result<Json<AvailabilityResponse>> {
    let log_stats = service.consumption_available().await?;
    Ok(Json(AvailabilityResponse {
        available: log_stats.has_consumption_data(),
        total_snapshots: log_stats.total_snapshots,
    }))
}
