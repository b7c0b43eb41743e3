use axum::response::Json;

use crate::api::models::FormatResponse;
use crate::domain::{format_value, unwrap_value, FeatureValue};

/// POST /api/v1/format/value
/// Renders an arbitrary backend feature value for display
pub async fn format_feature_value(Json(feature): Json<FeatureValue>) -> Json<FormatResponse> {
    let (value, unit) = match unwrap_value(&feature) {
        Ok(unwrapped) => (unwrapped.as_f64(), unwrapped.unit.map(str::to_string)),
        Err(_) => (None, None),
    };

    Json(FormatResponse {
        display: format_value(&feature),
        value,
        unit,
    })
}
