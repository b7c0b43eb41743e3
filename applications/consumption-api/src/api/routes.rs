use crate::api::handlers::{consumption, format, health, water};
use crate::services::ConsumptionService;
use axum::{
    extract::Request,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Level;

pub fn create_router(service: ConsumptionService) -> Router {
    let public_routes = Router::new().route("/health", get(health::health));

    let api_routes = Router::new()
        .route("/api/v1/consumption/stats", get(consumption::get_stats))
        .route("/api/v1/consumption/cached", get(consumption::get_cached))
        .route(
            "/api/v1/consumption/available",
            get(consumption::get_available),
        )
        .route("/api/v1/water/density", get(water::get_density))
        .route("/api/v1/water/thermal-power", get(water::get_thermal_power))
        .route("/api/v1/format/value", post(format::format_feature_value));

    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_request(|_request: &Request, _span: &tracing::Span| {
            tracing::event!(Level::DEBUG, "received request");
        })
        .on_response(
            |_response: &axum::response::Response,
             latency: std::time::Duration,
             _span: &tracing::Span| {
                tracing::event!(Level::INFO, latency = ?latency, "request completed");
            },
        )
        .on_failure(
            |_error: tower_http::classify::ServerErrorsFailureClass,
             _latency: std::time::Duration,
             _span: &tracing::Span| {
                tracing::event!(Level::ERROR, "request failed");
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .with_state(service)
        .layer(ServiceBuilder::new().layer(trace).layer(CorsLayer::permissive()))
}
