// Shared helpers for integration tests: an in-process stand-in for the
// heating backend REST API.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};

#[derive(Clone)]
pub struct FakeBackend {
    pub stats: (StatusCode, Value),
    pub settings: (StatusCode, Value),
    pub temperature_log: (StatusCode, Value),
    pub requests: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
}

impl FakeBackend {
    pub fn new(stats: Value, settings: Value) -> Self {
        Self {
            stats: (StatusCode::OK, stats),
            settings: (StatusCode::OK, settings),
            temperature_log: (
                StatusCode::OK,
                json!({"enabled": true, "total_snapshots": 1234}),
            ),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn recorded(&self, path: &str) -> Vec<HashMap<String, String>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, q)| q.clone())
            .collect()
    }

    /// Serve on an ephemeral local port and return the base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/api/consumption/stats", get(stats))
            .route("/api/device-settings/get", get(settings))
            .route("/api/temperature-log/stats", get(temperature_log))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn record(&self, path: &str, query: HashMap<String, String>) {
        self.requests
            .lock()
            .unwrap()
            .push((path.to_string(), query));
    }
}

async fn stats(
    State(fake): State<FakeBackend>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    fake.record("/api/consumption/stats", query);
    (fake.stats.0, Json(fake.stats.1.clone()))
}

async fn settings(
    State(fake): State<FakeBackend>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    fake.record("/api/device-settings/get", query);
    (fake.settings.0, Json(fake.settings.1.clone()))
}

async fn temperature_log(State(fake): State<FakeBackend>) -> (StatusCode, Json<Value>) {
    fake.record("/api/temperature-log/stats", HashMap::new());
    (fake.temperature_log.0, Json(fake.temperature_log.1.clone()))
}

/// One day of stats with two hourly buckets, electricity 10 kWh, COP 3.5.
pub fn day_stats() -> Value {
    json!({
        "success": true,
        "stats": {
            "electricity_kwh": 10.0,
            "thermal_kwh": 35.0,
            "avg_cop": 3.5,
            "runtime_hours": 9.5,
            "samples": 1140,
            "hourly_breakdown": [
                {
                    "timestamp": "2024-01-15T06:00:00Z",
                    "electricity_kwh": 4.0,
                    "thermal_kwh": 16.0,
                    "avg_cop": 4.0,
                    "runtime_hours": 1.0,
                    "samples": 60
                },
                {
                    "timestamp": "2024-01-15T07:00:00Z",
                    "electricity_kwh": 6.0,
                    "thermal_kwh": 19.0,
                    "avg_cop": 3.1666666667,
                    "runtime_hours": 1.0,
                    "samples": 60
                }
            ]
        }
    })
}

pub fn settings_with_factor(factor: f64) -> Value {
    json!({
        "success": true,
        "compressorPowerCorrectionFactor": factor,
        "electricityPrice": 0.35
    })
}
