use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatResponse {
    pub display: String,
    pub value: Option<f64>,
    pub unit: Option<String>,
}
