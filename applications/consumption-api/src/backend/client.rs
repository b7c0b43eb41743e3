use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::BackendConfig;

/// Errors talking to the heating backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Backend rejected request: {0}")]
    Rejected(String),
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Deserialization(err.to_string())
        } else {
            BackendError::Network(err.to_string())
        }
    }
}

/// HTTP client for the heating backend REST API.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request with query parameters and deserialize the response
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "Backend request");

        let response = self.http.get(&url).query(query).send().await?;

        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, BackendError> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BackendError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| BackendError::Deserialization(e.to_string()))
    }
}

/// Turn a `success: false` envelope into an error.
pub(crate) fn ensure_success(success: bool, error: Option<String>) -> Result<(), BackendError> {
    if success {
        Ok(())
    } else {
        Err(BackendError::Rejected(
            error.unwrap_or_else(|| "unknown error".to_string()),
        ))
    }
}
