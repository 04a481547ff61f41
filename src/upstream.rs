use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::PredictionResponse;
use presenter::{FetchError, PredictionSource};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error, trace, warn};

/// Failures talking to the prediction service
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// No response: connection refused, timeout, body read aborted
    #[error("{0}")]
    Unreachable(String),

    /// A response arrived but its body is not a prediction payload
    #[error("{0}")]
    InvalidBody(String),
}

impl From<UpstreamError> for FetchError {
    fn from(error: UpstreamError) -> Self {
        match error {
            UpstreamError::Unreachable(message) => FetchError::Transport(message),
            UpstreamError::InvalidBody(message) => FetchError::Decode(message),
        }
    }
}

/// HTTP client bound to one `/predict` URL.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    url: String,
}

impl PredictionClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).gzip(true).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the prediction and decode the body whatever the status is.
    ///
    /// The service reports its own failures as a 500 with an
    /// `error`/`details` body, so a non-success status is not an error here.
    pub async fn get(&self) -> Result<(StatusCode, PredictionResponse), UpstreamError> {
        debug!("GET request to: {}", self.url);

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            error!("GET {} - Request failed: {}", self.url, e);
            UpstreamError::Unreachable(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} - Non-OK response: {}", self.url, status);
        }

        trace!("GET {} - Response received, parsing JSON", self.url);
        let body = response.bytes().await.map_err(|e| {
            error!("GET {} - Failed to read body: {}", self.url, e);
            UpstreamError::Unreachable(e.to_string())
        })?;

        let prediction = serde_json::from_slice::<PredictionResponse>(&body).map_err(|e| {
            error!("GET {} - Failed to parse response: {}", self.url, e);
            UpstreamError::InvalidBody(e.to_string())
        })?;

        debug!("GET {} - Decoded prediction body with status {}", self.url, status);
        Ok((status, prediction))
    }
}

#[async_trait(?Send)]
impl PredictionSource for PredictionClient {
    async fn fetch(&self) -> Result<PredictionResponse, FetchError> {
        let (_status, prediction) = self.get().await?;
        Ok(prediction)
    }
}
