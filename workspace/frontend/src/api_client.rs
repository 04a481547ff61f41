use async_trait::async_trait;
use common::PredictionResponse;
use gloo_net::http::Request;
use presenter::{FetchError, PredictionSource};

use crate::settings;

/// Browser `fetch` of the prediction endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GlooPredictionSource {
    url: String,
}

impl GlooPredictionSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Source pointed at the URL from the current settings
    pub fn from_settings() -> Self {
        Self::new(settings::get_settings().predict_url())
    }
}

#[async_trait(?Send)]
impl PredictionSource for GlooPredictionSource {
    async fn fetch(&self) -> Result<PredictionResponse, FetchError> {
        log::debug!("GET request to: {}", self.url);

        let response = Request::get(&self.url).send().await.map_err(|e| {
            let error_msg = e.to_string();
            log::error!("GET {} - Request failed: {}", self.url, error_msg);
            FetchError::Transport(error_msg)
        })?;

        // Error bodies from the service arrive with a 500 and are still rendered
        if !response.ok() {
            log::warn!("GET {} - Non-OK response: {}", self.url, response.status());
        }

        log::trace!("GET {} - Response received, parsing JSON", self.url);
        let prediction = response.json::<PredictionResponse>().await.map_err(|e| {
            let error_msg = e.to_string();
            log::error!("GET {} - Failed to parse response: {}", self.url, error_msg);
            FetchError::Decode(error_msg)
        })?;

        log::info!("GET {} - Success", self.url);
        Ok(prediction)
    }
}
