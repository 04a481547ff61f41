use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by the `/predict` endpoint.
///
/// The service answers with one of two shapes:
/// - `{ "error": "...", "details": "..." }` when the prediction failed
/// - `{ "wave_height": 1.42, "recent_wave_heights": [ ... ] }` on success
///
/// Every field is optional on the wire so that any JSON object decodes; which
/// shape a body represents is decided by the presenter, not by serde.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionResponse {
    /// Short error label reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Free-form detail accompanying `error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Predicted next wave height, in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave_height: Option<f64>,
    /// Observations the prediction was made from, oldest first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_wave_heights: Option<Vec<f64>>,
}

impl PredictionResponse {
    /// Successful prediction with its context window.
    pub fn prediction(wave_height: f64, recent_wave_heights: Vec<f64>) -> Self {
        Self {
            wave_height: Some(wave_height),
            recent_wave_heights: Some(recent_wave_heights),
            ..Default::default()
        }
    }

    /// Error payload in the shape the service uses for its 500 responses.
    pub fn failure(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            details: Some(details.into()),
            ..Default::default()
        }
    }

    /// Recent observations, empty when the field is absent.
    pub fn recent(&self) -> &[f64] {
        self.recent_wave_heights.as_deref().unwrap_or(&[])
    }
}
