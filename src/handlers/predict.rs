use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::PredictionResponse;
use tracing::{info, instrument, trace, warn};

use crate::schemas::AppState;
use crate::upstream::UpstreamError;

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        let error = match &self {
            UpstreamError::Unreachable(_) => "prediction service unavailable",
            UpstreamError::InvalidBody(_) => "invalid upstream response",
        };
        warn!("Answering /predict with 502: {} - {}", error, self);

        let body = PredictionResponse::failure(error, self.to_string());
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Relay one prediction from the upstream model service
///
/// The upstream status and body are passed through unchanged, so service
/// errors keep their `error`/`details` shape and status code.
#[utoipa::path(
    get,
    path = "/predict",
    tag = "prediction",
    responses(
        (status = 200, description = "Predicted wave height with recent observations", body = PredictionResponse),
        (status = 500, description = "Prediction service reported an error", body = PredictionResponse),
        (status = 502, description = "Prediction service unreachable or answered garbage", body = PredictionResponse)
    )
)]
#[instrument(skip(state))]
pub async fn predict(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<PredictionResponse>), UpstreamError> {
    trace!("Entering predict relay");

    let (status, body) = state.upstream.get().await?;
    info!("Relayed prediction from {} with status {}", state.upstream.url(), status);

    Ok((status, Json(body)))
}
