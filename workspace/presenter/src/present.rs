use common::PredictionResponse;
use tracing::{debug, info, warn};

use crate::chart::{ChartAction, ChartHandle, ChartSeries};
use crate::error::FetchError;
use crate::format::{Classification, classify, failure_status, recent_list_items, status_text};
use crate::view::PredictionView;

/// What one invocation rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The service reported an error; only the status line changed
    ServerError { error: String, details: String },
    /// Neither error nor wave height; only the status line changed
    InvalidResponse,
    /// Prediction shown; `chart` is `None` when no chart was touched
    Predicted {
        wave_height: f64,
        recent_count: usize,
        chart: Option<ChartAction>,
    },
    /// The request or the body decoding failed
    Failed(String),
}

/// Render a decoded response.
///
/// The list and the chart are only touched for a prediction with a non-empty
/// context window, so an empty window leaves the previous ones on screen.
pub fn present_response<V>(view: &mut V, chart: &mut ChartHandle, response: &PredictionResponse) -> Outcome
where
    V: PredictionView + ?Sized,
{
    let classification = classify(response);
    view.status().set_text(&status_text(&classification));

    let (wave_height, recent) = match classification {
        Classification::ServerError { error, details } => {
            warn!(error, details, "Prediction service reported an error");
            return Outcome::ServerError {
                error: error.to_string(),
                details: details.to_string(),
            };
        }
        Classification::Invalid => {
            warn!("Prediction response carried no wave height");
            return Outcome::InvalidResponse;
        }
        Classification::Prediction { wave_height, recent } => (wave_height, recent),
    };

    if recent.is_empty() {
        info!(wave_height, "Prediction rendered without recent observations");
        return Outcome::Predicted {
            wave_height,
            recent_count: 0,
            chart: None,
        };
    }

    match view.recent_list() {
        Some(list) => {
            list.clear();
            for item in recent_list_items(recent) {
                list.push_item(&item);
            }
        }
        None => debug!("No recent list region, skipping"),
    }

    let chart_action = match view.chart_mount() {
        Some(mount) => Some(chart.render(mount, ChartSeries::from_prediction(recent, wave_height))),
        None => {
            debug!("No chart mount, skipping");
            None
        }
    };

    info!(wave_height, recent_count = recent.len(), "Prediction rendered");
    Outcome::Predicted {
        wave_height,
        recent_count: recent.len(),
        chart: chart_action,
    }
}

/// Render a request that produced no decodable body.
pub fn present_failure<V>(view: &mut V, error: &FetchError) -> Outcome
where
    V: PredictionView + ?Sized,
{
    let message = error.to_string();
    tracing::error!(%message, "Prediction request failed");
    view.status().set_text(&failure_status(&message));
    Outcome::Failed(message)
}

/// Render whatever one request produced.
pub fn present<V>(view: &mut V, chart: &mut ChartHandle, result: Result<PredictionResponse, FetchError>) -> Outcome
where
    V: PredictionView + ?Sized,
{
    match result {
        Ok(response) => present_response(view, chart, &response),
        Err(error) => present_failure(view, &error),
    }
}
