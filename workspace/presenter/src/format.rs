//! Text produced for the status line and the recent-observations list.

use common::PredictionResponse;

use crate::numeric::{fixed_text, shortest_text};

/// Status shown when the body carries neither an error nor a wave height.
pub const INVALID_RESPONSE_STATUS: &str = "Error: Invalid response from server";

/// What a decoded `/predict` body represents, checked in this order:
/// a non-empty `error` wins over everything else, then a missing
/// `wave_height` makes the body invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification<'a> {
    /// The service reported a failure
    ServerError { error: &'a str, details: &'a str },
    /// No error and no wave height
    Invalid,
    /// A usable prediction, with its (possibly empty) context window
    Prediction { wave_height: f64, recent: &'a [f64] },
}

/// Decide which branch a response takes.
///
/// An error without `details` yields empty details, so the status reads
/// `"Error: <error> - "` rather than spelling out `undefined`.
pub fn classify(response: &PredictionResponse) -> Classification<'_> {
    if let Some(error) = response.error.as_deref().filter(|e| !e.is_empty()) {
        return Classification::ServerError {
            error,
            details: response.details.as_deref().unwrap_or_default(),
        };
    }

    match response.wave_height {
        Some(wave_height) => Classification::Prediction {
            wave_height,
            recent: response.recent(),
        },
        None => Classification::Invalid,
    }
}

/// Status line text for a classified response.
pub fn status_text(classification: &Classification<'_>) -> String {
    match classification {
        Classification::ServerError { error, details } => format!("Error: {} - {}", error, details),
        Classification::Invalid => INVALID_RESPONSE_STATUS.to_string(),
        Classification::Prediction { wave_height, .. } => {
            format!("Predicted Wave Height: {} meters", shortest_text(*wave_height))
        }
    }
}

/// Status line text for a request that failed before a body was decoded.
pub fn failure_status(message: &str) -> String {
    format!("Error: {}", message)
}

/// One list line per observation, numbered from 1, three decimals with
/// exact ties rounded up.
pub fn recent_list_items(recent: &[f64]) -> Vec<String> {
    recent
        .iter()
        .enumerate()
        .map(|(index, value)| format!("Step {}: {} m", index + 1, fixed_text(*value, 3)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_wins_over_wave_height() {
        let response = PredictionResponse {
            error: Some("prediction failed".to_string()),
            details: Some("Model returned NaN/Inf value".to_string()),
            wave_height: Some(2.5),
            recent_wave_heights: Some(vec![1.0]),
        };

        let classification = classify(&response);
        assert_eq!(
            status_text(&classification),
            "Error: prediction failed - Model returned NaN/Inf value"
        );
    }

    #[test]
    fn empty_error_is_not_truthy() {
        let response = PredictionResponse {
            error: Some(String::new()),
            wave_height: Some(1.5),
            ..Default::default()
        };

        assert!(matches!(classify(&response), Classification::Prediction { .. }));
    }

    #[test]
    fn missing_details_render_empty() {
        let response = PredictionResponse {
            error: Some("model not available".to_string()),
            ..Default::default()
        };

        assert_eq!(status_text(&classify(&response)), "Error: model not available - ");
    }

    #[test]
    fn missing_wave_height_is_invalid() {
        let response = PredictionResponse {
            recent_wave_heights: Some(vec![1.0, 2.0]),
            ..Default::default()
        };

        assert_eq!(classify(&response), Classification::Invalid);
        assert_eq!(status_text(&classify(&response)), INVALID_RESPONSE_STATUS);
    }

    #[test]
    fn prediction_status_uses_shortest_number_form() {
        let response = PredictionResponse::prediction(3.5, vec![]);
        assert_eq!(status_text(&classify(&response)), "Predicted Wave Height: 3.5 meters");

        let response = PredictionResponse::prediction(2.0, vec![]);
        assert_eq!(status_text(&classify(&response)), "Predicted Wave Height: 2 meters");
    }

    #[test]
    fn list_items_round_to_three_decimals() {
        assert_eq!(
            recent_list_items(&[1.23456, 2.0]),
            vec!["Step 1: 1.235 m".to_string(), "Step 2: 2.000 m".to_string()]
        );
        assert!(recent_list_items(&[]).is_empty());
    }

    #[test]
    fn list_items_round_exact_ties_up() {
        assert_eq!(
            recent_list_items(&[0.0625, 1.0625]),
            vec!["Step 1: 0.063 m".to_string(), "Step 2: 1.063 m".to_string()]
        );
    }

    #[test]
    fn prediction_status_edge_numbers() {
        let status = |value| status_text(&classify(&PredictionResponse::prediction(value, vec![])));

        assert_eq!(status(-0.0), "Predicted Wave Height: 0 meters");
        assert_eq!(status(1e-7), "Predicted Wave Height: 1e-7 meters");
        assert_eq!(status(1e21), "Predicted Wave Height: 1e+21 meters");
    }

    #[test]
    fn failure_status_prefixes_message() {
        assert_eq!(failure_status("connection refused"), "Error: connection refused");
    }
}
