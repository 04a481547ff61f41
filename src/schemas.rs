use std::path::PathBuf;

use common::{HealthResponse, PredictionResponse};
use utoipa::OpenApi;

use crate::upstream::PredictionClient;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Client for the upstream prediction service
    pub upstream: PredictionClient,
    /// Directory holding the built frontend
    pub static_dir: PathBuf,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::predict::predict,
    ),
    components(
        schemas(
            HealthResponse,
            PredictionResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "prediction", description = "Wave height prediction relay"),
    ),
    info(
        title = "Wavecast API",
        description = "Serves the wave height page and relays predictions from the model service",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
