//! Common transport-layer types shared between the server and the clients.
//! These structs mirror the `/predict` and `/health` payloads so the relay,
//! the terminal client and the wasm frontend decode the same shapes.

mod health;
mod prediction;

pub use health::HealthResponse;
pub use prediction::PredictionResponse;
