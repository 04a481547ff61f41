use thiserror::Error;

/// Reasons a `/predict` request produced no decodable body.
///
/// `Display` yields the bare failure message; the status line prefixes it
/// with `"Error: "`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("{0}")]
    Transport(String),

    /// A response arrived but its body is not a prediction payload
    #[error("{0}")]
    Decode(String),
}
