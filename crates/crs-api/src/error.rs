use thiserror::Error;

/// Failures surfaced by the remote data gateway.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, or a response body that did not decode.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("unexpected status {status} from {endpoint}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The endpoint that produced the response.
        endpoint: String,
    },
}

/// Result alias for gateway operations.
pub type Result<T> = std::result::Result<T, ApiError>;
