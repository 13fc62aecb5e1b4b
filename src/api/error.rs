use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network request failed for {0}")]
    Request(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("Failed to decode response from {0}")]
    Decode(String, #[source] reqwest::Error),

    #[error("Session expired or rejected by the backend")]
    Unauthorized,

    #[error("No credentials held; authenticate before calling protected endpoints")]
    NoSession,
}
