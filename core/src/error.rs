use thiserror::Error;

/// Failure talking to the remote word list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}")]
    HttpStatus { status: reqwest::StatusCode },
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum WordDayError {
    /// The network failed and no usable cache was available.
    #[error("network error: {0}")]
    Network(#[from] FetchError),
    #[error("Word of the day list is empty.")]
    EmptyList,
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type WordDayResult<T> = Result<T, WordDayError>;
