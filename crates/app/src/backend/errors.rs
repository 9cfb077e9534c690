//! Backend errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// An HTTP transport or (de)serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-2xx response.
    #[error("unexpected response from backend ({0}): {1}")]
    UnexpectedResponse(StatusCode, String),

    /// A count request came back without a usable `Content-Range` total.
    #[error("missing or malformed count in response: {0:?}")]
    InvalidCount(Option<String>),
}
