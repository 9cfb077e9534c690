//! Auth service errors.

use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("user not found")]
    UserNotFound,

    #[error("incorrect password")]
    InvalidPassword,

    #[error("could not verify password")]
    Verification(#[source] BackendError),

    #[error("backend error")]
    Backend(#[from] BackendError),
}
