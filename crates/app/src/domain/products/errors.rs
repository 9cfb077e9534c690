//! Products service errors.

use boutique::pricing::PriceError;
use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("invalid price value")]
    InvalidPrice(#[from] PriceError),

    #[error("backend error")]
    Backend(#[from] BackendError),
}
