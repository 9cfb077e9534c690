//! Screen controllers
//!
//! Each controller owns its screen's local state and turns user input into service calls and
//! cart actions. Failures come back as a [`ScreenError`] carrying the message to show.

mod cart;
mod dashboard;
mod details;
mod edit;
mod form;
mod home;
mod login;
mod registration;

use thiserror::Error;

pub use cart::{CartLineView, CartScreen};
pub use dashboard::DashboardScreen;
pub use details::ProductDetailsScreen;
pub use edit::EditProductScreen;
pub use form::{ProductForm, ValidationError};
pub use home::HomeScreen;
pub use login::{LoginOutcome, LoginScreen};
pub use registration::ProductRegistrationScreen;

/// A failure to show to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ScreenError {
    message: String,
}

impl ScreenError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationError> for ScreenError {
    fn from(error: ValidationError) -> Self {
        Self::new(error.to_string())
    }
}
