//! Application configuration
//!
//! Settings come from command-line flags, the environment, and an optional `.env` file.

pub mod backend;
pub mod observability;

pub use backend::BackendConfig;
pub use observability::{LogFormat, LoggingConfig};
