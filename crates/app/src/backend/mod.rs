//! Catalog backend
//!
//! A thin REST client for the hosted Postgres backend that stores products and users.

mod client;
mod errors;
mod records;

pub use client::BackendClient;
pub use errors::BackendError;
pub use records::{InsertProductParams, ProductChanges, ProductRecord, UserRecord};
