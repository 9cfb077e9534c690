//! Storefront application: backend access, services, screen controllers and configuration.

pub mod auth;
pub mod backend;
pub mod config;
pub mod context;
pub mod domain;
pub mod observability;
pub mod screens;

#[cfg(test)]
mod test;
