//! Storefront Domain Concerns

pub mod products;
