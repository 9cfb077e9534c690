//! Boutique
//!
//! Storefront core: products, prices, catalog search and the shopping cart. Nothing here does
//! I/O; the cart is a pure reducer over [`cart::CartAction`]s wrapped by a [`store::CartStore`]
//! that serializes dispatches and publishes each new cart.

pub mod cart;
pub mod catalog;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod store;
