//! Boutique prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartAction, CartLine, CartState, reduce},
    catalog::{CATEGORIES, Category, filter_products},
    pricing::{PriceError, format_price, money_from_decimal, parse_price},
    products::{Product, ProductId},
    store::CartStore,
};
