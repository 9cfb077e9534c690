//! Products

use std::{borrow::Borrow, fmt};

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

use crate::pricing::serialize_money;

/// Opaque product identifier assigned by the catalog backend.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap a backend identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap the identifier.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product<'a> {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Product category, e.g. `"Camisetas"`
    pub category: String,

    /// Product image URL, may be empty
    pub image_url: String,

    /// Product price
    #[serde(serialize_with = "serialize_money")]
    pub price: Money<'a, Currency>,

    /// Units in stock. Informational only, the cart never checks it.
    pub stock_quantity: u32,
}

impl<'a> Product<'a> {
    /// Create a product with the given identifier, name and price and empty metadata.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: String::new(),
            image_url: String::new(),
            price,
            stock_quantity: 0,
        }
    }

    /// Returns the price of the product
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::BRL;

    use super::*;

    #[test]
    fn product_id_displays_inner_value() {
        let id = ProductId::new("6f1c2a");

        assert_eq!(id.to_string(), "6f1c2a");
        assert_eq!(id.as_str(), "6f1c2a");
    }

    #[test]
    fn new_product_has_empty_metadata() {
        let product = Product::new("a", "Camiseta Preta", Money::from_minor(49_90, BRL));

        assert_eq!(product.id, ProductId::from("a"));
        assert!(product.description.is_empty());
        assert!(product.category.is_empty());
        assert_eq!(product.stock_quantity, 0);
        assert_eq!(*product.price(), Money::from_minor(49_90, BRL));
    }
}
