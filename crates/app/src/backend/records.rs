//! Backend Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product row as stored by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Decimal price in major units, e.g. `49.9`
    pub price: Decimal,

    #[serde(default)]
    pub stock_quantity: u32,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Arguments of the `insert_product` procedure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertProductParams {
    pub product_name: String,
    pub product_description: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub product_price: Decimal,

    pub product_stock: u32,
    pub product_category: String,
    pub product_image_url: String,
}

/// Column values written by a product update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductChanges {
    pub name: String,
    pub description: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    pub stock_quantity: u32,
    pub category: String,
    pub image_url: String,
}

/// User row. Only the username is read; the password hash never leaves the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerifyPasswordParams<'a> {
    pub user_name: &'a str,
    pub pass_word: &'a str,
}
