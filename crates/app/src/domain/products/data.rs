//! Products Data

use boutique::pricing::money_to_decimal;
use rusty_money::{Money, iso::Currency};

use crate::backend::{InsertProductParams, ProductChanges};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Money<'static, Currency>,
    pub stock_quantity: u32,
    pub category: String,
    pub image_url: String,
}

/// Product Update Data
///
/// Every column is written, so unchanged fields must carry their current values.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: Money<'static, Currency>,
    pub stock_quantity: u32,
    pub category: String,
    pub image_url: String,
}

impl From<NewProduct> for InsertProductParams {
    fn from(product: NewProduct) -> Self {
        Self {
            product_price: money_to_decimal(&product.price),
            product_name: product.name,
            product_description: product.description,
            product_stock: product.stock_quantity,
            product_category: product.category,
            product_image_url: product.image_url,
        }
    }
}

impl From<ProductUpdate> for ProductChanges {
    fn from(update: ProductUpdate) -> Self {
        Self {
            price: money_to_decimal(&update.price),
            name: update.name,
            description: update.description,
            stock_quantity: update.stock_quantity,
            category: update.category,
            image_url: update.image_url,
        }
    }
}
