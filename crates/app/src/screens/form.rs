//! Product form state and validation.

use boutique::{
    catalog::CATEGORIES,
    pricing::{PriceError, money_to_decimal, parse_price},
    products::Product,
};
use rusty_money::{
    Money,
    iso::{BRL, Currency},
};
use thiserror::Error;

use crate::domain::products::{NewProduct, ProductUpdate};

/// Reasons a product form cannot be submitted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Product name is required")]
    NameRequired,

    #[error("Invalid price")]
    InvalidPrice(#[source] PriceError),

    #[error("Invalid stock quantity")]
    InvalidStock,

    #[error("Select a product to edit")]
    NoProductSelected,
}

/// Text fields of the product registration and edit forms, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock_quantity: String,
    pub category: String,
    pub image_url: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            stock_quantity: String::new(),
            category: CATEGORIES[0].name.to_string(),
            image_url: String::new(),
        }
    }
}

struct Validated {
    price: Money<'static, Currency>,
    stock_quantity: u32,
}

impl ProductForm {
    /// A form pre-filled from an existing product.
    pub fn from_product(product: &Product<'_>) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: money_to_decimal(&product.price).to_string(),
            stock_quantity: product.stock_quantity.to_string(),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
        }
    }

    /// Reset every field to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check the form and build a product to create.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: name, then price, then stock.
    pub fn to_new_product(&self) -> Result<NewProduct, ValidationError> {
        let Validated {
            price,
            stock_quantity,
        } = self.validate()?;

        Ok(NewProduct {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            price,
            stock_quantity,
            category: self.category.clone(),
            image_url: self.image_url.trim().to_string(),
        })
    }

    /// Check the form and build a full product update.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: name, then price, then stock.
    pub fn to_update(&self) -> Result<ProductUpdate, ValidationError> {
        let Validated {
            price,
            stock_quantity,
        } = self.validate()?;

        Ok(ProductUpdate {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            price,
            stock_quantity,
            category: self.category.clone(),
            image_url: self.image_url.trim().to_string(),
        })
    }

    fn validate(&self) -> Result<Validated, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }

        let price = parse_price(&self.price, BRL).map_err(ValidationError::InvalidPrice)?;

        let stock_quantity = self
            .stock_quantity
            .trim()
            .parse::<u32>()
            .map_err(|_err| ValidationError::InvalidStock)?;

        Ok(Validated {
            price,
            stock_quantity,
        })
    }
}
