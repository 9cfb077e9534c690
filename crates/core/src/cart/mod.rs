//! Cart
//!
//! In-memory shopping cart state. A [`CartState`] is a plain value: it is only ever replaced
//! wholesale by [`reduce`], never mutated in place, so anyone holding an older state keeps
//! seeing exactly what they were given.

use rusty_money::{Money, iso::Currency};
use serde::Serialize;

use crate::{
    pricing::serialize_money,
    products::{Product, ProductId},
};

pub mod actions;

pub use actions::{CartAction, reduce};

/// One product in the cart and how many of it were selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine<'a> {
    /// The product as it was when first added. Its price is the line's unit price.
    #[serde(flatten)]
    product: Product<'a>,

    /// Always at least 1.
    quantity: u64,
}

impl<'a> CartLine<'a> {
    pub(crate) fn new(product: Product<'a>) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Product identifier, which is also the line's identity.
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Product captured when the line was created.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Selected quantity.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Price captured when the line was created.
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        self.product.price()
    }

    /// `unit_price * quantity` in minor units, saturating.
    pub(crate) fn subtotal_minor(&self) -> i64 {
        times(self.unit_price().to_minor_units(), self.quantity)
    }

    /// `unit_price * quantity`.
    pub fn subtotal(&self) -> Money<'a, Currency> {
        Money::from_minor(self.subtotal_minor(), self.product.price.currency())
    }

    pub(crate) fn with_quantity(&self, quantity: u64) -> Self {
        Self {
            product: self.product.clone(),
            quantity,
        }
    }
}

/// Cart contents and running total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartState<'a> {
    /// Lines in the order their products were first added.
    lines: Vec<CartLine<'a>>,

    /// Running total, maintained by deltas.
    #[serde(serialize_with = "serialize_money")]
    total: Money<'a, Currency>,

    #[serde(skip)]
    currency: &'a Currency,
}

impl<'a> CartState<'a> {
    /// Create an empty cart priced in the given currency.
    pub fn new(currency: &'a Currency) -> Self {
        Self {
            lines: Vec::new(),
            total: Money::from_minor(0, currency),
            currency,
        }
    }

    pub(crate) fn from_parts(lines: Vec<CartLine<'a>>, total_minor: i64, currency: &'a Currency) -> Self {
        Self {
            lines,
            total: Money::from_minor(total_minor, currency),
            currency,
        }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }

    /// The line for the given product, if any.
    pub fn line(&self, id: &ProductId) -> Option<&CartLine<'a>> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Running total.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Sum of `unit_price * quantity` over all lines.
    ///
    /// Equals [`CartState::total`] unless the same product was added again at a different price,
    /// see [`CartAction::AddToCart`].
    pub fn recomputed_total(&self) -> Money<'a, Currency> {
        let minor = self
            .lines
            .iter()
            .fold(0_i64, |acc, line| acc.saturating_add(line.subtotal_minor()));

        Money::from_minor(minor, self.currency)
    }

    /// Currency of the cart.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines, as shown on a cart badge.
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .fold(0_u64, |acc, line| acc.saturating_add(line.quantity))
    }
}

/// `minor * quantity`, saturating at the `i64` bounds.
pub(crate) fn times(minor: i64, quantity: u64) -> i64 {
    let quantity = i64::try_from(quantity).unwrap_or(i64::MAX);

    minor.saturating_mul(quantity)
}
