//! Cart actions and the cart reducer.

use crate::{
    cart::{CartLine, CartState, times},
    products::{Product, ProductId},
};

/// Everything that can happen to a cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction<'a> {
    /// Add one unit of a product.
    ///
    /// A repeat add increases the total by the price of the product passed in, not by the
    /// price captured on the existing line. If the price changed in between, the running total
    /// drifts away from [`CartState::recomputed_total`]. This is kept as-is; whether the
    /// captured price should win instead is an open question.
    AddToCart(Product<'a>),

    /// Drop a product's line entirely.
    RemoveFromCart(ProductId),

    /// Set a line's quantity. Zero or less removes the line.
    UpdateQuantity {
        /// Product whose line is updated
        id: ProductId,

        /// New quantity
        quantity: i64,
    },
}

impl CartAction<'_> {
    /// Short action name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddToCart(_) => "add_to_cart",
            CartAction::RemoveFromCart(_) => "remove_from_cart",
            CartAction::UpdateQuantity { .. } => "update_quantity",
        }
    }

    /// Product the action targets.
    pub fn product_id(&self) -> &ProductId {
        match self {
            CartAction::AddToCart(product) => &product.id,
            CartAction::RemoveFromCart(id) | CartAction::UpdateQuantity { id, .. } => id,
        }
    }
}

/// Apply an action to a cart, returning the next cart.
///
/// Never fails: an unknown product id is a no-op that returns an equal state. All money and
/// quantity arithmetic saturates instead of overflowing.
pub fn reduce<'a>(state: &CartState<'a>, action: CartAction<'a>) -> CartState<'a> {
    match action {
        CartAction::AddToCart(product) => add_to_cart(state, product),
        CartAction::RemoveFromCart(id) => remove_from_cart(state, &id),
        CartAction::UpdateQuantity { id, quantity } => update_quantity(state, &id, quantity),
    }
}

fn add_to_cart<'a>(state: &CartState<'a>, product: Product<'a>) -> CartState<'a> {
    let price = product.price().to_minor_units();
    let total = state.total.to_minor_units().saturating_add(price);

    let lines = if state.line(&product.id).is_some() {
        state
            .lines
            .iter()
            .map(|line| {
                if line.id() == &product.id {
                    line.with_quantity(line.quantity.saturating_add(1))
                } else {
                    line.clone()
                }
            })
            .collect()
    } else {
        let mut lines = state.lines.clone();
        lines.push(CartLine::new(product));
        lines
    };

    CartState::from_parts(lines, total, state.currency)
}

fn remove_from_cart<'a>(state: &CartState<'a>, id: &ProductId) -> CartState<'a> {
    let Some(removed) = state.line(id) else {
        return state.clone();
    };

    let total = state
        .total
        .to_minor_units()
        .saturating_sub(removed.subtotal_minor());

    let lines = state
        .lines
        .iter()
        .filter(|line| line.id() != id)
        .cloned()
        .collect();

    CartState::from_parts(lines, total, state.currency)
}

fn update_quantity<'a>(state: &CartState<'a>, id: &ProductId, quantity: i64) -> CartState<'a> {
    let Some(current) = state.line(id) else {
        return state.clone();
    };

    if quantity <= 0 {
        return remove_from_cart(state, id);
    }

    let new_quantity = quantity.unsigned_abs();
    let unit = current.unit_price().to_minor_units();

    let delta = if new_quantity >= current.quantity {
        times(unit, new_quantity - current.quantity)
    } else {
        times(unit, current.quantity - new_quantity).saturating_neg()
    };

    let total = state.total.to_minor_units().saturating_add(delta);

    let lines = state
        .lines
        .iter()
        .map(|line| {
            if line.id() == id {
                line.with_quantity(new_quantity)
            } else {
                line.clone()
            }
        })
        .collect();

    CartState::from_parts(lines, total, state.currency)
}
