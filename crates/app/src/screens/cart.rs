//! Cart screen.

use std::sync::Arc;

use boutique::{
    cart::{CartAction, CartLine, CartState},
    pricing::format_price,
    products::ProductId,
    store::CartStore,
};

/// One cart line, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub quantity: u64,
    pub unit_price: String,
    pub subtotal: String,
}

impl From<&CartLine<'_>> for CartLineView {
    fn from(line: &CartLine<'_>) -> Self {
        Self {
            id: line.id().clone(),
            name: line.product().name.clone(),
            quantity: line.quantity(),
            unit_price: format_price(line.unit_price()),
            subtotal: format_price(&line.subtotal()),
        }
    }
}

#[derive(Debug)]
pub struct CartScreen {
    cart: Arc<CartStore<'static>>,
}

impl CartScreen {
    pub fn new(cart: Arc<CartStore<'static>>) -> Self {
        Self { cart }
    }

    pub fn lines(&self) -> Vec<CartLineView> {
        self.cart
            .snapshot()
            .lines()
            .iter()
            .map(CartLineView::from)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.snapshot().is_empty()
    }

    /// Cart total as shown on the screen, e.g. `"R$ 20.00"`.
    pub fn total_label(&self) -> String {
        format_price(&self.cart.snapshot().total())
    }

    /// The `+` button: one more of the line's product.
    ///
    /// The new quantity is computed from the current snapshot and dispatched as an absolute
    /// quantity, so two handles stepping the same line at once can lose a step.
    pub fn increment(&self, id: &ProductId) -> CartState<'static> {
        self.step(id, 1)
    }

    /// The `-` button: one fewer, removing the line when it reaches zero.
    ///
    /// Computed from the current snapshot, like [`CartScreen::increment`].
    pub fn decrement(&self, id: &ProductId) -> CartState<'static> {
        self.step(id, -1)
    }

    pub fn remove(&self, id: &ProductId) -> CartState<'static> {
        self.cart.dispatch(CartAction::RemoveFromCart(id.clone()))
    }

    /// Set a line's quantity directly.
    pub fn set_quantity(&self, id: &ProductId, quantity: i64) -> CartState<'static> {
        self.cart.dispatch(CartAction::UpdateQuantity {
            id: id.clone(),
            quantity,
        })
    }

    /// Snapshot, then `UpdateQuantity` with the stepped quantity.
    fn step(&self, id: &ProductId, delta: i64) -> CartState<'static> {
        let current = self.cart.snapshot();

        let Some(line) = current.line(id) else {
            return current;
        };

        let quantity = i64::try_from(line.quantity())
            .unwrap_or(i64::MAX)
            .saturating_add(delta);

        self.set_quantity(id, quantity)
    }
}
