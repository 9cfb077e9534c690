//! Cart Store
//!
//! Owns the session's [`CartState`]. Build one at start-up, wrap it in an `Arc` and hand it to
//! everything that needs the cart.

use rusty_money::iso::Currency;
use tokio::sync::watch;
use tracing::debug;

use crate::cart::{CartAction, CartState, reduce};

/// Serializes cart actions and publishes each resulting state to subscribers.
#[derive(Debug)]
pub struct CartStore<'a> {
    state: watch::Sender<CartState<'a>>,
}

impl<'a> CartStore<'a> {
    /// Create a store holding an empty cart.
    pub fn new(currency: &'a Currency) -> Self {
        Self::with_state(CartState::new(currency))
    }

    /// Create a store holding the given cart.
    pub fn with_state(state: CartState<'a>) -> Self {
        let (sender, _receiver) = watch::channel(state);

        Self { state: sender }
    }

    /// Current cart.
    pub fn snapshot(&self) -> CartState<'a> {
        self.state.borrow().clone()
    }

    /// Apply an action and return the cart it produced.
    ///
    /// Reading the current cart, reducing and publishing happen under one lock, so concurrent
    /// dispatches behave as if applied one after another. Subscribers are only notified when
    /// the cart actually changed.
    pub fn dispatch(&self, action: CartAction<'a>) -> CartState<'a> {
        let kind = action.kind();
        let product = action.product_id().clone();
        let mut published = None;

        self.state.send_if_modified(|state| {
            let next = reduce(state, action);
            let changed = next != *state;

            if changed {
                *state = next.clone();
            }

            published = Some(next);

            changed
        });

        let next = published.unwrap_or_else(|| self.snapshot());

        debug!(
            action = kind,
            product_id = %product,
            lines = next.len(),
            total = %next.total(),
            "cart action dispatched"
        );

        next
    }

    /// Empty the cart, e.g. on logout.
    pub fn clear(&self) -> CartState<'a> {
        let empty = CartState::new(self.state.borrow().currency());

        self.state.send_replace(empty.clone());

        debug!("cart cleared");

        empty
    }

    /// Subscribe to cart changes. The receiver always holds the whole latest cart.
    pub fn subscribe(&self) -> watch::Receiver<CartState<'a>> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use rusty_money::{Money, iso::BRL};
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    fn product(id: &str, minor: i64) -> Product<'static> {
        Product::new(id, id, Money::from_minor(minor, BRL))
    }

    #[test]
    fn dispatch_returns_and_stores_next_state() {
        let store = CartStore::new(BRL);

        let next = store.dispatch(CartAction::AddToCart(product("a", 10_00)));

        assert_eq!(next.total(), Money::from_minor(10_00, BRL));
        assert_eq!(store.snapshot(), next);
    }

    #[test]
    fn older_snapshots_are_not_affected_by_dispatch() {
        let store = CartStore::new(BRL);
        let before = store.snapshot();

        store.dispatch(CartAction::AddToCart(product("a", 10_00)));

        assert!(before.is_empty());
    }

    #[tokio::test]
    async fn subscribers_see_every_change() -> TestResult {
        let store = CartStore::new(BRL);
        let mut receiver = store.subscribe();

        store.dispatch(CartAction::AddToCart(product("a", 10_00)));

        receiver.changed().await?;
        assert_eq!(receiver.borrow_and_update().total(), Money::from_minor(10_00, BRL));

        store.dispatch(CartAction::RemoveFromCart("a".into()));

        receiver.changed().await?;
        assert!(receiver.borrow_and_update().is_empty());

        Ok(())
    }

    #[test]
    fn noop_dispatch_does_not_notify() {
        let store = CartStore::new(BRL);
        let receiver = store.subscribe();

        store.dispatch(CartAction::RemoveFromCart("missing".into()));

        assert!(!receiver.has_changed().unwrap_or(true));
    }

    #[test]
    fn clear_empties_the_cart_and_notifies() {
        let store = CartStore::new(BRL);
        store.dispatch(CartAction::AddToCart(product("a", 10_00)));
        let receiver = store.subscribe();

        let cleared = store.clear();

        assert!(cleared.is_empty());
        assert!(store.snapshot().is_empty());
        assert!(receiver.has_changed().unwrap_or(false));
    }

    #[test]
    fn concurrent_dispatches_are_serialized() -> TestResult {
        let store = Arc::new(CartStore::new(BRL));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);

                thread::spawn(move || {
                    for _ in 0..100 {
                        store.dispatch(CartAction::AddToCart(product("a", 1_00)));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().map_err(|_err| "dispatch thread panicked")?;
        }

        let cart = store.snapshot();

        assert_eq!(cart.line(&"a".into()).map(|line| line.quantity()), Some(800));
        assert_eq!(cart.total(), Money::from_minor(800_00, BRL));

        Ok(())
    }
}
