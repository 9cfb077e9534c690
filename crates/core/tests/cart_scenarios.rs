//! Cart behaviour through the store, end to end.

use rusty_money::{Money, iso::BRL};

use boutique::{
    cart::{CartAction, CartLine, CartState, reduce},
    products::{Product, ProductId},
    store::CartStore,
};

fn product(id: &str, reais: i64) -> Product<'static> {
    Product::new(id, format!("Product {id}"), Money::from_minor(reais * 100, BRL))
}

fn brl(reais: i64) -> Money<'static, rusty_money::iso::Currency> {
    Money::from_minor(reais * 100, BRL)
}

fn quantities(cart: &CartState<'_>) -> Vec<(String, u64)> {
    cart.lines()
        .iter()
        .map(|line| (line.id().to_string(), line.quantity()))
        .collect()
}

#[test]
fn adding_twice_then_updating_then_removing() {
    let store = CartStore::new(BRL);

    let cart = store.dispatch(CartAction::AddToCart(product("A", 10)));
    assert_eq!(quantities(&cart), [("A".to_string(), 1)]);
    assert_eq!(cart.total(), brl(10));

    let cart = store.dispatch(CartAction::AddToCart(product("A", 10)));
    assert_eq!(quantities(&cart), [("A".to_string(), 2)]);
    assert_eq!(cart.total(), brl(20));

    let cart = store.dispatch(CartAction::UpdateQuantity {
        id: "A".into(),
        quantity: 5,
    });
    assert_eq!(quantities(&cart), [("A".to_string(), 5)]);
    assert_eq!(cart.total(), brl(50));

    let cart = store.dispatch(CartAction::RemoveFromCart("A".into()));
    assert!(cart.is_empty());
    assert_eq!(cart.total(), brl(0));
}

#[test]
fn updating_to_zero_is_the_same_as_removing() {
    let store = CartStore::new(BRL);

    store.dispatch(CartAction::AddToCart(product("B", 15)));

    let cart = store.dispatch(CartAction::UpdateQuantity {
        id: "B".into(),
        quantity: 0,
    });

    assert!(cart.is_empty());
    assert_eq!(cart.total(), brl(0));
}

#[test]
fn distinct_products_get_one_line_each() {
    let prices = [("a", 5), ("b", 7), ("c", 11), ("d", 13)];

    let cart = prices.iter().fold(CartState::new(BRL), |cart, (id, price)| {
        reduce(&cart, CartAction::AddToCart(product(id, *price)))
    });

    assert_eq!(cart.len(), prices.len());
    assert!(cart.lines().iter().all(|line| line.quantity() == 1));
    assert_eq!(cart.total(), brl(36));
}

#[test]
fn repeat_add_at_a_new_price_moves_total_by_the_new_price() {
    let cart = reduce(
        &CartState::new(BRL),
        CartAction::AddToCart(product("A", 10)),
    );

    let cart = reduce(&cart, CartAction::AddToCart(product("A", 15)));

    assert_eq!(cart.line(&ProductId::from("A")).map(CartLine::quantity), Some(2));
    assert_eq!(cart.total(), brl(25));

    // Removal uses the captured price, so the drift survives the line.
    let cart = reduce(&cart, CartAction::RemoveFromCart("A".into()));

    assert!(cart.is_empty());
    assert_eq!(cart.total(), brl(5));
}

#[test]
fn removing_subtracts_only_that_line() {
    let cart = [("A", 10), ("B", 4), ("A", 10)]
        .iter()
        .fold(CartState::new(BRL), |cart, (id, price)| {
            reduce(&cart, CartAction::AddToCart(product(id, *price)))
        });

    let removed = reduce(&cart, CartAction::RemoveFromCart("A".into()));

    assert_eq!(quantities(&removed), [("B".to_string(), 1)]);
    assert_eq!(removed.total(), brl(4));
}

#[test]
fn removing_twice_is_the_same_as_removing_once() {
    let cart = reduce(
        &CartState::new(BRL),
        CartAction::AddToCart(product("A", 10)),
    );

    let once = reduce(&cart, CartAction::RemoveFromCart("A".into()));
    let twice = reduce(&once, CartAction::RemoveFromCart("A".into()));

    assert_eq!(once, twice);
}

#[test]
fn missing_products_leave_the_cart_alone() {
    let cart = reduce(
        &CartState::new(BRL),
        CartAction::AddToCart(product("A", 10)),
    );

    let removed = reduce(&cart, CartAction::RemoveFromCart("Z".into()));
    let updated = reduce(
        &cart,
        CartAction::UpdateQuantity {
            id: "Z".into(),
            quantity: 4,
        },
    );

    assert_eq!(removed, cart);
    assert_eq!(updated, cart);
}
