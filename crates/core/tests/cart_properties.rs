//! Property tests for the cart reducer.

use proptest::prelude::*;
use rusty_money::{Money, iso::BRL};

use boutique::{
    cart::{CartAction, CartState, reduce},
    products::{Product, ProductId},
};

fn arb_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(str::to_string)
}

fn arb_action() -> impl Strategy<Value = CartAction<'static>> {
    prop_oneof![
        (arb_id(), 0_i64..100_000).prop_map(|(id, minor)| {
            CartAction::AddToCart(Product::new(id.as_str(), id.clone(), Money::from_minor(minor, BRL)))
        }),
        arb_id().prop_map(|id| CartAction::RemoveFromCart(ProductId::new(id))),
        (arb_id(), any::<i64>()).prop_map(|(id, quantity)| CartAction::UpdateQuantity {
            id: ProductId::new(id),
            quantity,
        }),
    ]
}

fn run(actions: &[CartAction<'static>]) -> CartState<'static> {
    actions
        .iter()
        .cloned()
        .fold(CartState::new(BRL), |cart, action| reduce(&cart, action))
}

proptest! {
    #[test]
    fn any_action_sequence_is_handled(actions in prop::collection::vec(arb_action(), 0..64)) {
        let cart = run(&actions);

        prop_assert!(cart.lines().iter().all(|line| line.quantity() >= 1));

        let mut ids: Vec<&str> = cart.lines().iter().map(|line| line.id().as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), before);
    }

    #[test]
    fn total_matches_lines_when_prices_are_stable(
        ops in prop::collection::vec((arb_id(), 0_u8..3, -3_i64..20), 0..64)
    ) {
        // One fixed price per product, so no drift is possible.
        let price = |id: &str| match id {
            "a" => 1_99,
            "b" => 25_00,
            "c" => 7_45,
            _ => 0,
        };

        let actions: Vec<CartAction<'static>> = ops
            .into_iter()
            .map(|(id, op, quantity)| match op {
                0 => CartAction::AddToCart(Product::new(
                    id.as_str(),
                    id.clone(),
                    Money::from_minor(price(&id), BRL),
                )),
                1 => CartAction::RemoveFromCart(ProductId::new(id)),
                _ => CartAction::UpdateQuantity { id: ProductId::new(id), quantity },
            })
            .collect();

        let cart = run(&actions);

        prop_assert_eq!(cart.total(), cart.recomputed_total());
    }

    #[test]
    fn removal_is_idempotent(actions in prop::collection::vec(arb_action(), 0..32), id in arb_id()) {
        let cart = run(&actions);

        let once = reduce(&cart, CartAction::RemoveFromCart(ProductId::new(id.clone())));
        let twice = reduce(&once, CartAction::RemoveFromCart(ProductId::new(id)));

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn non_positive_update_equals_remove(
        actions in prop::collection::vec(arb_action(), 0..32),
        id in arb_id(),
        quantity in i64::MIN..=0,
    ) {
        let cart = run(&actions);

        let updated = reduce(&cart, CartAction::UpdateQuantity { id: ProductId::new(id.clone()), quantity });
        let removed = reduce(&cart, CartAction::RemoveFromCart(ProductId::new(id)));

        prop_assert_eq!(updated, removed);
    }
}
