//! Product details screen.

use std::sync::Arc;

use boutique::{
    cart::{CartAction, CartState},
    pricing::format_price,
    products::Product,
    store::CartStore,
};

#[derive(Debug)]
pub struct ProductDetailsScreen {
    product: Product<'static>,
    cart: Arc<CartStore<'static>>,
}

impl ProductDetailsScreen {
    pub fn new(product: Product<'static>, cart: Arc<CartStore<'static>>) -> Self {
        Self { product, cart }
    }

    pub fn product(&self) -> &Product<'static> {
        &self.product
    }

    /// Price as shown on the screen, e.g. `"R$ 49.90"`.
    pub fn price_label(&self) -> String {
        format_price(self.product.price())
    }

    /// Add the shown product to the cart and return the new cart.
    pub fn add_to_cart(&self) -> CartState<'static> {
        self.cart.dispatch(CartAction::AddToCart(self.product.clone()))
    }
}
