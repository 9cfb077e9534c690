//! App Context

use std::{fmt, sync::Arc};

use boutique::store::CartStore;
use rusty_money::iso::BRL;
use tracing::info;

use crate::{
    auth::{AuthService, RestAuthService},
    backend::BackendClient,
    config::BackendConfig,
    domain::products::{ProductsService, RestProductsService},
};

/// Services and state shared by every screen.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub auth: Arc<dyn AuthService>,
    pub cart: Arc<CartStore<'static>>,
}

impl AppContext {
    /// Build application context against the configured backend, with an empty BRL cart.
    #[must_use]
    pub fn from_config(config: BackendConfig) -> Self {
        let backend = BackendClient::new(config);

        Self::new(
            Arc::new(RestProductsService::new(backend.clone())),
            Arc::new(RestAuthService::new(backend)),
        )
    }

    /// Build application context from explicit services, with an empty BRL cart.
    pub fn new(products: Arc<dyn ProductsService>, auth: Arc<dyn AuthService>) -> Self {
        Self {
            products,
            auth,
            cart: Arc::new(CartStore::new(BRL)),
        }
    }

    /// End the shopping session. The cart is not kept past logout.
    pub fn logout(&self) {
        self.cart.clear();

        info!("logged out");
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}
