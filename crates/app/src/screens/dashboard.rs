//! Dashboard screen.

use std::sync::Arc;

use tracing::error;

use crate::{domain::products::ProductsService, screens::ScreenError};

pub struct DashboardScreen {
    products: Arc<dyn ProductsService>,
    total_products: u64,
}

impl DashboardScreen {
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self {
            products,
            total_products: 0,
        }
    }

    /// Refresh the product count.
    ///
    /// # Errors
    ///
    /// Returns the message to show when the count cannot be fetched; the last count is kept.
    pub async fn load(&mut self) -> Result<u64, ScreenError> {
        self.total_products = self.products.count_products().await.map_err(|err| {
            error!(error = %err, "failed to count products");

            ScreenError::new("Could not load product count")
        })?;

        Ok(self.total_products)
    }

    pub fn total_products(&self) -> u64 {
        self.total_products
    }
}

impl std::fmt::Debug for DashboardScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardScreen")
            .field("total_products", &self.total_products)
            .finish_non_exhaustive()
    }
}
