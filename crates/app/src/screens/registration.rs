//! Product registration screen.

use std::sync::Arc;

use tracing::error;

use crate::{
    domain::products::ProductsService,
    screens::{ProductForm, ScreenError},
};

pub struct ProductRegistrationScreen {
    products: Arc<dyn ProductsService>,
    pub form: ProductForm,
}

impl ProductRegistrationScreen {
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self {
            products,
            form: ProductForm::default(),
        }
    }

    /// Validate and register the typed product. The form is cleared on success.
    ///
    /// # Errors
    ///
    /// Returns the validation message, or a generic one when the backend refuses.
    pub async fn submit(&mut self) -> Result<(), ScreenError> {
        let product = self.form.to_new_product()?;

        self.products.create_product(product).await.map_err(|err| {
            error!(error = %err, "failed to register product");

            ScreenError::new("Could not register product")
        })?;

        self.form.clear();

        Ok(())
    }
}

impl std::fmt::Debug for ProductRegistrationScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductRegistrationScreen")
            .field("form", &self.form)
            .finish_non_exhaustive()
    }
}
