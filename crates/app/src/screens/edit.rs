//! Edit product screen.

use std::sync::Arc;

use boutique::products::{Product, ProductId};
use tracing::error;

use crate::{
    domain::products::ProductsService,
    screens::{ProductForm, ScreenError, ValidationError},
};

pub struct EditProductScreen {
    products: Arc<dyn ProductsService>,
    catalog: Vec<Product<'static>>,
    selected: Option<ProductId>,
    pub form: ProductForm,
}

impl EditProductScreen {
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self {
            products,
            catalog: Vec::new(),
            selected: None,
            form: ProductForm::default(),
        }
    }

    /// Fetch the products to pick from, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns the message to show when products cannot be fetched.
    pub async fn load(&mut self) -> Result<usize, ScreenError> {
        let mut products = self.products.list_products().await.map_err(|err| {
            error!(error = %err, "failed to load products");

            ScreenError::new("Could not load products")
        })?;

        products.sort_by(|a, b| a.name.cmp(&b.name));

        self.catalog = products;

        Ok(self.catalog.len())
    }

    pub fn products(&self) -> &[Product<'static>] {
        &self.catalog
    }

    pub fn selected(&self) -> Option<&Product<'static>> {
        let id = self.selected.as_ref()?;

        self.catalog.iter().find(|product| &product.id == id)
    }

    /// Pick a loaded product and copy its fields into the form.
    /// Returns `false` when no loaded product has the id.
    pub fn select(&mut self, id: &ProductId) -> bool {
        let Some(product) = self.catalog.iter().find(|product| &product.id == id) else {
            return false;
        };

        self.form = ProductForm::from_product(product);
        self.selected = Some(id.clone());

        true
    }

    /// Save the form over the selected product, then reload and reset.
    ///
    /// # Errors
    ///
    /// Returns the validation message, or a generic one when the backend refuses.
    pub async fn update(&mut self) -> Result<Product<'static>, ScreenError> {
        let id = self
            .selected
            .clone()
            .ok_or(ValidationError::NoProductSelected)?;

        let update = self.form.to_update()?;

        let updated = self
            .products
            .update_product(id, update)
            .await
            .map_err(|err| {
                error!(error = %err, "failed to update product");

                ScreenError::new("Could not update product")
            })?;

        self.reset();
        self.reload().await;

        Ok(updated)
    }

    /// Delete the selected product, then reload and reset.
    ///
    /// # Errors
    ///
    /// Returns a message when nothing is selected or the backend refuses.
    pub async fn delete(&mut self) -> Result<(), ScreenError> {
        let id = self
            .selected
            .clone()
            .ok_or(ValidationError::NoProductSelected)?;

        self.products.delete_product(id).await.map_err(|err| {
            error!(error = %err, "failed to delete product");

            ScreenError::new("Could not delete product")
        })?;

        self.reset();
        self.reload().await;

        Ok(())
    }

    fn reset(&mut self) {
        self.selected = None;
        self.form.clear();
    }

    // The write already succeeded; a failed refresh only leaves a stale list.
    async fn reload(&mut self) {
        _ = self.load().await;
    }
}

impl std::fmt::Debug for EditProductScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditProductScreen")
            .field("catalog", &self.catalog.len())
            .field("selected", &self.selected)
            .field("form", &self.form)
            .finish_non_exhaustive()
    }
}
