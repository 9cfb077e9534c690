//! Products service.

use async_trait::async_trait;
use boutique::{
    pricing::{PriceError, money_from_decimal},
    products::{Product, ProductId},
};
use mockall::automock;
use rusty_money::iso::BRL;
use tracing::info;

use crate::{
    backend::{BackendClient, ProductRecord},
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
    },
};

#[derive(Debug, Clone)]
pub struct RestProductsService {
    backend: BackendClient,
}

impl RestProductsService {
    #[must_use]
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl ProductsService for RestProductsService {
    #[tracing::instrument(name = "products.service.list_products", skip(self), err)]
    async fn list_products(&self) -> Result<Vec<Product<'static>>, ProductsServiceError> {
        self.backend
            .list_products()
            .await?
            .into_iter()
            .map(product_from_record)
            .collect()
    }

    #[tracing::instrument(name = "products.service.count_products", skip(self), err)]
    async fn count_products(&self) -> Result<u64, ProductsServiceError> {
        Ok(self.backend.count_products().await?)
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, product),
        fields(name = %product.name),
        err
    )]
    async fn create_product(&self, product: NewProduct) -> Result<(), ProductsServiceError> {
        self.backend.insert_product(&product.into()).await?;

        info!("created product");

        Ok(())
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, product, update),
        fields(product_id = %product),
        err
    )]
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product<'static>, ProductsServiceError> {
        let record = self
            .backend
            .update_product(product.as_str(), &update.into())
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        info!("updated product");

        product_from_record(record)
    }

    #[tracing::instrument(
        name = "products.service.delete_product",
        skip(self, product),
        fields(product_id = %product),
        err
    )]
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        if !self.backend.delete_product(product.as_str()).await? {
            return Err(ProductsServiceError::NotFound);
        }

        info!("deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, newest first.
    async fn list_products(&self) -> Result<Vec<Product<'static>>, ProductsServiceError>;

    /// Counts the stored products.
    async fn count_products(&self) -> Result<u64, ProductsServiceError>;

    /// Creates a new product. The backend assigns its id.
    async fn create_product(&self, product: NewProduct) -> Result<(), ProductsServiceError>;

    /// Overwrites the product with the given id and returns the stored result.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product<'static>, ProductsServiceError>;

    /// Deletes the product with the given id.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}

fn product_from_record(record: ProductRecord) -> Result<Product<'static>, ProductsServiceError> {
    if record.price.is_sign_negative() && !record.price.is_zero() {
        return Err(PriceError::Negative(record.price).into());
    }

    Ok(Product {
        id: ProductId::new(record.id),
        name: record.name,
        description: record.description.unwrap_or_default(),
        category: record.category.unwrap_or_default(),
        image_url: record.image_url.unwrap_or_default(),
        price: money_from_decimal(record.price, BRL)?,
        stock_quantity: record.stock_quantity,
    })
}
