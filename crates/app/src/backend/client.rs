//! Backend REST client.

use reqwest::{Client, Method, RequestBuilder, Response, header::CONTENT_RANGE};
use tracing::debug;

use crate::{
    backend::{
        BackendError,
        records::{
            InsertProductParams, ProductChanges, ProductRecord, UserRecord, VerifyPasswordParams,
        },
    },
    config::BackendConfig,
};

const PREFER: &str = "Prefer";

/// HTTP client for the catalog backend's REST interface.
#[derive(Debug, Clone)]
pub struct BackendClient {
    config: BackendConfig,
    http: Client,
}

impl BackendClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// All products, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn list_products(&self) -> Result<Vec<ProductRecord>, BackendError> {
        let response = self
            .request(Method::GET, "products")
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;

        let records: Vec<ProductRecord> = ensure_success(response).await?.json().await?;

        debug!(count = records.len(), "fetched products");

        Ok(records)
    }

    /// Number of stored products, without fetching any rows.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or when the response carries no total.
    pub async fn count_products(&self) -> Result<u64, BackendError> {
        let response = self
            .request(Method::HEAD, "products")
            .query(&[("select", "*")])
            .header(PREFER, "count=exact")
            .send()
            .await?;

        let response = ensure_success(response).await?;

        let range = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        range
            .as_deref()
            .and_then(parse_content_range_total)
            .ok_or(BackendError::InvalidCount(range))
    }

    /// Create a product through the `insert_product` procedure.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response.
    pub async fn insert_product(&self, params: &InsertProductParams) -> Result<(), BackendError> {
        let response = self
            .request(Method::POST, "rpc/insert_product")
            .json(params)
            .send()
            .await?;

        ensure_success(response).await?;

        Ok(())
    }

    /// Overwrite a product's columns. Returns `None` when no product has the id.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn update_product(
        &self,
        id: &str,
        changes: &ProductChanges,
    ) -> Result<Option<ProductRecord>, BackendError> {
        let response = self
            .request(Method::PATCH, "products")
            .query(&[("id", format!("eq.{id}"))])
            .header(PREFER, "return=representation")
            .json(changes)
            .send()
            .await?;

        let records: Vec<ProductRecord> = ensure_success(response).await?.json().await?;

        Ok(records.into_iter().next())
    }

    /// Delete a product. Returns `false` when no product has the id.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn delete_product(&self, id: &str) -> Result<bool, BackendError> {
        let response = self
            .request(Method::DELETE, "products")
            .query(&[("id", format!("eq.{id}"))])
            .header(PREFER, "return=representation")
            .send()
            .await?;

        let records: Vec<ProductRecord> = ensure_success(response).await?.json().await?;

        Ok(!records.is_empty())
    }

    /// Look a user up by username.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn find_user(&self, username: &str) -> Result<Option<UserRecord>, BackendError> {
        let response = self
            .request(Method::GET, "users")
            .query(&[("select", "*".to_string()), ("username", format!("eq.{username}"))])
            .send()
            .await?;

        let users: Vec<UserRecord> = ensure_success(response).await?.json().await?;

        Ok(users.into_iter().next())
    }

    /// Check a password through the `verify_user_password` procedure.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn verify_password(&self, username: &str, password: &str) -> Result<bool, BackendError> {
        let params = VerifyPasswordParams {
            user_name: username,
            pass_word: password,
        };

        let response = self
            .request(Method::POST, "rpc/verify_user_password")
            .json(&params)
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.config.rest_url(path))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }
}

async fn ensure_success(response: Response) -> Result<Response, BackendError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();

    Err(BackendError::UnexpectedResponse(status, text))
}

/// Total from a `Content-Range` value such as `0-9/42` or `*/0`.
fn parse_content_range_total(value: &str) -> Option<u64> {
    let (_, total) = value.rsplit_once('/')?;

    total.trim().parse().ok()
}
