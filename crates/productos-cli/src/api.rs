//! Products API Client
//!
//! reqwest implementation of the `ProductApi` port.

use async_trait::async_trait;
use reqwest::{Client, Response};

use productos::{ApiError, Product, ProductApi, ProductId, ProductPayload};

/// Path of the products collection on the API host
pub const RESOURCE_PATH: &str = "/api/productos/";

/// HTTP client for the products resource
pub struct HttpProductApi {
    client: Client,
    resource_url: String,
}

impl HttpProductApi {
    /// Create a client for `{base_url}/api/productos/`
    pub fn new(base_url: &str) -> Self {
        let resource_url = format!("{}{}", base_url.trim_end_matches('/'), RESOURCE_PATH);

        Self {
            client: Client::new(),
            resource_url,
        }
    }

    /// Collection URL, always ending in `/`
    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    fn item_url(&self, id: &ProductId) -> String {
        format!("{}{}/", self.resource_url, id)
    }

    async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let resp = self
            .client
            .get(&self.resource_url)
            .send()
            .await
            .map_err(ApiError::transport)?;

        let resp = Self::ensure_success(resp).await?;
        let products: Vec<Product> = resp.json().await.map_err(ApiError::decode)?;

        tracing::debug!(count = products.len(), "GET {}", self.resource_url);
        Ok(products)
    }

    async fn create(&self, payload: &ProductPayload) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(&self.resource_url)
            .json(payload)
            .send()
            .await
            .map_err(ApiError::transport)?;

        Self::ensure_success(resp).await?;
        tracing::debug!("POST {}", self.resource_url);
        Ok(())
    }

    async fn update(&self, id: &ProductId, payload: &ProductPayload) -> Result<(), ApiError> {
        let url = self.item_url(id);
        let resp = self
            .client
            .put(&url)
            .json(payload)
            .send()
            .await
            .map_err(ApiError::transport)?;

        Self::ensure_success(resp).await?;
        tracing::debug!("PUT {}", url);
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ApiError> {
        let url = self.item_url(id);
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(ApiError::transport)?;

        Self::ensure_success(resp).await?;
        tracing::debug!("DELETE {}", url);
        Ok(())
    }
}
