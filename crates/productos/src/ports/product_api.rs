//! Product API Port
//!
//! Abstract interface for the products REST resource.

use async_trait::async_trait;

use crate::domain::{errors::ApiError, Product, ProductId, ProductPayload};

/// HTTP collaborator for the products resource
///
/// Mirrors the four endpoints under the resource path:
/// `GET {base}`, `POST {base}`, `PUT {base}{id}/`, `DELETE {base}{id}/`.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetch the full product list, in server order
    async fn list(&self) -> Result<Vec<Product>, ApiError>;

    /// Create a product; the response body is not inspected
    async fn create(&self, payload: &ProductPayload) -> Result<(), ApiError>;

    /// Update the product addressed by `id`; the response body is not inspected
    async fn update(&self, id: &ProductId, payload: &ProductPayload) -> Result<(), ApiError>;

    /// Delete the product addressed by `id`
    async fn delete(&self, id: &ProductId) -> Result<(), ApiError>;
}
