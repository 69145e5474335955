//! Product - Server-owned catalogue item

use serde::{Deserialize, Deserializer};

use crate::domain::value_objects::{Price, ProductId};

/// Product as returned by the list endpoint
///
/// The reference backend names its fields in Spanish (`nombre`,
/// `descripcion`, `precio`); those spellings are accepted when decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
    #[serde(alias = "precio")]
    pub price: Price,
    #[serde(default, deserialize_with = "stock_or_zero")]
    pub stock: i64,
}

fn stock_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

impl Product {
    /// Create an unsaved product (no id yet)
    pub fn new(name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            price: price.into(),
            stock: 0,
        }
    }

    /// Attach the server-assigned id
    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    /// Whether the item has been persisted by the server
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
