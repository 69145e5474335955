//! FormState - Transient create/edit buffer
//!
//! `id == None` is create mode, `id == Some(_)` is edit mode.

use std::borrow::Cow;

use crate::domain::entities::{PayloadStock, Product, ProductPayload};
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::{FormField, ProductId};

/// Stock input, remembering whether the value was typed or copied from a
/// listed product
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockInput {
    Server(i64),
    Typed(String),
}

impl Default for StockInput {
    fn default() -> Self {
        StockInput::Typed(String::new())
    }
}

impl StockInput {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            StockInput::Server(n) => Cow::Owned(n.to_string()),
            StockInput::Typed(raw) => Cow::Borrowed(raw),
        }
    }
}

/// Raw form inputs; text fields hold the value as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: StockInput,
}

impl FormState {
    /// Empty buffer in create mode
    pub fn empty() -> Self {
        Self::default()
    }

    /// Copy a listed product into the buffer, switching to edit mode
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            stock: StockInput::Server(product.stock),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn get(&self, field: FormField) -> Cow<'_, str> {
        match field {
            FormField::Name => Cow::Borrowed(&self.name),
            FormField::Description => Cow::Borrowed(&self.description),
            FormField::Price => Cow::Borrowed(&self.price),
            FormField::Stock => self.stock.as_text(),
        }
    }

    /// Overwrite one field, leaving the others untouched
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Description => self.description = value,
            FormField::Price => self.price = value,
            FormField::Stock => self.stock = StockInput::Typed(value),
        }
    }

    /// Name and price must be non-empty
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.price.is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        Ok(())
    }

    /// Validate and build the request body
    pub fn to_payload(&self) -> Result<ProductPayload, ValidationError> {
        self.validate()?;
        Ok(ProductPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            stock: PayloadStock::from_input(&self.stock),
        })
    }
}
