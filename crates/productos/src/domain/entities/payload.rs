//! ProductPayload - Request body for create and update

use serde::{Serialize, Serializer};

use crate::domain::entities::StockInput;

/// Body sent with `POST {base}` and `PUT {base}{id}/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: PayloadStock,
}

/// Stock as sent to the server.
///
/// Typed text travels untouched and a number copied from the server stays a
/// number. Empty text and a server `0` both go out as the number `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadStock {
    Raw(String),
    Number(i64),
    Zero,
}

impl PayloadStock {
    pub fn from_input(input: &StockInput) -> Self {
        match input {
            StockInput::Typed(raw) if raw.is_empty() => PayloadStock::Zero,
            StockInput::Typed(raw) => PayloadStock::Raw(raw.clone()),
            StockInput::Server(0) => PayloadStock::Zero,
            StockInput::Server(n) => PayloadStock::Number(*n),
        }
    }
}

impl Serialize for PayloadStock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PayloadStock::Raw(raw) => serializer.serialize_str(raw),
            PayloadStock::Number(n) => serializer.serialize_i64(*n),
            PayloadStock::Zero => serializer.serialize_u8(0),
        }
    }
}
