//! Price - Amount as sent by the server

use serde::{Deserialize, Deserializer};

/// Product price kept in its raw textual form.
///
/// Decimal fields usually arrive as strings (`"9.99"`), but plain numbers are
/// accepted too. No numeric coercion happens on the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Price(String);

impl Price {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Price {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(serde_json::Number),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawPrice::deserialize(deserializer)? {
            RawPrice::Number(n) => Self(n.to_string()),
            RawPrice::Text(s) => Self(s),
        })
    }
}
