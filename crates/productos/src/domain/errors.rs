//! Domain Errors
//!
//! Error types for HTTP collaborator calls and form validation.

use thiserror::Error;

/// Failure of a call against the products API.
///
/// Every variant is the same kind of failure to the controller; the
/// distinction only matters for logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn transport<E: std::fmt::Display>(err: E) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode<E: std::fmt::Display>(err: E) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Client-side form validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name and price are required")]
    MissingRequired,
}

/// Controller operation a failure is reported against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Save,
    Delete,
}

impl Operation {
    /// Fixed user-facing message shown in the error banner
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Load => "Failed to load products",
            Operation::Save => "Failed to save the product",
            Operation::Delete => "Failed to delete the product",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Load => write!(f, "load"),
            Operation::Save => write!(f, "save"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}
