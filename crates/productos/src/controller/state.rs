//! Controller state owned by `ProductListController`

use crate::domain::{FormState, Product};

/// Everything the screen is rendered from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerState {
    /// Last list received from the server, in server order
    pub products: Vec<Product>,
    pub form: FormState,
    pub loading: bool,
    /// Banner message; cleared by the next successful refresh
    pub error: Option<String>,
}

impl ControllerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }
}
