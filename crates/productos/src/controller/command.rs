//! Commands accepted by the controller and the outcomes they report

use crate::domain::{FormField, Product, ProductId};

/// User intent fed into `ProductListController::dispatch`
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Refresh,
    UpdateField { field: FormField, value: String },
    Submit,
    SelectForEdit(Product),
    Remove(ProductId),
    ResetForm,
}

/// Result of `submit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields missing; nothing was sent
    Invalid,
    Created,
    Updated,
    Failed,
}

/// Result of `remove`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Confirmation declined; nothing was sent
    Declined,
    Deleted,
    Failed,
}

/// What a dispatched command reported back, for status lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Submitted(SubmitOutcome),
    Removed(RemoveOutcome),
}
