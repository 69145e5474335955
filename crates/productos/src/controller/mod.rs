//! Product List Controller
//!
//! Owns the product list, the form buffer and the loading/error flags.
//! Every mutation is followed by a full refresh of the list; the list is
//! never patched in place.

mod command;
mod state;

pub use command::*;
pub use state::*;

use std::sync::Arc;

use crate::domain::{ApiError, FormField, FormState, Operation, Product, ProductId};
use crate::ports::{ProductApi, UserPrompt};

/// Question asked before a delete request is sent
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this product?";

/// Controller for the products screen
pub struct ProductListController<A: ProductApi, P: UserPrompt> {
    api: Arc<A>,
    prompt: Arc<P>,
    state: ControllerState,
}

impl<A: ProductApi, P: UserPrompt> ProductListController<A, P> {
    pub fn new(api: Arc<A>, prompt: Arc<P>) -> Self {
        Self {
            api,
            prompt,
            state: ControllerState::new(),
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Initial load, run once when the screen opens
    pub async fn start(&mut self) {
        tracing::debug!("product list controller started");
        self.refresh().await;
    }

    /// Apply a command to the state
    pub async fn dispatch(&mut self, command: Command) -> Effect {
        match command {
            Command::Refresh => {
                self.refresh().await;
                Effect::None
            }
            Command::UpdateField { field, value } => {
                self.update_field(field, value);
                Effect::None
            }
            Command::Submit => Effect::Submitted(self.submit().await),
            Command::SelectForEdit(product) => {
                self.select_for_edit(&product);
                Effect::None
            }
            Command::Remove(id) => Effect::Removed(self.remove(&id).await),
            Command::ResetForm => {
                self.reset_form();
                Effect::None
            }
        }
    }

    /// Replace the list with the server's current one
    ///
    /// On failure the previous list stays and the load message is shown.
    pub async fn refresh(&mut self) {
        self.state.loading = true;

        match self.api.list().await {
            Ok(products) => {
                let unpersisted = products.iter().filter(|p| !p.is_persisted()).count();
                if unpersisted > 0 {
                    tracing::warn!(count = unpersisted, "list response contains products without id");
                }
                tracing::debug!(count = products.len(), "product list refreshed");
                self.state.products = products;
                self.state.error = None;
            }
            Err(e) => self.fail(Operation::Load, &e),
        }

        self.state.loading = false;
    }

    /// Merge one raw input value into the form; no validation here
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        tracing::trace!(field = %field, "form field updated");
        self.state.form.set(field, value);
    }

    /// Create or update depending on the form mode
    ///
    /// Missing name or price aborts with a notification before any request.
    /// On failure the form is kept so the user can retry.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let payload = match self.state.form.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.prompt.notify(&e.to_string());
                return SubmitOutcome::Invalid;
            }
        };

        self.state.loading = true;

        let result = match &self.state.form.id {
            Some(id) => {
                tracing::info!(id = %id, name = %payload.name, "updating product");
                self.api
                    .update(id, &payload)
                    .await
                    .map(|_| SubmitOutcome::Updated)
            }
            None => {
                tracing::info!(name = %payload.name, "creating product");
                self.api
                    .create(&payload)
                    .await
                    .map(|_| SubmitOutcome::Created)
            }
        };

        let outcome = match result {
            Ok(outcome) => {
                self.refresh().await;
                self.reset_form();
                outcome
            }
            Err(e) => {
                self.fail(Operation::Save, &e);
                SubmitOutcome::Failed
            }
        };

        self.state.loading = false;
        outcome
    }

    /// Load a listed product into the form (edit mode)
    pub fn select_for_edit(&mut self, product: &Product) {
        self.state.form = FormState::from_product(product);
    }

    /// Delete after confirmation, then refresh
    pub async fn remove(&mut self, id: &ProductId) -> RemoveOutcome {
        if !self.prompt.confirm(DELETE_CONFIRMATION) {
            return RemoveOutcome::Declined;
        }

        self.state.loading = true;

        tracing::info!(id = %id, "deleting product");
        let outcome = match self.api.delete(id).await {
            Ok(()) => {
                self.refresh().await;
                RemoveOutcome::Deleted
            }
            Err(e) => {
                self.fail(Operation::Delete, &e);
                RemoveOutcome::Failed
            }
        };

        self.state.loading = false;
        outcome
    }

    /// Back to an empty create-mode form
    pub fn reset_form(&mut self) {
        self.state.form = FormState::empty();
    }

    fn fail(&mut self, operation: Operation, err: &ApiError) {
        tracing::error!(operation = %operation, error = %err, "products request failed");
        self.state.error = Some(operation.failure_message().to_string());
    }
}
