//! Render model for the products screen
//!
//! Pure data derived from `ControllerState`; painting it is up to the
//! front-end.

use crate::controller::ControllerState;
use crate::domain::{FormField, Product, ProductId};

pub const EMPTY_STATE: &str = "No products loaded.";
pub const LOADING: &str = "Loading...";

/// Table column headers, in display order
pub const COLUMNS: [&str; 6] = ["ID", "Name", "Description", "Price", "Stock", "Actions"];

/// One table row, with the edit and delete actions it exposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: Option<ProductId>,
    pub id_text: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
}

impl RowView {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            id_text: product
                .id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: format!("${}", product.price),
            stock: product.stock.to_string(),
        }
    }

    /// Cell texts for the data columns
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.id_text,
            &self.name,
            &self.description,
            &self.price,
            &self.stock,
        ]
    }
}

/// A labelled form input and its current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub field: FormField,
    pub label: &'static str,
    pub value: String,
}

/// Everything shown on screen for one state snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub form_heading: &'static str,
    pub inputs: Vec<InputView>,
    pub submit_label: &'static str,
    /// Cancel button, only offered while editing
    pub show_cancel: bool,
    pub error_banner: Option<String>,
    pub loading: bool,
    pub rows: Vec<RowView>,
    /// "No products" row: empty list and nothing in flight
    pub empty_state: bool,
}

impl ScreenView {
    pub fn from_state(state: &ControllerState) -> Self {
        let editing = state.form.is_edit_mode();

        Self {
            form_heading: if editing { "Edit product" } else { "New product" },
            inputs: FormField::ALL
                .iter()
                .map(|&field| InputView {
                    field,
                    label: field.label(),
                    value: state.form.get(field).to_string(),
                })
                .collect(),
            submit_label: if editing { "Save changes" } else { "Create product" },
            show_cancel: editing,
            error_banner: if state.has_error() {
                state.error.clone()
            } else {
                None
            },
            loading: state.loading,
            rows: state.products.iter().map(RowView::from_product).collect(),
            empty_state: state.products.is_empty() && !state.loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormState;

    fn widget() -> Product {
        Product::new("Widget", "9.99")
            .with_id(1)
            .with_description("")
            .with_stock(5)
    }

    #[test]
    fn test_single_product_row() {
        let state = ControllerState {
            products: vec![widget()],
            ..Default::default()
        };
        let view = ScreenView::from_state(&state);

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].cells(), ["1", "Widget", "", "$9.99", "5"]);
        assert_eq!(view.rows[0].id, Some(ProductId::from(1)));
        assert!(!view.empty_state);
    }

    #[test]
    fn test_empty_state_only_when_idle() {
        let idle = ScreenView::from_state(&ControllerState::default());
        assert!(idle.empty_state);
        assert!(!idle.loading);

        let loading = ScreenView::from_state(&ControllerState {
            loading: true,
            ..Default::default()
        });
        assert!(!loading.empty_state);
        assert!(loading.loading);
    }

    #[test]
    fn test_edit_mode_labels() {
        let create = ScreenView::from_state(&ControllerState::default());
        assert_eq!(create.form_heading, "New product");
        assert_eq!(create.submit_label, "Create product");
        assert!(!create.show_cancel);

        let edit = ScreenView::from_state(&ControllerState {
            form: FormState::from_product(&widget()),
            ..Default::default()
        });
        assert_eq!(edit.form_heading, "Edit product");
        assert_eq!(edit.submit_label, "Save changes");
        assert!(edit.show_cancel);
        assert_eq!(edit.inputs[0].value, "Widget");
        assert_eq!(edit.inputs[2].label, "Price");
    }

    #[test]
    fn test_error_banner_hidden_when_empty() {
        let none = ScreenView::from_state(&ControllerState {
            error: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(none.error_banner, None);

        let shown = ScreenView::from_state(&ControllerState {
            error: Some("Failed to load products".to_string()),
            ..Default::default()
        });
        assert_eq!(shown.error_banner.as_deref(), Some("Failed to load products"));
    }

    #[test]
    fn test_rows_keep_server_order() {
        let state = ControllerState {
            products: vec![
                Product::new("B", "2").with_id(9),
                Product::new("A", "1").with_id(3),
            ],
            ..Default::default()
        };
        let names: Vec<_> = ScreenView::from_state(&state)
            .rows
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, vec!["B", "A"]);
    }
}
