//! Productos Client Library
//!
//! Domain types, ports and the list controller for the products catalogue
//! front-end.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Product entity, form buffer and value types
//!   - `entities/`: Product, FormState, ProductPayload
//!   - `value_objects/`: ProductId, Price, FormField
//!   - `errors/`: API and validation error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `ProductApi`: the REST collaborator (list, create, update, delete)
//!   - `UserPrompt`: blocking confirmation and notification
//!
//! - **Controller** (`controller/`): `ProductListController` owning the list,
//!   the form and the loading/error flags
//!
//! - **View** (`view/`): render model derived from controller state
//!
//! # Usage
//!
//! ```rust,ignore
//! use productos::{Command, ProductListController, ScreenView};
//!
//! let mut controller = ProductListController::new(api, prompt);
//! controller.start().await;
//! controller.dispatch(Command::Submit).await;
//! let screen = ScreenView::from_state(controller.state());
//! ```

pub mod controller;
pub mod domain;
pub mod ports;
pub mod view;

// Re-export commonly used types
pub use controller::{
    Command, ControllerState, Effect, ProductListController, RemoveOutcome, SubmitOutcome,
    DELETE_CONFIRMATION,
};
pub use domain::{
    ApiError, FormField, FormState, Operation, PayloadStock, Price, Product, ProductId,
    ProductPayload, StockInput, ValidationError,
};
pub use ports::{ProductApi, UserPrompt};
pub use view::{InputView, RowView, ScreenView};
