//! Domain Entities
//!
//! - Product: server-owned catalogue item
//! - FormState: client-owned create/edit buffer
//! - ProductPayload: request body for create and update

mod form;
mod payload;
mod product;

pub use form::*;
pub use payload::*;
pub use product::*;
