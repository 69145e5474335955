//! Value Objects
//!
//! Immutable value types used by entities.

mod form_field;
mod price;
mod product_id;

pub use form_field::*;
pub use price::*;
pub use product_id::*;
