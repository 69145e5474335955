//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the controller
//! interacts with the outside world (REST API, the person at the screen).
//!
//! Implementations of these traits live in the front-end crate.

mod product_api;
mod user_prompt;

// Re-exports
pub use product_api::*;
pub use user_prompt::*;
