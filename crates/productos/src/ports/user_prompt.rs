//! User Prompt Port
//!
//! Blocking interactions with the person driving the screen.

/// Confirmation and notification surface
pub trait UserPrompt: Send + Sync {
    /// Ask a yes/no question; `true` means the user agreed
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user has to acknowledge
    fn notify(&self, message: &str);
}
