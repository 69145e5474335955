//! Terminal implementation of the `UserPrompt` port

use colored::Colorize;
use dialoguer::{Confirm, Input};

use productos::UserPrompt;

/// dialoguer-backed confirmation and notification
pub struct TerminalPrompt;

impl UserPrompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        match Confirm::new().with_prompt(message).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "confirmation prompt failed, treating as no");
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        eprintln!("{} {}", "!".red().bold(), message.red());

        let ack: Result<String, _> = Input::new()
            .with_prompt("Press Enter to continue")
            .allow_empty(true)
            .interact_text();
        if let Err(e) = ack {
            tracing::warn!(error = %e, "notification acknowledgement failed");
        }
    }
}
