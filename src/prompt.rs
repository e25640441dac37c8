use dialoguer::Confirm as Prompt;
use venue_core::Confirm;

/// Asks on the terminal. Defaults to "no".
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        match Prompt::new().with_prompt(message).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "could not read confirmation, treating as declined");
                false
            }
        }
    }
}
