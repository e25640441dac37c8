//! The yes/no gate in front of the delete action.

/// Fixed text shown to the user before anything is deleted.
pub const CONFIRM_PROMPT: &str = "Are you sure?";

/// A blocking yes/no prompt.
///
/// Returning `false` is a decline, never an error. Implementations that
/// can fail to ask (no terminal, closed stdin) report that as a decline.
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Answers yes without asking. Used when the caller already agreed
/// (e.g. `--force`).
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_sees_prompt() {
        let gate = |message: &str| message == CONFIRM_PROMPT;
        assert!(gate.confirm(CONFIRM_PROMPT));
        assert!(!gate.confirm("Delete everything?"));
    }

    #[test]
    fn test_always_confirm() {
        assert!(AlwaysConfirm.confirm(CONFIRM_PROMPT));
    }
}
