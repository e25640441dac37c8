//! Terminal rendering for click outcomes.

use owo_colors::OwoColorize;
use venue_core::{ClickOutcome, DeleteOutcome};

pub trait Render {
    /// A line to print, or `None` when the outcome has no visible effect.
    fn render(&self) -> Option<String>;
}

impl Render for ClickOutcome {
    fn render(&self) -> Option<String> {
        match self {
            ClickOutcome::Declined => None,
            ClickOutcome::Busy => Some("A delete is already running".yellow().to_string()),
            ClickOutcome::Invoked(outcome) => outcome.render(),
        }
    }
}

impl Render for DeleteOutcome {
    fn render(&self) -> Option<String> {
        match self {
            // The navigator already printed the destination.
            DeleteOutcome::Navigated(_) => None,
            DeleteOutcome::Completed { status } => {
                tracing::debug!(status, "delete completed without redirect");
                None
            }
            // Reported through diagnostics only.
            DeleteOutcome::Failed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_outcomes() {
        assert_eq!(ClickOutcome::Declined.render(), None);
        assert_eq!(ClickOutcome::Invoked(DeleteOutcome::Failed).render(), None);
        assert_eq!(
            ClickOutcome::Invoked(DeleteOutcome::Completed { status: 500 }).render(),
            None
        );
        assert_eq!(
            ClickOutcome::Invoked(DeleteOutcome::Navigated("http://localhost:5000/".into()))
                .render(),
            None
        );
    }

    #[test]
    fn test_busy_is_shown() {
        let line = ClickOutcome::Busy.render().unwrap();
        assert!(line.contains("A delete is already running"));
    }
}
