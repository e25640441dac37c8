//! Binding the delete flow to the element that triggers it.
//!
//! The host calls [`DeleteButton::bind`] once its content is ready and
//! forwards every activation to [`DeleteButton::click`].

use std::sync::atomic::{AtomicBool, Ordering};

use crate::confirm::{CONFIRM_PROMPT, Confirm};
use crate::delete::{DeleteOutcome, DeleteVenue};

/// Data attribute holding the venue id.
pub const ID_ATTRIBUTE: &str = "id";

/// The triggering element, reduced to the auxiliary data it carries.
pub trait Element: Send + Sync {
    fn data(&self, key: &str) -> Option<String>;
}

/// Result of one activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The user said no; nothing was sent.
    Declined,
    /// Single-flight is enabled and a previous request has not finished.
    Busy,
    Invoked(DeleteOutcome),
}

pub struct DeleteButton {
    element: Box<dyn Element>,
    confirm: Box<dyn Confirm>,
    action: DeleteVenue,
    in_flight: Option<AtomicBool>,
}

impl DeleteButton {
    pub fn bind(
        element: impl Element + 'static,
        confirm: impl Confirm + 'static,
        action: DeleteVenue,
    ) -> Self {
        DeleteButton {
            element: Box::new(element),
            confirm: Box::new(confirm),
            action,
            in_flight: None,
        }
    }

    /// Ignore activations while a request is still running.
    ///
    /// Without this, two quick clicks send two DELETE requests.
    pub fn with_single_flight(mut self) -> Self {
        self.in_flight = Some(AtomicBool::new(false));
        self
    }

    pub async fn click(&self) -> ClickOutcome {
        let _guard = match &self.in_flight {
            Some(flag) => match InFlight::acquire(flag) {
                Some(guard) => Some(guard),
                None => {
                    tracing::debug!("delete already in flight, ignoring click");
                    return ClickOutcome::Busy;
                }
            },
            None => None,
        };

        if !self.confirm.confirm(CONFIRM_PROMPT) {
            return ClickOutcome::Declined;
        }

        // Read at click time; a missing attribute is sent as an empty id.
        let venue_id = self.element.data(ID_ATTRIBUTE).unwrap_or_default();

        ClickOutcome::Invoked(self.action.invoke(&venue_id).await)
    }
}

/// Holds the in-flight flag until dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
