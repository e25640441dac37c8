//! Core types for deleting a venue.
//!
//! This crate holds the behavior shared by every host of the delete flow:
//! - `confirm` for the yes/no gate in front of the action
//! - `delete` for issuing `DELETE /venues/{id}` and following redirects
//! - `trigger` for binding the flow to the element that carries the id
//!
//! Hosts plug in their own prompt, HTTP transport and navigator through
//! the traits exported here.

pub mod confirm;
pub mod delete;
pub mod error;
pub mod trigger;

pub use confirm::{AlwaysConfirm, CONFIRM_PROMPT, Confirm};
pub use delete::{
    DeleteOutcome, DeleteResponse, DeleteVenue, Diagnostics, Navigator, TracingDiagnostics,
    Transport, VENUES_PATH, venue_path,
};
pub use error::TransportError;
pub use trigger::{ClickOutcome, DeleteButton, Element, ID_ATTRIBUTE};
