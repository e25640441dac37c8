//! Terminal host for the venue delete flow.
//!
//! Supplies the pieces `venue_core` leaves to its host: a terminal prompt,
//! a reqwest-backed transport, a navigator that opens the browser, and the
//! configuration file they read from.

pub mod config;
pub mod http;
pub mod navigate;
pub mod prompt;
pub mod trigger;
