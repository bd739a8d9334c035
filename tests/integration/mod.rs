//! Integration test suite for folio.
//!
//! These tests drive the interpreter and the TEA update loop through the
//! public API, the way the TUI and `folio exec` do.
//!
//! # Test Categories
//!
//! - `terminal_flow`: command dispatch, sequencing and history scenarios
//! - `sendmail`: relay submissions end to end with a stub mailer
//! - `preferences`: config file and theme persistence
//!
//! # CI Compatibility
//!
//! No test talks to the real form relay; remote responses are simulated.

mod fixtures;

mod preferences;
mod sendmail;
mod terminal_flow;
