//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - they represent side effects
//! to be executed by the runtime.

use crate::mail::MailRequest;

/// Output commands from the update function.
/// These represent side effects that need to be executed.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    // Terminal view lifecycle
    StartTicker,
    StopTicker,

    // Relay submissions (spawn async tasks)
    SendMail(MailRequest),
    SubmitContact(MailRequest),

    // App lifecycle
    Quit,
}
