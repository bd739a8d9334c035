//! Messages for the TEA (The Elm Architecture) pattern.
//!
//! Messages are inputs to the update function - they come from external sources
//! like keyboard events, background actors, or command completion callbacks.

use crossterm::event::KeyEvent;

use crate::mail::MailOutcome;
use crate::theme::Theme;

/// Input messages to the update function.
#[derive(Debug)]
pub enum Message {
    // Keyboard/terminal events
    Key(KeyEvent),
    Resize(u16, u16),

    // From background actors
    /// Typewriter frame while the terminal view is mounted.
    Tick,
    /// The shared theme changed and was written to disk.
    ThemeSaved(Theme),
    ThemeSaveFailed(String),

    // Command completion callbacks
    /// A `sendmail` typed in the terminal view finished.
    MailDelivered(MailOutcome),
    /// A homepage contact form submission finished.
    ContactDelivered(MailOutcome),
}
