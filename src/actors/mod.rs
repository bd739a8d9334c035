//! Actor system for background tasks.
//!
//! Each actor is an independent tokio task that talks to the logic thread
//! only through its message channel:
//! - Typewriter ticks while the terminal view is mounted (TickerActor)
//! - Theme persistence whenever the shared preference changes (ThemeSaverActor)
//!
//! Keyboard input is read synchronously in the logic thread.

pub mod theme_saver;
pub mod ticker;

use tokio_util::sync::CancellationToken;

pub use theme_saver::ThemeSaverActor;
pub use ticker::TickerActor;

/// Handle to a running actor, used for shutdown.
pub struct ActorHandle {
    cancel: CancellationToken,
}

impl ActorHandle {
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ActorHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
