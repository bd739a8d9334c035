//! Ticker actor driving the typewriter reveal.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::flog_debug;
use crate::tea::Message;

use super::ActorHandle;

pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Sends `Message::Tick` at a fixed rate until cancelled.
pub struct TickerActor {
    msg_tx: mpsc::UnboundedSender<Message>,
    interval: Duration,
}

impl TickerActor {
    pub fn new(msg_tx: mpsc::UnboundedSender<Message>) -> Self {
        Self {
            msg_tx,
            interval: TICK_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn spawn(self) -> ActorHandle {
        let cancel = CancellationToken::new();
        let cancel_clone = cancel.clone();

        flog_debug!("TickerActor::spawn interval={:?}", self.interval);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            // Late ticks are dropped, not replayed in a burst.
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = cancel_clone.cancelled() => {
                        flog_debug!("TickerActor cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        if self.msg_tx.send(Message::Tick).is_err() {
                            flog_debug!("TickerActor: message channel closed");
                            break;
                        }
                    }
                }
            }
        });

        ActorHandle::new(cancel)
    }
}
