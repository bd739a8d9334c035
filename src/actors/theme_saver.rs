//! Persists the theme preference whenever it changes.

use std::path::PathBuf;

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::tea::Message;
use crate::theme::Theme;
use crate::util::blocking;
use crate::{flog_debug, flog_error};

use super::ActorHandle;

pub struct ThemeSaverActor {
    msg_tx: mpsc::UnboundedSender<Message>,
    theme_rx: watch::Receiver<Theme>,
    path: PathBuf,
}

impl ThemeSaverActor {
    pub fn new(
        msg_tx: mpsc::UnboundedSender<Message>,
        theme_rx: watch::Receiver<Theme>,
        path: PathBuf,
    ) -> Self {
        Self {
            msg_tx,
            theme_rx,
            path,
        }
    }

    pub fn spawn(mut self) -> ActorHandle {
        let cancel = CancellationToken::new();
        let cancel_clone = cancel.clone();

        flog_debug!("ThemeSaverActor::spawn path={}", self.path.display());

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = cancel_clone.cancelled() => {
                        flog_debug!("ThemeSaverActor cancelled");
                        break;
                    }
                    changed = self.theme_rx.changed() => {
                        if changed.is_err() {
                            flog_debug!("ThemeSaverActor: theme store dropped");
                            break;
                        }
                        let theme = *self.theme_rx.borrow_and_update();
                        let path = self.path.clone();
                        let msg = match blocking(move || Config::store_theme(&path, theme)).await {
                            Ok(()) => Message::ThemeSaved(theme),
                            Err(e) => {
                                flog_error!("Theme save failed: {}", e);
                                Message::ThemeSaveFailed(e.to_string())
                            }
                        };
                        if self.msg_tx.send(msg).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        ActorHandle::new(cancel)
    }
}
