use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Sender, TrySendError};
use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::actors::{ActorHandle, ThemeSaverActor, TickerActor};
use crate::config::Config;
use crate::mail::{MailOutcome, MailRequest, Mailer};
use crate::render::RenderState;
use crate::tea::{update, Command, Message, Model};
use crate::theme::ThemeStore;
use crate::{flog_debug, flog_trace, flog_warn, Result};

const MAX_BG_MESSAGES: usize = 50;

pub struct LogicThread;

impl LogicThread {
    pub fn run(
        config: Config,
        theme: ThemeStore,
        mailer: Arc<dyn Mailer>,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        Runtime::new()?.block_on(Self::run_async(config, theme, mailer, state_tx, shutdown))
    }

    async fn run_async(
        config: Config,
        theme: ThemeStore,
        mailer: Arc<dyn Mailer>,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        flog_debug!(
            "LogicThread::run_async endpoint={} mail_configured={}",
            config.effective_endpoint(),
            mailer.is_configured()
        );
        let mut model = Model::new(config, theme, mailer.is_configured());

        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();
        let mut actors = Actors::spawn(&model, msg_tx.clone());

        send_state(&state_tx, &mut model);

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Keyboard input (priority)
            while event::poll(Duration::ZERO)? {
                let msg = match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => Message::Key(key),
                    Event::Resize(w, h) => Message::Resize(w, h),
                    _ => continue,
                };

                for cmd in update(&mut model, msg) {
                    if execute_command(cmd, &msg_tx, &mailer, &mut actors) {
                        shutdown.store(true, Ordering::Relaxed);
                        actors.shutdown();
                        return Ok(());
                    }
                }

                if model.dirty {
                    send_state(&state_tx, &mut model);
                }
            }

            // Background messages (bounded)
            for _ in 0..MAX_BG_MESSAGES {
                let Ok(msg) = msg_rx.try_recv() else { break };
                for cmd in update(&mut model, msg) {
                    if execute_command(cmd, &msg_tx, &mailer, &mut actors) {
                        shutdown.store(true, Ordering::Relaxed);
                        actors.shutdown();
                        return Ok(());
                    }
                }
            }

            // Also retries a snapshot the render thread had no room for.
            if model.dirty {
                send_state(&state_tx, &mut model);
            }

            tokio::time::sleep(Duration::from_micros(500)).await;
        }

        actors.shutdown();
        Ok(())
    }
}

/// Long-lived theme saver plus the ticker that only runs while the terminal
/// view is mounted.
struct Actors {
    theme_saver: Option<ActorHandle>,
    ticker: Option<ActorHandle>,
}

impl Actors {
    fn spawn(model: &Model, msg_tx: mpsc::UnboundedSender<Message>) -> Self {
        let theme_saver = match Config::config_path() {
            Ok(path) => Some(ThemeSaverActor::new(msg_tx, model.theme.subscribe(), path).spawn()),
            Err(e) => {
                flog_warn!("Theme preference will not be saved: {}", e);
                None
            }
        };
        Self {
            theme_saver,
            ticker: None,
        }
    }

    fn shutdown(&mut self) {
        flog_debug!("Shutting down actors");
        for actor in [self.theme_saver.take(), self.ticker.take()].into_iter().flatten() {
            actor.shutdown();
        }
    }
}

/// Returns true when the app should exit.
fn execute_command(
    cmd: Command,
    msg_tx: &mpsc::UnboundedSender<Message>,
    mailer: &Arc<dyn Mailer>,
    actors: &mut Actors,
) -> bool {
    match cmd {
        Command::StartTicker => {
            flog_debug!("Command::StartTicker");
            actors.ticker = Some(TickerActor::new(msg_tx.clone()).spawn());
        }

        Command::StopTicker => {
            flog_debug!("Command::StopTicker");
            if let Some(ticker) = actors.ticker.take() {
                ticker.shutdown();
            }
        }

        Command::SendMail(request) => {
            flog_debug!("Command::SendMail from={}", request.email);
            spawn_submission(mailer, request, msg_tx.clone(), Message::MailDelivered);
        }

        Command::SubmitContact(request) => {
            flog_debug!("Command::SubmitContact from={}", request.email);
            spawn_submission(mailer, request, msg_tx.clone(), Message::ContactDelivered);
        }

        Command::Quit => {
            flog_debug!("Command::Quit");
            return true;
        }
    }

    false
}

fn spawn_submission(
    mailer: &Arc<dyn Mailer>,
    request: MailRequest,
    tx: mpsc::UnboundedSender<Message>,
    wrap: fn(MailOutcome) -> Message,
) {
    let submission = mailer.submit(request);
    tokio::spawn(async move {
        let outcome = MailOutcome::from_result(submission.await);
        let _ = tx.send(wrap(outcome));
    });
}

/// Offer a snapshot to the render thread. The model stays dirty while the
/// channel is full so the next loop iteration sends a fresh one.
fn send_state(state_tx: &Sender<RenderState>, model: &mut Model) {
    match state_tx.try_send(model.snapshot()) {
        Ok(()) => model.dirty = false,
        Err(TrySendError::Full(_)) => flog_trace!("Render channel full; snapshot deferred"),
        Err(TrySendError::Disconnected(_)) => {
            flog_debug!("Render thread gone; dropping snapshot");
            model.dirty = false;
        }
    }
}
