//! Test fixtures for integration tests.
//!
//! Provides helpers for:
//! - A scripted `Mailer` that records every request
//! - An interpreter harness with output accessors

use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;

use folio::mail::{Delivery, MailRequest, Mailer};
use folio::terminal::{HistoryEntry, Interpreter, Submission};
use folio::{Error, Result, Theme, ThemeStore};

/// What the stub relay answers.
#[derive(Debug, Clone)]
pub enum Reply {
    Sent,
    Rejected(Option<String>),
    /// Transport failure before any response.
    Offline,
}

/// Mailer double: never touches the network.
pub struct StubMailer {
    configured: bool,
    reply: Reply,
    requests: Arc<Mutex<Vec<MailRequest>>>,
}

impl StubMailer {
    pub fn new(reply: Reply) -> Self {
        Self {
            configured: true,
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new(Reply::Sent)
        }
    }

    pub fn requests(&self) -> Vec<MailRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Mailer for StubMailer {
    fn is_configured(&self) -> bool {
        self.configured
    }

    fn submit(&self, request: MailRequest) -> BoxFuture<'static, Result<Delivery>> {
        self.requests.lock().unwrap().push(request);
        let configured = self.configured;
        let reply = self.reply.clone();
        Box::pin(async move {
            if !configured {
                return Err(Error::MissingAccessKey);
            }
            match reply {
                Reply::Sent => Ok(Delivery::Sent),
                Reply::Rejected(reason) => Ok(Delivery::Rejected(reason)),
                Reply::Offline => Err(Error::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "relay unreachable",
                ))),
            }
        })
    }
}

/// An interpreter with convenience accessors.
pub struct TerminalHarness {
    pub interp: Interpreter,
    pub theme: ThemeStore,
}

impl TerminalHarness {
    pub fn new() -> Self {
        Self::with_mail(true)
    }

    pub fn with_mail(mail_configured: bool) -> Self {
        let theme = ThemeStore::new(Theme::Light);
        Self {
            interp: Interpreter::new(theme.clone(), mail_configured),
            theme,
        }
    }

    /// Submit a line and reveal its output immediately.
    pub fn run(&mut self, line: &str) -> Submission {
        let submission = self.interp.submit(line);
        self.interp.flush();
        submission
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.interp.session().history()
    }

    /// Lines of the most recent output entry.
    pub fn last_output(&self) -> Vec<String> {
        self.history()
            .iter()
            .rev()
            .find_map(|e| match e {
                HistoryEntry::Output { lines, .. } => Some(lines.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn count_inputs(&self) -> usize {
        self.history()
            .iter()
            .filter(|e| matches!(e, HistoryEntry::Input { .. }))
            .count()
    }

    pub fn count_outputs(&self) -> usize {
        self.history()
            .iter()
            .filter(|e| matches!(e, HistoryEntry::Output { .. }))
            .count()
    }
}
