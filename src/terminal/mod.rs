//! The terminal view's command interpreter.
//!
//! - `args`: `key=value` extraction for `sendmail`
//! - `commands`: closed verb registry and pure handlers
//! - `format`: output layouts
//! - `typewriter`: per-entry reveal state machine
//! - `session`: history, input buffer and sequencing
//!
//! [`Interpreter`] glues these together. It applies the effects that belong
//! to the session (clear, theme) and hands the rest back to the caller.

pub mod args;
pub mod commands;
pub mod format;
pub mod session;
pub mod typewriter;

pub use commands::{CommandContext, CommandSpec, Effect, Route, StyleHint, Verb, COMMAND_SPECS};
pub use session::{EntryId, HistoryEntry, Session, VisibleEntry};

use crate::mail::MailOutcome;
use crate::theme::ThemeStore;
use crate::{flog, flog_debug};

/// Result of handing a line to the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank line; nothing recorded.
    Ignored,
    /// Output is still being sequenced; input is not accepted.
    Blocked,
    /// The line was recorded. `verb` is `None` for unknown commands.
    Dispatched {
        verb: Option<Verb>,
        effect: Option<Effect>,
    },
}

/// One per mounted terminal view.
#[derive(Debug)]
pub struct Interpreter {
    session: Session,
    theme: ThemeStore,
    mail_configured: bool,
}

impl Interpreter {
    pub fn new(theme: ThemeStore, mail_configured: bool) -> Self {
        Self {
            session: Session::new(),
            theme,
            mail_configured,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_executing(&self) -> bool {
        self.session.is_executing()
    }

    pub fn current_input(&self) -> &str {
        &self.session.current_input
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_executing() {
            self.session.current_input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if !self.is_executing() {
            self.session.current_input.pop();
        }
    }

    /// Submit whatever is in the input buffer.
    pub fn submit_current(&mut self) -> Submission {
        if self.is_executing() {
            return Submission::Blocked;
        }
        let line = std::mem::take(&mut self.session.current_input);
        self.submit(&line)
    }

    pub fn submit(&mut self, raw: &str) -> Submission {
        if self.is_executing() {
            return Submission::Blocked;
        }
        self.session.current_input.clear();

        let line = raw.trim();
        if line.is_empty() {
            return Submission::Ignored;
        }
        self.session.push_input(line.to_string());

        let (verb_token, rest) = split_verb(line);
        let Some(verb) = Verb::lookup(verb_token) else {
            flog_debug!("Interpreter: unknown verb {:?}", verb_token);
            self.session.push_output(format::not_found(verb_token), None);
            return Submission::Dispatched {
                verb: None,
                effect: None,
            };
        };

        let ctx = CommandContext {
            theme: self.theme.get(),
            mail_configured: self.mail_configured,
        };
        let outcome = commands::execute(verb, rest, &ctx);
        flog_debug!(
            "Interpreter: {} -> {} lines, effect={:?}",
            verb.name(),
            outcome.lines.len(),
            outcome.effect
        );

        if let Some(effect) = &outcome.effect {
            self.apply(effect);
        }
        if !outcome.lines.is_empty() {
            self.session.push_output(outcome.lines, outcome.style);
        }

        Submission::Dispatched {
            verb: Some(verb),
            effect: outcome.effect,
        }
    }

    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::ClearHistory => self.session.clear(),
            Effect::SetTheme(theme) => {
                self.theme.set(*theme);
            }
            Effect::ToggleTheme => {
                self.theme.toggle();
            }
            Effect::Navigate(_) | Effect::SendMail(_) => {}
        }
    }

    /// Append the result of a `sendmail` submission. May land after newer
    /// entries, or into a history cleared in the meantime.
    pub fn complete_mail(&mut self, outcome: &MailOutcome) -> EntryId {
        flog!("Interpreter: sendmail finished: {:?}", outcome);
        self.session.push_output(format::mail_outcome(outcome), None)
    }

    pub fn tick(&mut self, budget: usize) -> bool {
        self.session.tick(budget)
    }

    /// Skip all typing.
    pub fn flush(&mut self) {
        self.session.finish_all();
    }
}

/// Split off the first whitespace-delimited token.
fn split_verb(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(idx) => (&line[..idx], line[idx..].trim_start()),
        None => (line, ""),
    }
}
