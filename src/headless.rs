//! Line-at-a-time interpreter driver for `folio exec`.
//!
//! Output is revealed instantly and mail submissions are awaited inline, so
//! the transcript is complete when [`run_script`] returns.

use std::io::Write;

use crate::content::PROMPT;
use crate::mail::{MailOutcome, Mailer};
use crate::terminal::{Effect, HistoryEntry, Interpreter, Submission};
use crate::{flog, flog_debug, Result};

pub async fn run_script<W: Write>(
    lines: &[String],
    interp: &mut Interpreter,
    mailer: &dyn Mailer,
    out: &mut W,
) -> Result<()> {
    for line in lines {
        let before = interp.session().history().len();
        let submission = interp.submit(line);
        interp.flush();
        write_since(interp, before, out)?;

        let Submission::Dispatched {
            effect: Some(effect),
            ..
        } = submission
        else {
            continue;
        };
        match effect {
            Effect::SendMail(request) => {
                flog_debug!("headless: awaiting submission from {}", request.email);
                let outcome = MailOutcome::from_result(mailer.submit(request).await);
                let before = interp.session().history().len();
                interp.complete_mail(&outcome);
                interp.flush();
                write_since(interp, before, out)?;
            }
            Effect::Navigate(route) => flog!("headless: ignoring navigation to {:?}", route),
            Effect::SetTheme(_) | Effect::ToggleTheme | Effect::ClearHistory => {}
        }
    }
    out.flush()?;
    Ok(())
}

/// Print history entries appended after `before`.
fn write_since<W: Write>(interp: &Interpreter, before: usize, out: &mut W) -> Result<()> {
    let history = interp.session().history();
    for entry in history.iter().skip(before.min(history.len())) {
        match entry {
            HistoryEntry::Input { text, .. } => writeln!(out, "{PROMPT} {text}")?,
            HistoryEntry::Output { lines, .. } => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
        }
    }
    Ok(())
}
