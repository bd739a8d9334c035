//! Relay submissions from the terminal and the contact form.
//!
//! The model emits `Command::SendMail`/`Command::SubmitContact`; here the
//! test plays the logic thread: it awaits the stub mailer and feeds the
//! outcome back as a message.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio_test::{assert_ok, block_on};

use folio::config::Config;
use folio::headless;
use folio::mail::{MailOutcome, MailRequest, Mailer};
use folio::tea::{update, Command, Message, Model, NotificationLevel};
use folio::terminal::Route;
use folio::{Theme, ThemeStore};

use crate::fixtures::{Reply, StubMailer, TerminalHarness};

fn key(code: KeyCode) -> Message {
    Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_line(model: &mut Model, line: &str) -> Vec<Command> {
    for c in line.chars() {
        update(model, key(KeyCode::Char(c)));
    }
    update(model, key(KeyCode::Enter))
}

fn terminal_model() -> Model {
    let mut model = Model::new(Config::default(), ThemeStore::new(Theme::Light), true);
    model.mount_terminal();
    model
}

fn history_lines(model: &Model) -> Vec<String> {
    model
        .terminal
        .as_ref()
        .map(|t| {
            t.session()
                .history()
                .iter()
                .filter_map(|e| match e {
                    folio::terminal::HistoryEntry::Output { lines, .. } => Some(lines.clone()),
                    _ => None,
                })
                .flatten()
                .collect()
        })
        .unwrap_or_default()
}

/// Given a typed sendmail with quoted values
/// When the logic loop delivers it through the mailer
/// Then the terminal shows the status block and, later, the success line
#[test]
fn test_sendmail_through_update_loop() {
    let mailer = StubMailer::new(Reply::Sent);
    let mut model = terminal_model();

    let cmds = type_line(
        &mut model,
        r#"sendmail name="Jane Roe" email=jane@example.com message="Hi there""#,
    );
    let request = match cmds.as_slice() {
        [Command::SendMail(request)] => request.clone(),
        other => panic!("expected one SendMail, got {other:?}"),
    };
    assert_eq!(
        request,
        MailRequest::new(
            "Jane Roe".to_string(),
            "jane@example.com".to_string(),
            "Hi there".to_string()
        )
    );

    let lines = history_lines(&model);
    assert!(lines.contains(&"From: Jane Roe <jane@example.com>".to_string()));
    assert!(lines.contains(&"Sending...".to_string()));

    let outcome = MailOutcome::from_result(block_on(mailer.submit(request)));
    let cmds = update(&mut model, Message::MailDelivered(outcome));
    assert!(cmds.is_empty());
    assert_eq!(
        history_lines(&model).last().map(String::as_str),
        Some("Success: message sent.")
    );
    assert_eq!(mailer.requests().len(), 1);
}

#[test]
fn test_missing_field_prints_usage_without_request() {
    let mut term = TerminalHarness::new();
    let submission = term.run("sendmail name=Jane email=jane@example.com");

    assert!(matches!(
        submission,
        folio::terminal::Submission::Dispatched { effect: None, .. }
    ));
    let lines = term.last_output();
    assert!(lines.contains(&"Usage:".to_string()));
}

#[test]
fn test_unconfigured_reports_missing_key() {
    let mut term = TerminalHarness::with_mail(false);
    term.run("sendmail name=a email=b message=c");

    assert!(term
        .last_output()
        .contains(&"Error: missing FOLIO_ACCESS_KEY in env.".to_string()));

    let mailer = StubMailer::unconfigured();
    assert!(!mailer.is_configured());
    let request = MailRequest::new("a".into(), "b".into(), "c".into());
    let outcome = MailOutcome::from_result(block_on(mailer.submit(request)));
    assert_eq!(outcome, MailOutcome::Unconfigured);
}

#[test]
fn test_relay_rejection_and_network_failure() {
    let rejected = StubMailer::new(Reply::Rejected(Some("Invalid key".to_string())));
    let offline = StubMailer::new(Reply::Offline);
    let request = MailRequest::new("a".into(), "b".into(), "c".into());

    let outcome = MailOutcome::from_result(block_on(rejected.submit(request.clone())));
    assert_eq!(outcome, MailOutcome::Rejected(Some("Invalid key".to_string())));

    let outcome = MailOutcome::from_result(block_on(offline.submit(request)));
    assert!(matches!(outcome, MailOutcome::Network(_)));

    let mut term = TerminalHarness::new();
    term.interp.complete_mail(&outcome);
    term.interp.flush();
    assert_eq!(term.last_output(), vec!["Network error. Please try again.".to_string()]);
}

/// A result arriving after `clear` still lands in the fresh history.
#[test]
fn test_result_after_clear_is_appended() {
    let mut model = terminal_model();
    let cmds = type_line(&mut model, "sendmail name=a email=b@c.d message=hello");
    assert_eq!(cmds.len(), 1);

    if let Some(term) = model.terminal.as_mut() {
        term.flush();
    }
    type_line(&mut model, "clear");
    assert!(history_lines(&model).is_empty());

    update(&mut model, Message::MailDelivered(MailOutcome::Sent));
    assert_eq!(history_lines(&model), vec!["Success: message sent.".to_string()]);
}

/// A result for a terminal that was closed is dropped.
#[test]
fn test_result_after_unmount_is_dropped() {
    let mut model = terminal_model();
    type_line(&mut model, "sendmail name=a email=b@c.d message=hello");
    update(&mut model, key(KeyCode::Esc));
    assert_eq!(model.route, Route::Home);

    let cmds = update(&mut model, Message::MailDelivered(MailOutcome::Sent));
    assert!(cmds.is_empty());
    assert!(model.terminal.is_none());
}

#[test]
fn test_contact_form_result_becomes_notification() {
    let mut model = Model::new(Config::default(), ThemeStore::new(Theme::Light), true);

    update(&mut model, Message::ContactDelivered(MailOutcome::Sent));
    let note = model.notification.clone().expect("notification");
    assert_eq!(note.level, NotificationLevel::Info);
    assert_eq!(note.message, "Thanks! Your message has been sent.");

    update(&mut model, Message::ContactDelivered(MailOutcome::Rejected(None)));
    let note = model.notification.clone().expect("notification");
    assert_eq!(note.level, NotificationLevel::Error);
}

#[test]
fn test_exec_transcript_includes_mail_result() {
    let mailer = StubMailer::new(Reply::Sent);
    let mut interp = folio::Interpreter::new(ThemeStore::new(Theme::Dark), mailer.is_configured());
    let mut out = Vec::new();
    let lines = vec![
        "whoami".to_string(),
        "sendmail name=a email=b@c.d message=hi".to_string(),
    ];

    assert_ok!(block_on(headless::run_script(
        &lines,
        &mut interp,
        &mailer,
        &mut out
    )));

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("whoami"));
    assert!(text.trim_end().ends_with("Success: message sent."));
    assert_eq!(mailer.requests().len(), 1);
}
