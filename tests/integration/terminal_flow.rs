//! Command dispatch and sequencing scenarios.

use folio::content::{PROFILE, PROJECTS, SKILLS};
use folio::mail::MailOutcome;
use folio::terminal::{Submission, Verb, VisibleEntry, COMMAND_SPECS};
use folio::Theme;

use crate::fixtures::TerminalHarness;

/// Given the help command
/// Then one line per registered command names it and its description
#[test]
fn test_help_lists_every_command() {
    let mut term = TerminalHarness::new();
    term.run("help");

    let lines = term.last_output();
    for spec in COMMAND_SPECS {
        assert!(
            lines
                .iter()
                .any(|l| l.contains(spec.name) && l.contains(spec.description)),
            "help is missing '{}'",
            spec.name
        );
    }
}

/// Given neofetch
/// Then it reports the profile, the live theme and the content counts
#[test]
fn test_neofetch_reports_counts_and_theme() {
    let mut term = TerminalHarness::new();
    term.run("theme dark");
    term.run("neofetch");

    let lines = term.last_output();
    assert!(lines.iter().any(|l| l.contains(PROFILE.name)));
    assert!(lines.iter().any(|l| l.contains(PROFILE.role)));
    assert!(lines.iter().any(|l| l.contains("dark")));
    assert!(lines.contains(&format!("Projects: {}", PROJECTS.len())));
    assert!(lines.contains(&format!("Skills: {}", SKILLS.len())));
}

#[test]
fn test_every_verb_appends_one_input_and_at_most_one_output() {
    for spec in COMMAND_SPECS {
        if matches!(spec.verb, Verb::Clear | Verb::Home) {
            continue;
        }
        let mut term = TerminalHarness::new();
        term.run(spec.name);
        assert_eq!(term.count_inputs(), 1, "{}", spec.name);
        assert!(term.count_outputs() <= 1, "{}", spec.name);
    }
}

#[test]
fn test_unknown_verb_message() {
    let mut term = TerminalHarness::new();
    let submission = term.run("rm -rf /");

    assert_eq!(
        submission,
        Submission::Dispatched {
            verb: None,
            effect: None
        }
    );
    assert_eq!(
        term.last_output(),
        vec!["Command not found: rm. Type 'help' for a list of commands.".to_string()]
    );
}

#[test]
fn test_verbs_are_case_sensitive() {
    let mut term = TerminalHarness::new();
    term.run("HELP");
    assert!(term.last_output()[0].starts_with("Command not found: HELP."));
}

#[test]
fn test_blank_lines_never_recorded() {
    let mut term = TerminalHarness::new();
    for line in ["", "   ", "\t"] {
        assert_eq!(term.run(line), Submission::Ignored);
    }
    assert!(term.history().is_empty());
}

#[test]
fn test_clear_empties_history() {
    let mut term = TerminalHarness::new();
    term.run("about");
    term.run("skills");
    term.run("clear");

    assert!(term.history().is_empty());
    assert!(!term.interp.is_executing());
}

#[test]
fn test_theme_commands() {
    let mut term = TerminalHarness::new();

    term.run("theme dark");
    assert_eq!(term.theme.get(), Theme::Dark);
    term.run("theme dark");
    assert_eq!(term.theme.get(), Theme::Dark);
    term.run("theme light");
    assert_eq!(term.theme.get(), Theme::Light);

    term.run("theme");
    assert_eq!(term.theme.get(), Theme::Dark);
    term.run("theme purple");
    assert_eq!(term.theme.get(), Theme::Light);
}

/// Output entries are revealed strictly in order and input is refused until
/// the last one finishes.
#[test]
fn test_sequencing_blocks_input_until_done() {
    let mut term = TerminalHarness::new();
    term.interp.submit("whoami");
    assert!(term.interp.is_executing());
    assert_eq!(term.interp.submit("about"), Submission::Blocked);

    let mut saw_typing = false;
    for _ in 0..10_000 {
        if !term.interp.tick(1) {
            break;
        }
        saw_typing |= term
            .interp
            .session()
            .visible()
            .iter()
            .any(|e| matches!(e, VisibleEntry::Output { typing: true, .. }));
    }

    assert!(saw_typing);
    assert!(!term.interp.is_executing());
    assert_eq!(term.count_inputs(), 1);
}

#[test]
fn test_revealed_output_matches_history() {
    let mut term = TerminalHarness::new();
    term.interp.submit("projects");
    while term.interp.tick(7) {}

    let visible = term.interp.session().visible();
    match visible.last() {
        Some(VisibleEntry::Output { lines, typing, .. }) => {
            assert!(!typing);
            assert_eq!(lines, &term.last_output());
        }
        other => panic!("expected finished output, got {other:?}"),
    }
}

/// Given a sendmail whose result arrives while a newer entry is still typing
/// Then the result waits its turn and ends up last
#[test]
fn test_mail_result_queues_behind_typing_entry() {
    let mut term = TerminalHarness::new();
    term.run("sendmail name=a email=b@c.d message=hi");
    term.interp.submit("help");
    assert!(term.interp.is_executing());

    term.interp.complete_mail(&MailOutcome::Sent);
    let hidden = !term.interp.session().visible().iter().any(|e| {
        matches!(e, VisibleEntry::Output { lines, .. }
            if lines.iter().any(|l| l == "Success: message sent."))
    });
    assert!(hidden, "result shown before help finished");
    assert!(term.interp.is_executing());

    while term.interp.tick(50) {}

    assert!(!term.interp.is_executing());
    assert_eq!(term.last_output(), vec!["Success: message sent.".to_string()]);
    match term.interp.session().visible().last() {
        Some(VisibleEntry::Output { lines, typing, .. }) => {
            assert!(!typing);
            assert_eq!(lines, &vec!["Success: message sent.".to_string()]);
        }
        other => panic!("expected mail result last, got {other:?}"),
    }
}
