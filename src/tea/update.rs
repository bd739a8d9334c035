//! Pure update function for the TEA (The Elm Architecture) pattern.
//!
//! The update function takes a model and a message, mutates the model,
//! and returns a list of commands to execute.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::mail::MailOutcome;
use crate::terminal::{Effect, Route, Submission};
use crate::{flog, flog_debug, flog_warn};

use super::command::Command;
use super::message::Message;
use super::model::{Field, Mode, Model, Notification, NotificationLevel, Section};

/// Helper to set an error notification and mark model as dirty.
fn set_error(model: &mut Model, message: String) {
    flog_warn!("UI Error: {}", message);
    model.notification = Some(Notification {
        level: NotificationLevel::Error,
        message,
    });
    model.dirty = true;
}

fn set_info(model: &mut Model, message: String) {
    model.notification = Some(Notification {
        level: NotificationLevel::Info,
        message,
    });
    model.dirty = true;
}

/// Pure update function: Model + Message → Commands
///
/// All I/O happens via the returned Commands.
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            model.notification = None; // Clear notification on any key press
            model.dirty = true; // Keyboard input always triggers render
            match (model.route, model.mode) {
                (Route::Terminal, _) => update_terminal(model, key, &mut cmds),
                (Route::Home, Mode::Browse) => update_browse_mode(model, key, &mut cmds),
                (Route::Home, Mode::Form(field)) => {
                    update_form_mode(model, key, field, &mut cmds)
                }
            }
        }

        Message::Resize(_, _) => {
            model.dirty = true; // Resize triggers re-render
        }

        Message::Tick => {
            let budget = model.config.effective_type_speed();
            if let Some(term) = model.terminal.as_mut() {
                if term.tick(budget) {
                    model.dirty = true;
                }
            }
        }

        Message::ThemeSaved(theme) => {
            flog_debug!("Message::ThemeSaved theme={}", theme);
            model.dirty = true;
        }

        Message::ThemeSaveFailed(err) => {
            set_error(model, format!("Failed to save theme: {}", err));
        }

        Message::MailDelivered(outcome) => match model.terminal.as_mut() {
            Some(term) => {
                term.complete_mail(&outcome);
                model.dirty = true;
            }
            None => {
                flog!("Message::MailDelivered after terminal closed: {:?}", outcome);
            }
        },

        Message::ContactDelivered(outcome) => {
            flog!("Message::ContactDelivered {:?}", outcome);
            let notice = outcome.contact_notice();
            if outcome.is_success() {
                set_info(model, notice);
            } else {
                set_error(model, notice);
            }
        }
    }

    cmds
}

fn update_browse_mode(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            model.section = model.section.next();
        }

        KeyCode::Char('k') | KeyCode::Up => {
            model.section = model.section.prev();
        }

        KeyCode::Enter => match model.section {
            Section::Terminal => open_terminal(model, cmds),
            Section::Contact => open_form(model),
            _ => {}
        },

        KeyCode::Char(':') => open_terminal(model, cmds),

        KeyCode::Char('t') => {
            let now = model.theme.toggle();
            flog_debug!("Homepage theme toggle -> {}", now);
        }

        KeyCode::Char('q') | KeyCode::Esc => {
            cmds.push(Command::Quit);
        }

        KeyCode::Char('?') => {
            model.show_keymap = !model.show_keymap;
        }

        _ => {}
    }
}

fn update_form_mode(model: &mut Model, key: KeyEvent, field: Field, cmds: &mut Vec<Command>) {
    match key.code {
        KeyCode::Enter => {
            store_current_field(model, field);
            if let Some(missing) = model.form.first_missing() {
                model.mode = Mode::Form(missing);
                load_field_buffer(model, missing);
                set_error(model, "Please fill in all fields.".to_string());
                return;
            }
            if !model.mail_configured {
                model.mode = Mode::Browse;
                set_error(model, MailOutcome::Unconfigured.contact_notice());
                return;
            }
            if let Some(request) = model.form.to_request() {
                model.form = Default::default();
                model.mode = Mode::Browse;
                set_info(model, "Sending...".to_string());
                cmds.push(Command::SubmitContact(request));
            }
        }

        KeyCode::Tab => {
            let next = field.next();
            store_current_field(model, field);
            model.mode = Mode::Form(next);
            load_field_buffer(model, next);
        }

        KeyCode::Esc => {
            model.input_buffer.clear();
            model.mode = Mode::Browse;
        }

        KeyCode::Backspace => {
            model.input_buffer.pop();
        }

        KeyCode::Char(c) => {
            model.input_buffer.push(c);
        }

        _ => {}
    }
}

fn update_terminal(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        cmds.push(Command::Quit);
        return;
    }
    if key.code == KeyCode::Esc {
        close_terminal(model, cmds);
        return;
    }

    let Some(term) = model.terminal.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Char(c) => term.push_char(c),
        KeyCode::Backspace => term.pop_char(),
        KeyCode::Enter => match term.submit_current() {
            Submission::Dispatched {
                effect: Some(effect),
                ..
            } => apply_effect(model, effect, cmds),
            Submission::Blocked => flog_debug!("Terminal busy; Enter ignored"),
            _ => {}
        },
        _ => {}
    }
}

/// Effects the interpreter leaves to the application.
fn apply_effect(model: &mut Model, effect: Effect, cmds: &mut Vec<Command>) {
    match effect {
        Effect::Navigate(Route::Home) => close_terminal(model, cmds),
        Effect::SendMail(request) => cmds.push(Command::SendMail(request)),
        Effect::Navigate(Route::Terminal)
        | Effect::SetTheme(_)
        | Effect::ToggleTheme
        | Effect::ClearHistory => {}
    }
}

fn open_terminal(model: &mut Model, cmds: &mut Vec<Command>) {
    flog_debug!("Mounting terminal view");
    model.mount_terminal();
    cmds.push(Command::StartTicker);
}

fn close_terminal(model: &mut Model, cmds: &mut Vec<Command>) {
    flog_debug!("Unmounting terminal view");
    model.unmount_terminal();
    model.section = Section::Home;
    cmds.push(Command::StopTicker);
}

fn open_form(model: &mut Model) {
    model.mode = Mode::Form(Field::Name);
    load_field_buffer(model, Field::Name);
}

/// Store current input buffer into the form field being edited.
fn store_current_field(model: &mut Model, field: Field) {
    let value = std::mem::take(&mut model.input_buffer);
    model.form.set(field, value);
}

/// Load a form field into the input buffer.
fn load_field_buffer(model: &mut Model, field: Field) {
    model.input_buffer = model.form.get(field).to_string();
}
