//! Model for the TEA (The Elm Architecture) pattern.
//!
//! The Model is pure application state - no channels, no handles, no runtime infrastructure.

use crate::config::Config;
use crate::mail::MailRequest;
use crate::render::{next_version, RenderState, TerminalView};
use crate::terminal::{Interpreter, Route};
use crate::theme::ThemeStore;

/// Level of a notification message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Error notification - displayed in red with "Error:" prefix
    Error,
    /// Informational notification - displayed in green
    Info,
}

/// A notification message to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The severity level of the notification
    pub level: NotificationLevel,
    /// The notification message text
    pub message: String,
}

/// Homepage sidebar entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Education,
    Skills,
    Projects,
    Contact,
    Terminal,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Contact,
        Section::Terminal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
            Section::Terminal => "Terminal",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.index().checked_sub(1).unwrap_or(Self::ALL.len() - 1);
        Self::ALL[idx]
    }
}

/// Homepage UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse,
    Form(Field),
}

/// Contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Cycle to next input field (Tab behavior).
    pub fn next(&self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// First field left blank, if any.
    pub fn first_missing(&self) -> Option<Field> {
        [Field::Name, Field::Email, Field::Message]
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
    }

    pub fn to_request(&self) -> Option<MailRequest> {
        if self.first_missing().is_some() {
            return None;
        }
        Some(MailRequest::new(
            self.name.trim().to_string(),
            self.email.trim().to_string(),
            self.message.trim().to_string(),
        ))
    }
}

/// Pure application state - the single source of truth.
pub struct Model {
    // Core state
    pub route: Route,
    pub section: Section,
    pub mode: Mode,

    // Homepage contact form
    pub form: ContactForm,
    pub input_buffer: String,

    /// Exists only while the terminal view is mounted.
    pub terminal: Option<Interpreter>,

    pub notification: Option<Notification>,

    // UI toggle state
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,

    // Shared with every mounted interpreter
    pub theme: ThemeStore,

    // Config (immutable after init)
    pub config: Config,
    pub mail_configured: bool,
}

impl Model {
    pub fn new(config: Config, theme: ThemeStore, mail_configured: bool) -> Self {
        Self {
            route: Route::Home,
            section: Section::default(),
            mode: Mode::default(),
            form: ContactForm::default(),
            input_buffer: String::new(),
            terminal: None,
            notification: None,
            show_keymap: false,
            dirty: true,
            theme,
            config,
            mail_configured,
        }
    }

    /// Switch to the terminal view with a fresh session.
    pub fn mount_terminal(&mut self) {
        self.route = Route::Terminal;
        self.terminal = Some(Interpreter::new(self.theme.clone(), self.mail_configured));
        self.dirty = true;
    }

    /// Leave the terminal view. Its session is discarded.
    pub fn unmount_terminal(&mut self) {
        self.route = Route::Home;
        self.terminal = None;
        self.dirty = true;
    }

    /// Create an immutable snapshot for the render thread.
    ///
    /// Each snapshot gets a monotonically increasing version number, letting
    /// the render thread skip redundant frames.
    pub fn snapshot(&self) -> RenderState {
        let terminal = self.terminal.as_ref().map(|term| TerminalView {
            entries: term.session().visible(),
            input: term.current_input().to_string(),
            is_executing: term.is_executing(),
        });

        RenderState {
            version: next_version(),
            route: self.route,
            theme: self.theme.get(),
            section: self.section,
            mode: self.mode,
            form: self.form.clone(),
            input_buffer: self.input_buffer.clone(),
            notification: self.notification.clone(),
            show_keymap: self.show_keymap,
            terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn test_model() -> Model {
        Model::new(Config::default(), ThemeStore::new(Theme::Light), true)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Section Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_section_next_wraps() {
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Terminal.next(), Section::Home);
    }

    #[test]
    fn test_section_prev_wraps() {
        assert_eq!(Section::About.prev(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Terminal);
    }

    #[test]
    fn test_section_labels_unique() {
        let mut labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Section::ALL.len());
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Contact Form Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_field_next_cycles() {
        assert_eq!(Field::Name.next(), Field::Email);
        assert_eq!(Field::Email.next(), Field::Message);
        assert_eq!(Field::Message.next(), Field::Name);
    }

    #[test]
    fn test_form_first_missing() {
        let mut form = ContactForm::default();
        assert_eq!(form.first_missing(), Some(Field::Name));
        form.set(Field::Name, "Ada".into());
        form.set(Field::Email, "   ".into());
        assert_eq!(form.first_missing(), Some(Field::Email));
    }

    #[test]
    fn test_form_to_request_trims() {
        let form = ContactForm {
            name: " Ada ".into(),
            email: "ada@example.com".into(),
            message: "hi\n".into(),
        };
        let req = form.to_request().unwrap();
        assert_eq!(req.name, "Ada");
        assert_eq!(req.message, "hi");
        assert!(ContactForm::default().to_request().is_none());
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Mount / Snapshot Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_mount_creates_fresh_session() {
        let mut model = test_model();
        model.mount_terminal();
        model.terminal.as_mut().unwrap().submit("whoami");
        model.unmount_terminal();
        assert!(model.terminal.is_none());
        assert_eq!(model.route, Route::Home);

        model.mount_terminal();
        assert!(model.terminal.as_ref().unwrap().session().history().is_empty());
    }

    #[test]
    fn test_snapshot_reflects_terminal() {
        let mut model = test_model();
        assert!(model.snapshot().terminal.is_none());

        model.mount_terminal();
        model.terminal.as_mut().unwrap().push_char('h');
        let snapshot = model.snapshot();
        assert_eq!(snapshot.route, Route::Terminal);
        assert_eq!(snapshot.terminal.unwrap().input, "h");
    }

    #[test]
    fn test_snapshot_reads_shared_theme() {
        let model = test_model();
        model.theme.set(Theme::Dark);
        assert_eq!(model.snapshot().theme, Theme::Dark);
    }

    #[test]
    fn test_snapshot_includes_notification() {
        let mut model = test_model();
        assert!(model.snapshot().notification.is_none());

        model.notification = Some(Notification {
            level: NotificationLevel::Error,
            message: "Test error".to_string(),
        });
        let snapshot = model.snapshot();
        let notification = snapshot.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert_eq!(notification.message, "Test error");
    }
}
