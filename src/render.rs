use std::sync::atomic::{AtomicU64, Ordering};

use crate::tea::{ContactForm, Mode, Notification, Section};
use crate::terminal::{Route, VisibleEntry};
use crate::theme::Theme;

/// What the terminal view draws this frame.
#[derive(Debug, Clone, Default)]
pub struct TerminalView {
    pub entries: Vec<VisibleEntry>,
    pub input: String,
    /// The prompt line is hidden while output is being typed.
    pub is_executing: bool,
}

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone)]
pub struct RenderState {
    pub version: u64,
    pub route: Route,
    pub theme: Theme,
    pub section: Section,
    pub mode: Mode,
    pub form: ContactForm,
    pub input_buffer: String,
    pub notification: Option<Notification>,
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,
    /// Present while the terminal view is mounted.
    pub terminal: Option<TerminalView>,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            route: Route::Home,
            theme: Theme::default(),
            section: Section::Home,
            mode: Mode::Browse,
            form: ContactForm::default(),
            input_buffer: String::new(),
            notification: None,
            show_keymap: false,
            terminal: None,
        }
    }
}
