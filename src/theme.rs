//! Process-wide theme preference.
//!
//! One `ThemeStore` is created at startup and cloned into every consumer
//! (homepage, terminal interpreter, renderer). Writes publish to all
//! subscribers; dropping a consumer never affects the stored value.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::{flog_debug, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(Error::InvalidTheme(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeStore {
    tx: Arc<watch::Sender<Theme>>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn get(&self) -> Theme {
        *self.tx.borrow()
    }

    /// Publish `theme`. Returns true if the value changed.
    pub fn set(&self, theme: Theme) -> bool {
        let previous = self.tx.send_replace(theme);
        flog_debug!("ThemeStore::set {} -> {}", previous, theme);
        previous != theme
    }

    /// Flip the current value and return the new one.
    pub fn toggle(&self) -> Theme {
        let mut next = Theme::default();
        self.tx.send_modify(|t| {
            *t = t.toggled();
            next = *t;
        });
        flog_debug!("ThemeStore::toggle -> {}", next);
        next
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.tx.subscribe()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
