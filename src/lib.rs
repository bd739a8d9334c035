pub mod config;
pub mod content;
pub mod error;
pub mod headless;
pub mod log;
pub mod mail;
pub mod terminal;
pub mod theme;
pub mod util;

// Decoupled game loop architecture
pub mod actors;
pub mod app;
pub mod render;
pub mod tea;
pub mod ui;

pub use error::{Error, Result};
pub use terminal::Interpreter;
pub use theme::{Theme, ThemeStore};
