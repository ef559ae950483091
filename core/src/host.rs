//! Collaborators supplied by the embedding editor or terminal.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "info"),
            Level::Warn => write!(f, "warn"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// User-facing side effects the core never performs itself.
pub trait Host {
    /// Makes `path` the active editing target.
    fn open_path(&mut self, path: &str);

    /// Asks a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;

    /// Lets the user choose one of `items`. Returns the chosen index into `items`.
    fn pick(&mut self, prompt: &str, items: &[String]) -> Option<usize>;

    /// Shows a message. Informational only.
    fn notify(&mut self, message: &str, level: Level);
}
