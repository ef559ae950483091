mod app;
mod core;

pub use app::{AppConfig, AppConfigError, DisplayConfig, NavBinding, SettingsConfig};
pub use core::Config;
