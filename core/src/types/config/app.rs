use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// User-facing configuration, persisted as config.toml.
///
/// Every recognized option is a field here. Unknown keys are rejected at parse time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub settings: SettingsConfig,
    pub display: DisplayConfig,
    pub bindings: Vec<NavBinding>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings: SettingsConfig::default(),
            display: DisplayConfig::default(),
            bindings: default_bindings(),
        }
    }
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let display = &self.display;

        if !(display.width_ratio > 0.0 && display.width_ratio <= 1.0) {
            errors.push("display.width_ratio must be in (0, 1]".to_string());
        }

        if display.min_width == 0 {
            errors.push("display.min_width must be at least 1".to_string());
        }

        if let Some(max_width) = display.max_width {
            if max_width < display.min_width {
                errors.push("display.max_width must not be below display.min_width".to_string());
            }
        }

        if display.height == 0 {
            errors.push("display.height must be at least 1".to_string());
        }

        let mut seen = HashSet::new();
        for binding in &self.bindings {
            if binding.trigger.trim().is_empty() {
                errors.push("bindings: trigger must not be empty".to_string());
            }
            if binding.index == 0 {
                errors.push(format!(
                    "bindings: index for `{}` must be at least 1",
                    binding.trigger
                ));
            }
            if !seen.insert(binding.trigger.as_str()) {
                errors.push(format!("bindings: duplicate trigger `{}`", binding.trigger));
            }
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    ///
    /// Invalid bindings are dropped; for duplicate triggers the first one wins.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = DisplayConfig::default();
        let display = &self.display;

        let width_ratio = if display.width_ratio > 0.0 && display.width_ratio <= 1.0 {
            display.width_ratio
        } else {
            defaults.width_ratio
        };
        let min_width = if display.min_width == 0 {
            defaults.min_width
        } else {
            display.min_width
        };
        let max_width = display.max_width.filter(|max| *max >= min_width);
        let height = if display.height == 0 {
            defaults.height
        } else {
            display.height
        };

        let mut seen = HashSet::new();
        let bindings = self
            .bindings
            .iter()
            .filter(|b| !b.trigger.trim().is_empty() && b.index > 0)
            .filter(|b| seen.insert(b.trigger.clone()))
            .cloned()
            .collect();

        Self {
            settings: self.settings.clone(),
            display: DisplayConfig {
                width_ratio,
                min_width,
                max_width,
                height,
                height_margin: display.height_margin,
                placeholder: display.placeholder.clone(),
                title: display.title.clone(),
            },
            bindings,
        }
    }

    /// Index bound to `trigger`, if any.
    pub fn binding_index(&self, trigger: &str) -> Option<usize> {
        self.bindings
            .iter()
            .find(|b| b.trigger == trigger)
            .map(|b| b.index)
    }
}

/// Behavior settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsConfig {
    /// Write the default snapshot whenever the display is closed.
    pub save_on_toggle: bool,
}

/// Display surface sizing and text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub width_ratio: f32,
    pub min_width: u16,
    pub max_width: Option<u16>,
    pub height: u16,
    pub height_margin: u16,
    pub placeholder: String,
    pub title: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width_ratio: 0.62,
            min_width: 69,
            max_width: None,
            height: 8,
            height_margin: 4,
            placeholder: "(no bookmarks)".to_string(),
            title: "Bookmarks".to_string(),
        }
    }
}

/// Binds a trigger (key sequence, command name) to a list position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavBinding {
    pub trigger: String,
    pub index: usize,
}

fn default_bindings() -> Vec<NavBinding> {
    (1..=4)
        .map(|index| NavBinding {
            trigger: format!("nav_file_{index}"),
            index,
        })
        .collect()
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
