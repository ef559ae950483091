use std::path::PathBuf;

/// Core configuration for ListStore initialization.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_path: PathBuf,
}

impl Config {
    /// Directory holding `<name>.json` list files.
    pub fn lists_path(&self) -> PathBuf {
        self.base_path.clone()
    }

    pub fn config_path(&self) -> PathBuf {
        self.base_path.join("config.toml")
    }
}
