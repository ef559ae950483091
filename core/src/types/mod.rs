pub(crate) mod config;
pub use config::{
    AppConfig, AppConfigError, Config, DisplayConfig, NavBinding, SettingsConfig,
};

pub(crate) mod list_name;
pub use list_name::{DEFAULT_SNAPSHOT_NAME, ListName, ListNameError, MAX_LIST_NAME_LENGTH};

pub(crate) mod bookmark_list;
pub use bookmark_list::BookmarkList;
