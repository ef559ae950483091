//! Process-wide context tying the store, the display and the host together.
//!
//! Every user-facing entry point goes through [`Session`]. Failures are reported to the
//! host as notifications and also returned to the caller.

use crate::display::error::DisplayError;
use crate::display::{DisplayController, SurfaceFactory};
use crate::error::ValidationError;
use crate::host::{Host, Level};
use crate::selector::{Selection, select_and_load};
use crate::store::ListStore;
use crate::store::error::StoreError;
use crate::types::{AppConfig, Config, ListName};
use error::SessionError;
use tracing::{info, warn};

pub mod error {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum SessionError {
        #[error(transparent)]
        Validation(#[from] ValidationError),

        #[error(transparent)]
        Store(#[from] StoreError),

        #[error(transparent)]
        Display(#[from] DisplayError),

        #[error("no binding for trigger `{0}`")]
        UnknownTrigger(String),
    }

    impl SessionError {
        /// Severity used when the error is shown to the user.
        pub fn level(&self) -> Level {
            match self {
                SessionError::Validation(_)
                | SessionError::UnknownTrigger(_)
                | SessionError::Store(StoreError::Validation(_))
                | SessionError::Store(StoreError::NotFound(_))
                | SessionError::Store(StoreError::Cancelled(_))
                | SessionError::Display(DisplayError::NotOpen)
                | SessionError::Display(DisplayError::InvalidSelection { .. })
                | SessionError::Display(DisplayError::Validation(_)) => Level::Warn,
                _ => Level::Error,
            }
        }
    }
}

pub struct Session<F: SurfaceFactory, H: Host> {
    app_config: AppConfig,
    store: ListStore,
    display: DisplayController<F>,
    host: H,
}

impl<F: SurfaceFactory, H: Host> Session<F, H> {
    /// Builds the session and restores the default snapshot.
    pub fn start(config: &Config, app_config: AppConfig, factory: F, host: H) -> Self {
        let mut store = ListStore::new(config);
        store.initialize();
        let display = DisplayController::new(factory, &app_config);
        info!(data_dir = %config.base_path.display(), entries = store.len(), "session started");
        Self {
            app_config,
            store,
            display,
            host,
        }
    }

    pub fn store(&self) -> &ListStore {
        &self.store
    }

    pub fn display(&self) -> &DisplayController<F> {
        &self.display
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn report<T>(&mut self, result: Result<T, SessionError>) -> Result<T, SessionError> {
        if let Err(e) = &result {
            warn!("{e}");
            self.host.notify(&e.to_string(), e.level());
        }
        result
    }

    fn refresh_display(&mut self) -> Result<(), SessionError> {
        self.display.refresh(&self.store)?;
        Ok(())
    }
}

/// Entry points.
impl<F: SurfaceFactory, H: Host> Session<F, H> {
    /// Bookmarks `path`. A duplicate is reported and returns `Ok(false)`.
    pub fn add_current(&mut self, path: &str) -> Result<bool, SessionError> {
        match self.store.add(path) {
            Ok(()) => {
                let result = self.refresh_display().map(|()| true);
                self.report(result)
            }
            Err(ValidationError::DuplicatePath(path)) => {
                self.host
                    .notify(&format!("already bookmarked: {path}"), Level::Info);
                Ok(false)
            }
            Err(e) => self.report(Err(e.into())),
        }
    }

    pub fn toggle_display(&mut self) -> Result<(), SessionError> {
        let result = self
            .display
            .toggle(&mut self.store)
            .map_err(SessionError::from);
        self.report(result)
    }

    pub fn open_display(&mut self) -> Result<bool, SessionError> {
        let result = self.display.open(&self.store).map_err(SessionError::from);
        self.report(result)
    }

    pub fn close_display(&mut self) -> bool {
        self.display.close(&mut self.store)
    }

    /// Removes the entry at `index` without going through the display.
    pub fn remove(&mut self, index: usize) -> Result<String, SessionError> {
        let result = self
            .store
            .delete_by_index(index)
            .map_err(SessionError::from)
            .and_then(|removed| self.refresh_display().map(|()| removed));
        self.report(result)
    }

    /// Moves the entry at `from` to `to` without going through the display.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), SessionError> {
        let result = self
            .store
            .reorder(from, to)
            .map_err(SessionError::from)
            .and_then(|()| self.refresh_display());
        self.report(result)
    }

    pub fn saved_names(&mut self) -> Result<Vec<ListName>, SessionError> {
        let result = self.store.list_saved_names().map_err(SessionError::from);
        self.report(result)
    }

    pub fn save_as(&mut self, name: &str) -> Result<ListName, SessionError> {
        let result = self.store.save_as(name).map_err(SessionError::from);
        if let Ok(name) = &result {
            self.host.notify(&format!("saved list `{name}`"), Level::Info);
        }
        self.report(result)
    }

    /// Loads `name`, or lets the host pick a saved list when `name` is `None`.
    pub fn load(&mut self, name: Option<&str>) -> Result<Selection, SessionError> {
        let result = match name {
            Some(name) => self.store.load(name).map(Selection::Loaded),
            None => select_and_load(&mut self.store, &mut self.host),
        }
        .map_err(SessionError::from);

        match &result {
            Ok(Selection::Loaded(name)) => {
                self.host
                    .notify(&format!("loaded list `{name}`"), Level::Info);
                let refreshed = self.refresh_display();
                self.report(refreshed)?;
            }
            Ok(Selection::NothingSaved) => {
                self.host.notify("no saved lists", Level::Info);
            }
            Ok(Selection::Cancelled) | Err(_) => {}
        }
        self.report(result)
    }

    pub fn delete_saved(&mut self, name: &str) -> Result<ListName, SessionError> {
        let host = &mut self.host;
        let result = self
            .store
            .delete_saved(name, |name| {
                host.confirm(&format!("Delete saved list `{name}`?"))
            })
            .map_err(SessionError::from);
        if let Ok(name) = &result {
            self.host
                .notify(&format!("deleted list `{name}`"), Level::Info);
        }
        self.report(result)
    }

    /// Opens the entry bound to `trigger`.
    pub fn nav(&mut self, trigger: &str) -> Result<String, SessionError> {
        let Some(index) = self.app_config.binding_index(trigger) else {
            return self.report(Err(SessionError::UnknownTrigger(trigger.to_string())));
        };
        self.nav_file(index)
    }

    /// Opens the entry at `index` without going through the display.
    pub fn nav_file(&mut self, index: usize) -> Result<String, SessionError> {
        let result = match self.store.get_by_index(index) {
            Some(path) => Ok(path.to_string()),
            None => Err(SessionError::from(ValidationError::IndexOutOfRange {
                index,
                len: self.store.len(),
            })),
        };
        if let Ok(path) = &result {
            self.host.open_path(path);
        }
        self.report(result)
    }

    /// Runs work deferred to the next turn. Call once per event-loop iteration.
    pub fn tick(&mut self) -> usize {
        self.display.run_deferred()
    }

    /// Closes the display, drains deferred work and writes the default snapshot.
    pub fn shutdown(&mut self) -> Result<(), SessionError> {
        self.display.close(&mut self.store);
        self.display.run_deferred();
        let result = self
            .store
            .save_default_snapshot()
            .map(|_| ())
            .map_err(SessionError::from);
        self.report(result)
    }
}

/// Display commands, addressed by list position.
impl<F: SurfaceFactory, H: Host> Session<F, H> {
    pub fn activate(&mut self, index: usize) -> Result<String, SessionError> {
        let result = self
            .display
            .activate(index, &mut self.store, &mut self.host)
            .map_err(SessionError::from);
        self.report(result)
    }

    pub fn delete(&mut self, index: usize) -> Result<String, SessionError> {
        let result = self
            .display
            .delete(index, &mut self.store)
            .map_err(SessionError::from);
        self.report(result)
    }

    pub fn move_up(&mut self, index: usize) -> Result<(), SessionError> {
        let result = self
            .display
            .move_up(index, &mut self.store)
            .map_err(SessionError::from);
        self.report(result)
    }

    pub fn move_down(&mut self, index: usize) -> Result<(), SessionError> {
        let result = self
            .display
            .move_down(index, &mut self.store)
            .map_err(SessionError::from);
        self.report(result)
    }
}
