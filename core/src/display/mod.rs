//! Lifecycle of the single display surface showing the current list.
//!
//! The controller is a small state machine: `CLOSED`, `OPEN`, and `CLOSING` while a
//! released surface waits for the next scheduling turn. Closing is two-phase so a close
//! command that originates inside the surface never destroys it mid-dispatch:
//!
//! 1. [`DisplayController::close`] clears the logical state and parks the surface.
//! 2. [`DisplayController::run_deferred`] releases parked surfaces and clears `closing`.

use crate::error::ValidationError;
use crate::host::Host;
use crate::store::ListStore;
use crate::types::{AppConfig, DisplayConfig};
use error::{DisplayError, SurfaceError};
use tracing::{debug, info, warn};

mod geometry;
mod render;

pub use geometry::{Geometry, Viewport};
pub use render::render_lines;

pub mod error {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum SurfaceError {
        #[error("failed to allocate surface: {0}")]
        Allocate(String),

        #[error("failed to draw surface: {0}")]
        Draw(String),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }

    #[derive(Debug, Error)]
    pub enum DisplayError {
        #[error("display is not open")]
        NotOpen,

        #[error("invalid selection: {index} (list has {len} entries)")]
        InvalidSelection { index: usize, len: usize },

        #[error(transparent)]
        Validation(ValidationError),

        #[error("surface error: {0}")]
        Surface(#[from] SurfaceError),
    }

    impl From<ValidationError> for DisplayError {
        fn from(e: ValidationError) -> Self {
            match e {
                ValidationError::IndexOutOfRange { index, len } => {
                    DisplayError::InvalidSelection { index, len }
                }
                e => DisplayError::Validation(e),
            }
        }
    }
}

/// A read-only text surface owned by the host.
pub trait Surface {
    /// Replaces the surface content.
    fn set_lines(&mut self, lines: &[String]) -> Result<(), SurfaceError>;

    /// Moves the cursor to 1-based `line`.
    fn set_cursor(&mut self, line: usize);

    /// 1-based cursor line.
    fn cursor(&self) -> usize;

    /// Destroys the surface.
    fn release(self);
}

/// Allocates surfaces.
pub trait SurfaceFactory {
    type Surface: Surface;

    fn viewport(&self) -> Viewport;

    fn create(&mut self, geometry: &Geometry) -> Result<Self::Surface, SurfaceError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplaySurfaceState {
    pub open: bool,
    pub closing: bool,
}

pub struct DisplayController<F: SurfaceFactory> {
    factory: F,
    config: DisplayConfig,
    save_on_toggle: bool,
    state: DisplaySurfaceState,
    surface: Option<F::Surface>,
    pending_release: Vec<F::Surface>,
}

impl<F: SurfaceFactory> DisplayController<F> {
    pub fn new(factory: F, config: &AppConfig) -> Self {
        Self {
            factory,
            config: config.display.clone(),
            save_on_toggle: config.settings.save_on_toggle,
            state: DisplaySurfaceState::default(),
            surface: None,
            pending_release: Vec::new(),
        }
    }

    pub fn state(&self) -> DisplaySurfaceState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn is_closing(&self) -> bool {
        self.state.closing
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    /// 1-based cursor line of the open surface.
    pub fn cursor(&self) -> Option<usize> {
        self.surface.as_ref().map(|surface| surface.cursor())
    }

    fn draw(&mut self, store: &ListStore) -> Result<(), DisplayError> {
        let lines = render_lines(store.entries(), &self.config.placeholder);
        let surface = self.surface.as_mut().ok_or(DisplayError::NotOpen)?;
        surface.set_lines(&lines)?;
        Ok(())
    }

    fn set_cursor(&mut self, line: usize) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_cursor(line);
        }
    }

    fn require_open(&self) -> Result<(), DisplayError> {
        if self.state.open && self.surface.is_some() {
            Ok(())
        } else {
            Err(DisplayError::NotOpen)
        }
    }

    fn check_index(&self, store: &ListStore, index: usize) -> Result<(), DisplayError> {
        if store.get_by_index(index).is_some() {
            Ok(())
        } else {
            Err(DisplayError::InvalidSelection {
                index,
                len: store.len(),
            })
        }
    }
}

/// Lifecycle.
impl<F: SurfaceFactory> DisplayController<F> {
    /// Opens the surface and renders the current list.
    ///
    /// Returns `Ok(false)` without doing anything when already open or while a close is
    /// still pending.
    pub fn open(&mut self, store: &ListStore) -> Result<bool, DisplayError> {
        if self.state.open {
            return Ok(false);
        }
        if self.state.closing {
            debug!("open ignored, teardown pending");
            return Ok(false);
        }

        let geometry = Geometry::compute(self.factory.viewport(), &self.config);
        let mut surface = self.factory.create(&geometry)?;

        let lines = render_lines(store.entries(), &self.config.placeholder);
        if let Err(e) = surface.set_lines(&lines) {
            surface.release();
            return Err(e.into());
        }
        surface.set_cursor(1);

        self.surface = Some(surface);
        self.state.open = true;
        info!(
            width = geometry.width,
            height = geometry.height,
            entries = store.len(),
            "display opened"
        );
        Ok(true)
    }

    /// Closes the surface. Physical release waits for [`DisplayController::run_deferred`].
    ///
    /// Returns `false` when there was nothing to close or a close is already pending.
    pub fn close(&mut self, store: &mut ListStore) -> bool {
        if !self.state.open || self.state.closing {
            return false;
        }

        if self.save_on_toggle {
            if let Err(e) = store.save_default_snapshot() {
                warn!("failed to save list on close: {e}");
            }
        }

        self.state.open = false;
        self.state.closing = true;
        if let Some(surface) = self.surface.take() {
            self.pending_release.push(surface);
        }
        debug!("display closed, release deferred");
        true
    }

    pub fn toggle(&mut self, store: &mut ListStore) -> Result<(), DisplayError> {
        if self.state.open {
            self.close(store);
            Ok(())
        } else {
            self.open(store).map(|_| ())
        }
    }

    /// Releases surfaces parked by [`DisplayController::close`].
    ///
    /// Returns how many surfaces were released.
    pub fn run_deferred(&mut self) -> usize {
        let released = self.pending_release.len();
        for surface in self.pending_release.drain(..) {
            surface.release();
        }
        if self.state.closing {
            self.state.closing = false;
            debug!(released, "deferred teardown complete");
        }
        released
    }

    /// Redraws the open surface. Does nothing when closed.
    pub fn refresh(&mut self, store: &ListStore) -> Result<(), DisplayError> {
        if !self.state.open {
            return Ok(());
        }
        self.draw(store)?;
        let len = store.len();
        if let Some(cursor) = self.cursor() {
            if len > 0 && cursor > len {
                self.set_cursor(len);
            }
        }
        Ok(())
    }
}

/// Position commands. Only valid while open.
impl<F: SurfaceFactory> DisplayController<F> {
    /// Closes the surface and asks the host to open the path at `index`.
    pub fn activate(
        &mut self,
        index: usize,
        store: &mut ListStore,
        host: &mut impl Host,
    ) -> Result<String, DisplayError> {
        self.require_open()?;
        let path = store
            .get_by_index(index)
            .map(str::to_owned)
            .ok_or(DisplayError::InvalidSelection {
                index,
                len: store.len(),
            })?;

        self.close(store);
        host.open_path(&path);
        Ok(path)
    }

    pub fn delete(&mut self, index: usize, store: &mut ListStore) -> Result<String, DisplayError> {
        self.require_open()?;
        let removed = store.delete_by_index(index)?;
        self.draw(store)?;
        if !store.is_empty() {
            self.set_cursor(index.min(store.len()));
        }
        Ok(removed)
    }

    pub fn move_down(&mut self, index: usize, store: &mut ListStore) -> Result<(), DisplayError> {
        self.require_open()?;
        self.check_index(store, index)?;
        if index >= store.len() {
            return Err(DisplayError::InvalidSelection {
                index,
                len: store.len(),
            });
        }
        store.reorder(index, index + 1)?;
        self.draw(store)?;
        self.set_cursor(index + 1);
        Ok(())
    }

    pub fn move_up(&mut self, index: usize, store: &mut ListStore) -> Result<(), DisplayError> {
        self.require_open()?;
        self.check_index(store, index)?;
        if index <= 1 {
            return Err(DisplayError::InvalidSelection {
                index,
                len: store.len(),
            });
        }
        store.reorder(index, index - 1)?;
        self.draw(store)?;
        self.set_cursor(index - 1);
        Ok(())
    }
}
