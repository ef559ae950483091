//! Recording collaborators for unit tests.

use crate::display::error::SurfaceError;
use crate::display::{Geometry, Surface, SurfaceFactory, Viewport};
use crate::host::{Host, Level};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub(crate) struct SurfaceLog {
    pub created: usize,
    pub released: usize,
    pub lines: Vec<String>,
    pub cursor: usize,
    pub geometry: Option<Geometry>,
}

impl SurfaceLog {
    pub fn live(&self) -> usize {
        self.created - self.released
    }
}

pub(crate) struct FakeFactory {
    pub log: Rc<RefCell<SurfaceLog>>,
    pub viewport: Viewport,
    pub fail_create: bool,
    pub fail_draw: bool,
}

impl FakeFactory {
    pub fn new() -> Self {
        Self {
            log: Rc::default(),
            viewport: Viewport {
                width: 120,
                height: 40,
            },
            fail_create: false,
            fail_draw: false,
        }
    }
}

pub(crate) struct FakeSurface {
    log: Rc<RefCell<SurfaceLog>>,
    fail_draw: bool,
}

impl Surface for FakeSurface {
    fn set_lines(&mut self, lines: &[String]) -> Result<(), SurfaceError> {
        if self.fail_draw {
            return Err(SurfaceError::Draw("fake draw failure".to_string()));
        }
        self.log.borrow_mut().lines = lines.to_vec();
        Ok(())
    }

    fn set_cursor(&mut self, line: usize) {
        self.log.borrow_mut().cursor = line;
    }

    fn cursor(&self) -> usize {
        self.log.borrow().cursor
    }

    fn release(self) {
        self.log.borrow_mut().released += 1;
    }
}

impl SurfaceFactory for FakeFactory {
    type Surface = FakeSurface;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn create(&mut self, geometry: &Geometry) -> Result<FakeSurface, SurfaceError> {
        if self.fail_create {
            return Err(SurfaceError::Allocate("fake allocation failure".to_string()));
        }
        let mut log = self.log.borrow_mut();
        log.created += 1;
        log.geometry = Some(geometry.clone());
        Ok(FakeSurface {
            log: Rc::clone(&self.log),
            fail_draw: self.fail_draw,
        })
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    pub opened: Vec<String>,
    pub notifications: Vec<(String, Level)>,
    pub confirm_answer: bool,
    pub confirm_prompts: Vec<String>,
    pub pick_answer: Option<usize>,
    pub pick_items: Vec<String>,
}

impl Host for FakeHost {
    fn open_path(&mut self, path: &str) {
        self.opened.push(path.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirm_prompts.push(message.to_string());
        self.confirm_answer
    }

    fn pick(&mut self, _prompt: &str, items: &[String]) -> Option<usize> {
        self.pick_items = items.to_vec();
        self.pick_answer
    }

    fn notify(&mut self, message: &str, level: Level) {
        self.notifications.push((message.to_string(), level));
    }
}
