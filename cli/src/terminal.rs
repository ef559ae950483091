//! Terminal implementations of the host and surface collaborators.

use crossterm::style::{Stylize, style};
use pinlist_core::display::error::SurfaceError;
use pinlist_core::{Geometry, Host, Level, Surface, SurfaceFactory, Viewport};
use std::io::{self, BufRead, Write};
use tracing::warn;

const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Prompts on stderr and reads answers from stdin.
///
/// Opened paths go to stdout, one per line, so they can be piped into an editor.
pub struct TerminalHost {
    assume_yes: bool,
}

impl TerminalHost {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Host for TerminalHost {
    fn open_path(&mut self, path: &str) {
        println!("{path}");
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();
        matches!(read_line().as_deref(), Some("y" | "Y" | "yes"))
    }

    fn pick(&mut self, prompt: &str, items: &[String]) -> Option<usize> {
        for (i, item) in items.iter().enumerate() {
            eprintln!("{:>3}  {item}", i + 1);
        }
        eprint!("{prompt} (number, empty to cancel): ");
        let _ = io::stderr().flush();
        let choice: usize = read_line()?.parse().ok()?;
        choice.checked_sub(1).filter(|i| *i < items.len())
    }

    fn notify(&mut self, message: &str, level: Level) {
        match level {
            Level::Info => eprintln!("{message}"),
            Level::Warn => eprintln!("{}: {message}", style(level).yellow()),
            Level::Error => eprintln!("{}: {message}", style(level).red()),
        }
    }
}

/// Draws the list as a framed block on stdout.
pub struct TerminalSurface {
    geometry: Geometry,
    lines: Vec<String>,
    cursor: usize,
}

impl TerminalSurface {
    fn fit(&self, text: &str) -> String {
        let inner = usize::from(self.geometry.width).saturating_sub(4);
        let mut fitted: String = text.chars().take(inner).collect();
        let len = fitted.chars().count();
        fitted.extend(std::iter::repeat_n(' ', inner - len));
        fitted
    }

    fn draw(&self) -> Result<(), SurfaceError> {
        self.draw_to(&mut io::stdout().lock())
    }

    /// Redraws after a cursor move, which has no caller to report a failure to.
    fn redraw_logged(&self, out: &mut impl Write) -> bool {
        match self.draw_to(out) {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to redraw cursor: {e}");
                false
            }
        }
    }

    fn draw_to(&self, out: &mut impl Write) -> Result<(), SurfaceError> {
        let inner = usize::from(self.geometry.width).saturating_sub(2);
        let title = format!(" {} ", self.geometry.title);
        let rule = "─".repeat(inner.saturating_sub(title.chars().count()));
        writeln!(out, "┌{title}{rule}┐")?;

        let visible = usize::from(self.geometry.height);
        let first = self.cursor.saturating_sub(visible).min(self.lines.len());
        for (offset, line) in self.lines.iter().enumerate().skip(first).take(visible) {
            let text = self.fit(line);
            if offset + 1 == self.cursor {
                writeln!(out, "│ {} │", style(text).reverse())?;
            } else {
                writeln!(out, "│ {text} │")?;
            }
        }

        writeln!(out, "└{}┘", "─".repeat(inner))?;
        out.flush()?;
        Ok(())
    }
}

impl Surface for TerminalSurface {
    fn set_lines(&mut self, lines: &[String]) -> Result<(), SurfaceError> {
        self.lines = lines.to_vec();
        self.draw()
    }

    fn set_cursor(&mut self, line: usize) {
        if self.cursor == line {
            return;
        }
        self.cursor = line;
        self.redraw_logged(&mut io::stdout().lock());
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn release(self) {}
}

pub struct TerminalSurfaceFactory;

impl SurfaceFactory for TerminalSurfaceFactory {
    type Surface = TerminalSurface;

    fn viewport(&self) -> Viewport {
        match crossterm::terminal::size() {
            Ok((width, height)) if width > 0 && height > 0 => Viewport { width, height },
            _ => FALLBACK_VIEWPORT,
        }
    }

    fn create(&mut self, geometry: &Geometry) -> Result<TerminalSurface, SurfaceError> {
        if geometry.width < 8 {
            return Err(SurfaceError::Allocate(format!(
                "terminal too narrow ({} columns)",
                geometry.width
            )));
        }
        Ok(TerminalSurface {
            geometry: geometry.clone(),
            lines: Vec::new(),
            cursor: 1,
        })
    }
}
