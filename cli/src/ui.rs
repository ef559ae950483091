//! Line-driven display loop for the `ui` subcommand.

use crate::terminal::{TerminalHost, TerminalSurfaceFactory};
use pinlist_core::Session;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Activate(Option<usize>),
    Delete(Option<usize>),
    MoveUp(Option<usize>),
    MoveDown(Option<usize>),
    Close,
    Help,
}

impl UiCommand {
    /// Parses `<n>`, `o [n]`, `d [n]`, `u [n]`, `m [n]`, `q`, `?`.
    ///
    /// A missing index means the cursor line.
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let Some(head) = parts.next() else {
            return Some(UiCommand::Activate(None));
        };
        if let Ok(index) = head.parse::<usize>() {
            return parts.next().is_none().then_some(UiCommand::Activate(Some(index)));
        }

        let index = match parts.next() {
            Some(arg) => Some(arg.parse::<usize>().ok()?),
            None => None,
        };
        if parts.next().is_some() {
            return None;
        }

        match head {
            "o" | "open" => Some(UiCommand::Activate(index)),
            "d" | "del" => Some(UiCommand::Delete(index)),
            "u" | "up" => Some(UiCommand::MoveUp(index)),
            "m" | "down" => Some(UiCommand::MoveDown(index)),
            "q" | "quit" if index.is_none() => Some(UiCommand::Close),
            "?" | "help" if index.is_none() => Some(UiCommand::Help),
            _ => None,
        }
    }
}

const HELP: &str = "\
  <n> | o [n]   open entry
  d [n]         delete entry
  u [n]         move entry up
  m [n]         move entry down
  q             close
  (n defaults to the highlighted line)";

type TerminalSession = Session<TerminalSurfaceFactory, TerminalHost>;

/// Opens the display and dispatches commands until it closes or stdin ends.
pub fn run(session: &mut TerminalSession) -> anyhow::Result<()> {
    session.open_display()?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        session.tick();
        if !session.display().is_open() {
            break;
        }

        eprint!("> ");
        io::stderr().flush()?;
        let Some(line) = lines.next() else {
            session.close_display();
            continue;
        };
        let line = line?;

        let Some(command) = UiCommand::parse(&line) else {
            eprintln!("unknown command, `?` for help");
            continue;
        };
        let cursor = session.display().cursor().unwrap_or(1);
        // Failures are already reported through the host.
        let _ = match command {
            UiCommand::Activate(index) => session.activate(index.unwrap_or(cursor)).map(|_| ()),
            UiCommand::Delete(index) => session.delete(index.unwrap_or(cursor)).map(|_| ()),
            UiCommand::MoveUp(index) => session.move_up(index.unwrap_or(cursor)),
            UiCommand::MoveDown(index) => session.move_down(index.unwrap_or(cursor)),
            UiCommand::Close => {
                session.close_display();
                Ok(())
            }
            UiCommand::Help => {
                eprintln!("{HELP}");
                Ok(())
            }
        };
    }

    session.tick();
    Ok(())
}
