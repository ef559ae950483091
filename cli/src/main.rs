mod args;
mod logging;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use args::{Args, Command};
use clap::Parser;
use pinlist_core::session::error::SessionError;
use pinlist_core::types::{AppConfig, Config};
use pinlist_core::{Selection, Session};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use terminal::{TerminalHost, TerminalSurfaceFactory};
use tracing::{debug, warn};

fn get_data_path() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("PINLIST_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(dir) = std::env::var("XDG_DATA_HOME") {
        return Ok(PathBuf::from(dir).join("pinlist"));
    }
    let home = std::env::var("HOME").context("neither PINLIST_DATA_DIR nor HOME is set")?;
    Ok(PathBuf::from(home).join(".local/share/pinlist"))
}

fn load_app_config(config: &Config) -> Result<AppConfig> {
    let path = config.config_path();
    let app_config = AppConfig::load(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let errors = app_config.validate();
    if errors.is_empty() {
        return Ok(app_config);
    }
    for error in &errors {
        warn!("{}: {error}", path.display());
    }
    Ok(app_config.with_defaults_for_invalid())
}

fn resolve_path(path: Option<&Path>) -> Result<String> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let path = std::fs::canonicalize(&path).unwrap_or(path);
    path.into_os_string()
        .into_string()
        .map_err(|path| anyhow::anyhow!("path is not valid UTF-8: {}", path.to_string_lossy()))
}

type TerminalSession = Session<TerminalSurfaceFactory, TerminalHost>;

fn run(session: &mut TerminalSession, command: Command) -> Result<()> {
    match command {
        Command::Add { path } => {
            let path = resolve_path(path.as_deref())?;
            session.add_current(&path)?;
        }
        Command::List => {
            for (i, path) in session.store().entries().iter().enumerate() {
                println!("{:>3}  {path}", i + 1);
            }
        }
        Command::Rm { index } => {
            let removed = session.remove(index)?;
            debug!(removed = %removed, "removed entry");
        }
        Command::Mv { from, to } => {
            session.reorder(from, to)?;
        }
        Command::SaveAs { name } => {
            session.save_as(&name)?;
        }
        Command::Load { name } => {
            if let Selection::Cancelled = session.load(name.as_deref())? {
                debug!("load cancelled");
            }
        }
        Command::DeleteSaved { name, .. } => {
            session.delete_saved(&name)?;
        }
        Command::Saved => {
            for name in session.saved_names()? {
                println!("{name}");
            }
        }
        Command::Nav { trigger } => {
            session.nav(&trigger)?;
        }
        Command::Go { index } => {
            session.nav_file(index)?;
        }
        Command::Ui => ui::run(session)?,
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::initialize_logging(args.log_file.as_deref())?;

    let config = Config {
        base_path: match args.data_dir {
            Some(dir) => dir,
            None => get_data_path()?,
        },
    };
    let app_config = load_app_config(&config)?;

    let assume_yes = matches!(args.command, Command::DeleteSaved { yes: true, .. });
    let mut session = Session::start(
        &config,
        app_config,
        TerminalSurfaceFactory,
        TerminalHost::new(assume_yes),
    );

    let outcome = run(&mut session, args.command);
    if session.shutdown().is_err() {
        return Ok(ExitCode::FAILURE);
    }

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // Session errors were already shown to the user through the host.
        Err(e) if e.is::<SessionError>() => Ok(ExitCode::FAILURE),
        Err(e) => Err(e),
    }
}
