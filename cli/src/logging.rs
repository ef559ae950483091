use anyhow::Result;
use std::path::Path;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INIT_GUARD: OnceLock<()> = OnceLock::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Later calls do nothing.
///
/// Logs go to `log_file_path` when given, otherwise to stderr so they never mix with
/// paths printed on stdout.
pub fn initialize_logging(log_file_path: Option<&Path>) -> Result<()> {
    if INIT_GUARD.set(()).is_err() {
        return Ok(());
    }

    match log_file_path {
        Some(path) => {
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let _ = tracing_subscriber::fmt()
                .with_writer(log_file)
                .with_ansi(false)
                .with_target(true)
                .with_env_filter(env_filter())
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_env_filter(env_filter())
                .try_init();
        }
    }

    Ok(())
}
