//! File based tracing setup. The terminal belongs to the TUI, so nothing is
//! ever written to stdout or stderr once logging is up.
//!
//! `RUST_LOG` takes precedence; otherwise the level is `info`, or `debug`
//! with `--debug`.

use anyhow::{anyhow, Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter(debug: bool) -> EnvFilter {
    let default = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

fn subscriber(file: File, debug: bool) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(debug)
        .finish()
}

/// Installs the global subscriber writing to `path`.
pub fn init_tracing(path: &Path, debug: bool) -> Result<()> {
    let file = open_log_file(path)?;
    tracing::subscriber::set_global_default(subscriber(file, debug)).map_err(|err| anyhow!(err))
}
