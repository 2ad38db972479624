//! File logging. The terminal belongs to the TUI, so events go to a daily
//! rolling file under the local data dir instead of stdout.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Env var holding filter directives, e.g. `STUDIO_PULSE_LOG=debug`.
pub const LOG_ENV: &str = "STUDIO_PULSE_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "studio-pulse").map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Installs the global subscriber. Keep the guard alive until exit or
/// buffered lines are lost.
pub fn init() -> Result<WorkerGuard> {
    let dir = log_dir().context("Could not resolve a data directory for logs")?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("studio-pulse")
        .filename_suffix("log")
        .build(&dir)
        .with_context(|| format!("Could not open log directory {}", dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    Ok(guard)
}

fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
