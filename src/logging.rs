// Logging setup
// The terminal belongs to the UI, so logs go to a file

use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "navbar-demo";
const LOG_FILE_SUFFIX: &str = "log";

/// Install the file subscriber; keep the guard alive until exit to flush logs
pub fn init_logging(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("can't create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::NEVER)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(log_dir)
        .context("can't initialize log file appender")?;
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(build_filter("info")?)
        .with(fmt_layer)
        .try_init()
        .context("can't initialize tracing subscriber")?;

    Ok(guard)
}

/// `RUST_LOG` wins; otherwise `default_level`
pub fn build_filter(default_level: &str) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::builder()
        .parse(default_level)
        .context("invalid logging level")
}
