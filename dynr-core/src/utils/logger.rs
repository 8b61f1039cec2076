//! Logging Infrastructure
//!
//! Structured logging setup for the UI shell hosting the session:
//! - console output, plain text for development or JSON
//! - optional daily rotating JSON log files

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

use crate::core::Config;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize console logging
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Initialize logging with an optional daily rotating file
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - JSON console output instead of plain text
/// * `log_dir` - Optional directory for `dynr.YYYY-MM-DD` files
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// dynr_core::init_logger_with_file("debug", false, None)?;
///
/// // Console + file
/// dynr_core::init_logger_with_file("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .boxed()
    };
    layers.push(console_layer);

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        fs::create_dir_all(log_dir)?;

        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "dynr");
        let file_layer = fmt::layer()
            .json()
            .with_ansi(false)
            .with_target(true)
            .with_writer(file_appender)
            .boxed();
        layers.push(file_layer);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

/// Initialize logging from [`Config`] (`DYNR_LOG_LEVEL`, `DYNR_LOG_JSON`)
pub fn init_logger_from_config(config: &Config) -> anyhow::Result<()> {
    init_logger(&config.log_level, config.log_json)
}
