//! Tracing setup
//!
//! One global subscriber: a stdout layer, plus a daily-rolling file layer
//! when `logging.file_output` is set. Both use the same format, plain text
//! or JSON. `RCC_LOG` overrides the configured level with a full filter
//! directive.

use std::ffi::OsStr;
use std::path::Path;

use rcc_domain::error::{Error, Result};
use tracing::{Level, debug, error, info, warn};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

pub use crate::config::LoggingConfig;
use crate::constants::{LOG_FILE_DEFAULT_STEM, LOG_FILTER_ENV_VAR};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber
///
/// Fails if the level does not parse or a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer(config.json_format)];
    if let Some(path) = &config.file_output {
        layers.push(file_layer(rolling_appender(path), config.json_format));
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| Error::infrastructure_with_source("Failed to install tracing subscriber", e))?;

    info!(%level, json = config.json_format, "Logging initialized");
    Ok(())
}

fn stdout_layer(json: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

fn file_layer(appender: RollingFileAppender, json: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

fn rolling_appender(path: &Path) -> RollingFileAppender {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(LOG_FILE_DEFAULT_STEM));
    tracing_appender::rolling::daily(dir, stem)
}

/// Map a level name onto [`Level`], ignoring case
///
/// `warning` is accepted as an alias for `warn`.
pub fn parse_log_level(level: &str) -> Result<Level> {
    let parsed = match level.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            return Err(Error::configuration(format!(
                "Invalid log level: {level}. Use trace, debug, info, warn, or error"
            )));
        }
    };
    Ok(parsed)
}

/// Report which configuration file was used
pub fn log_config_loaded(path: &Path, found: bool) {
    if found {
        info!(path = %path.display(), "Configuration file loaded");
    } else {
        warn!(path = %path.display(), "Configuration file not found, using defaults");
    }
}

/// Report the outcome of a connectivity check
pub fn log_health_check(component: &str, healthy: bool, details: Option<&str>) {
    if healthy {
        debug!(component, "Health check passed");
    } else {
        error!(
            component,
            details = details.unwrap_or("no details"),
            "Health check failed"
        );
    }
}
