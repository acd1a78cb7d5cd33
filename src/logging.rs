//! Logging setup.
//!
//! The menu owns stdout, so log output goes to stderr or to the configured
//! file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{WordhoardError, WordhoardResult};

/// Builds the filter: `RUST_LOG` wins, otherwise the configured level.
fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

fn make_writer(config: &LogConfig) -> WordhoardResult<BoxMakeWriter> {
    match &config.file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        None => Ok(BoxMakeWriter::new(std::io::stderr)),
    }
}

/// Initialize the logging system from the log configuration.
///
/// # Returns
///
/// * `Ok(())` once the global subscriber is installed
/// * `Err(WordhoardError)` if the log file cannot be opened or a subscriber
///   is already installed
pub fn init_logging(config: &LogConfig) -> WordhoardResult<()> {
    let writer = make_writer(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(writer)
        .with_ansi(config.file.is_none())
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| WordhoardError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}
