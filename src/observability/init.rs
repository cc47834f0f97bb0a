//! Tracing initialization and subscriber setup.
//!
//! Installs a `tracing-subscriber` registry with an [`EnvFilter`] and a JSON
//! formatting layer writing to a rotating log file in the data directory.
//! Standard output belongs to the terminal UI, so nothing is logged there.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "car-favorites.log";

/// Initializes the tracing subscriber with file output.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently gives up if the directory cannot be created
/// - Idempotent: only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    init_tracing_in(config, &data_dir);
}

/// Like [`init_tracing`], writing the log file into `log_dir`.
pub fn init_tracing_in(config: &Config, log_dir: &Path) {
    if std::fs::create_dir_all(log_dir).is_err() {
        return;
    }

    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let writer = Arc::new(FileWriter::new(log_dir.join(LOG_FILE_NAME)));
    let file_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_ansi(false)
        .with_writer(writer);

    let _ = tracing_subscriber::registry().with(filter).with(file_layer).try_init();

    tracing::debug!(log_dir = %log_dir.display(), level = level, "tracing initialized");
}
