//! Structured logging to a rotating JSON log file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt JSON layer → FileWriter → car-favorites.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `<data dir>/car-favorites/car-favorites.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **JSON Lines**: One event per line with the current span attached
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option (`--trace-level`, `CARFAV_TRACE_LEVEL`)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, init_tracing_in, LOG_FILE_NAME};
