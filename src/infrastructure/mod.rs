//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves the platform configuration and data directories and expands
//! user-supplied paths.

pub mod paths;

pub use paths::{default_config_path, expand_tilde, get_config_dir, get_data_dir};
