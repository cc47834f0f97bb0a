//! Platform directories and path expansion.
//!
//! Configuration lives in `<config dir>/car-favorites` and logs plus the local
//! JSON store in `<data dir>/car-favorites`, resolved with the `dirs` crate.
//! Both fall back to the current directory when the platform reports none.

use std::path::PathBuf;

/// Application directory name under the platform config/data roots.
pub const APP_DIR_NAME: &str = "car-favorites";

/// Returns the directory holding `config.toml`.
///
/// # Examples
///
/// ```
/// use car_favorites::infrastructure::get_config_dir;
///
/// assert!(get_config_dir().ends_with("car-favorites"));
/// ```
#[must_use]
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Returns the directory for logs and the local car store.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}

/// Default location of `config.toml`.
#[must_use]
pub fn default_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or on platforms without a home directory, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use car_favorites::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// assert!(!expand_tilde("~/cars.json").starts_with("~"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
