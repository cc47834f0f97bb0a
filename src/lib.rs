//! car-favorites: search car images by name and keep a favorites list synced
//! with a remote car store.
//!
//! The crate provides:
//! - Image lookup through an external service, degrading to "no image"
//! - A favorites registry unique by car name, with fuzzy filtering
//! - Create-or-update synchronization with a REST store, decided by store id
//! - A local JSON file store implementing the same interface
//! - An event-driven workflow with a terminal front end
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal front end (main.rs) + Runtime             │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Workflow state machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Favorites     │   │ Worker Layer  │
//! │ (ui/)         │   │ (favorites/)  │   │ (worker/)     │
//! │ - Rendering   │   │ - Registry    │   │ - Lookup      │
//! │ - Theming     │   │ - Filtering   │   │ - Store calls │
//! │ - Input       │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                 │
//!                      ┌───────────────┐   ┌───────────────┐
//!                      │ Storage       │   │ Lookup        │
//!                      │ (storage/)    │   │ (lookup/)     │
//!                      │ - HTTP store  │   │ - HTTP + regex│
//!                      │ - JSON file   │   │               │
//!                      └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure, Domain, Observability              │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Car, favorite, rating, errors (domain/)          │
//! │  - JSON log file with rotation (observability/)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! `<config dir>/car-favorites/config.toml`, every field optional:
//!
//! ```toml
//! store_url = "http://localhost:3000"
//! # store_file = "~/cars.json"      # use a local file instead of the REST store
//! image_service_url = "https://carimagery.com/api.asmx/GetImageUrl"
//! timeout_secs = 10
//! eager_save = false
//! load_on_start = true
//! dark_mode = false
//! trace_level = "info"
//! ```
//!
//! # Example
//!
//! ```rust
//! use car_favorites::{initialize, handle_event, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let (_render, actions) = handle_event(&mut state, &Event::SearchSubmit("Ferrari".into()))?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), car_favorites::CarFavoritesError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod favorites;
pub mod infrastructure;
pub mod lookup;
pub mod runtime;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, WorkflowPhase};
pub use domain::{CarFavoritesError, CarId, CarRecord, FavoriteEntry, Rating, Result};
pub use runtime::{DispatchOutcome, Runtime};
pub use ui::{Theme, ThemeState};

use crate::lookup::HttpImageLookup;
use crate::storage::{CarStore, HttpCarStore, JsonFileCarStore};
use crate::worker::CarWorker;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default REST store base URL.
pub const DEFAULT_STORE_URL: &str = "http://localhost:3000";

/// Default image lookup endpoint.
pub const DEFAULT_IMAGE_SERVICE_URL: &str = "https://carimagery.com/api.asmx/GetImageUrl";

/// Default timeout for both external services.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration.
///
/// Loaded from TOML; every field has a default so partial files are valid.
/// Command-line flags and `CARFAV_*` environment variables override it in the
/// binary.
///
/// # Example
///
/// ```rust
/// use car_favorites::Config;
///
/// let config = Config::from_toml_str("eager_save = true\ntimeout_secs = 3").unwrap();
/// assert!(config.eager_save);
/// assert_eq!(config.timeout_secs, 3);
/// assert_eq!(config.store_url, "http://localhost:3000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST store; `/cars` is appended.
    pub store_url: String,

    /// Local JSON file used instead of the REST store when set.
    pub store_file: Option<String>,

    /// Image lookup endpoint.
    pub image_service_url: String,

    /// Timeout in seconds for lookup and store requests.
    pub timeout_secs: u64,

    /// Persist a non-favorite record right after each successful lookup.
    pub eager_save: bool,

    /// Load favorites from the store at startup.
    pub load_on_start: bool,

    /// Start with the dark palette.
    pub dark_mode: bool,

    /// TOML palette replacing the built-in light theme.
    pub light_theme_file: Option<String>,

    /// TOML palette replacing the built-in dark theme.
    pub dark_theme_file: Option<String>,

    /// Log filter directive (`trace`, `debug`, `info`, `warn`, `error`).
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_STORE_URL.to_string(),
            store_file: None,
            image_service_url: DEFAULT_IMAGE_SERVICE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            eager_save: false,
            load_on_start: true,
            dark_mode: false,
            light_theme_file: None,
            dark_theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CarFavoritesError::Config`] on invalid TOML or field types.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| CarFavoritesError::Config(format!("invalid config: {e}")))
    }

    /// Loads configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields [`Config::default`]; a
    /// missing file that was asked for explicitly is an error.
    ///
    /// # Errors
    ///
    /// Returns [`CarFavoritesError::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let default_path = infrastructure::default_config_path();
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (default_path.as_path(), false),
        };

        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| CarFavoritesError::Config(format!("failed to read {}: {e}", path.display())))?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Request timeout for both external services.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Creates the initial application state.
///
/// Palettes come from the configured theme files when they load, otherwise
/// from the built-in themes. Favorites start empty; the front end requests a
/// refresh when `load_on_start` is set.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing car-favorites");

    let light = load_theme(config.light_theme_file.as_deref(), "light");
    let dark = load_theme(config.dark_theme_file.as_deref(), "dark");

    AppState::new(ThemeState::new(light, dark, config.dark_mode), config.eager_save)
}

fn load_theme(theme_file: Option<&str>, built_in: &str) -> Theme {
    let fallback = || Theme::from_name(built_in).unwrap_or_default();

    theme_file.map_or_else(fallback, |theme_file| {
        Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using built-in");
            fallback()
        })
    })
}

/// Opens the configured car store: the JSON file when `store_file` is set,
/// the REST store otherwise.
///
/// # Errors
///
/// Returns store or client construction errors.
pub fn open_store(config: &Config) -> Result<Box<dyn CarStore>> {
    match &config.store_file {
        Some(file) => {
            let path = infrastructure::expand_tilde(file);
            tracing::debug!(path = %path.display(), "using JSON file store");
            Ok(Box::new(JsonFileCarStore::new(path)?))
        }
        None => {
            tracing::debug!(store_url = %config.store_url, "using HTTP store");
            Ok(Box::new(HttpCarStore::new(config.store_url.clone(), config.timeout())?))
        }
    }
}

/// Builds the worker with the configured store and HTTP image lookup.
///
/// # Errors
///
/// Returns store or client construction errors.
pub fn build_worker(config: &Config) -> Result<CarWorker> {
    let lookup = HttpImageLookup::new(config.image_service_url.clone(), config.timeout())?;
    Ok(CarWorker::new(Box::new(lookup), open_store(config)?))
}
