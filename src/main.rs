//! Terminal front end and entry point.
//!
//! A line-oriented shell over the library: each input line is parsed into a
//! workflow event, dispatched through the [`Runtime`], and the screen is
//! re-rendered when the state changed.
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse CLI flags, load `config.toml`, apply overrides
//! 2. **Tracing**: Initialize the JSON log file
//! 3. **Build**: Create `AppState` and the worker for the configured store
//! 4. **Initial load**: Dispatch `RefreshFavorites` when `load_on_start` is set
//! 5. **Loop**: Read a command, dispatch, render; stop on `quit` or end of input

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use car_favorites::app::Event;
use car_favorites::ui::{self, Command, HELP_TEXT};
use car_favorites::{build_worker, initialize, Config, Runtime};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "car-favorites", version, about = "Search car images and keep a synced favorites list", long_about = None)]
struct Cli {
    /// Path to config.toml (default: <config dir>/car-favorites/config.toml)
    #[arg(long, env = "CARFAV_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the REST car store
    #[arg(long, env = "CARFAV_STORE_URL")]
    store_url: Option<String>,

    /// Keep cars in a local JSON file instead of the REST store
    #[arg(long, env = "CARFAV_STORE_FILE")]
    store_file: Option<String>,

    /// Image lookup endpoint
    #[arg(long, env = "CARFAV_IMAGE_SERVICE_URL")]
    image_service_url: Option<String>,

    /// Timeout in seconds for lookup and store requests
    #[arg(long, env = "CARFAV_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Store a draft record right after each lookup
    #[arg(long, env = "CARFAV_EAGER_SAVE")]
    eager_save: bool,

    /// Start with the dark theme
    #[arg(long, env = "CARFAV_DARK")]
    dark: bool,

    /// Log level for the log file
    #[arg(long, env = "CARFAV_TRACE_LEVEL")]
    trace_level: Option<String>,

    /// Screen width used for rendering
    #[arg(long, env = "COLUMNS", default_value_t = 80)]
    columns: usize,
}

impl Cli {
    /// Applies command-line and environment overrides on top of the file config.
    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.store_url {
            config.store_url.clone_from(url);
        }
        if let Some(file) = &self.store_file {
            config.store_file = Some(file.clone());
        }
        if let Some(url) = &self.image_service_url {
            config.image_service_url.clone_from(url);
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        if let Some(level) = &self.trace_level {
            config.trace_level = Some(level.clone());
        }
        config.eager_save |= self.eager_save;
        config.dark_mode |= self.dark;
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("car-favorites: {e}");
            return ExitCode::FAILURE;
        }
    };
    cli.apply(&mut config);

    car_favorites::observability::init_tracing(&config);
    let _span = tracing::debug_span!("session").entered();
    tracing::debug!(config = ?config, "configuration resolved");

    let worker = match build_worker(&config) {
        Ok(worker) => worker,
        Err(e) => {
            tracing::error!(error = %e, "failed to build worker");
            eprintln!("car-favorites: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut runtime = Runtime::new(initialize(&config), worker);
    if config.load_on_start {
        runtime.dispatch(Event::RefreshFavorites);
    }

    match run_loop(&mut runtime, cli.columns) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "terminal I/O failed");
            eprintln!("car-favorites: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_loop(runtime: &mut Runtime, columns: usize) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "{}", ui::render(runtime.state(), columns))?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match ui::parse_command(&line) {
            Some(Command::Dispatch(event)) => event,
            Some(Command::Help) => {
                writeln!(stdout, "{HELP_TEXT}")?;
                continue;
            }
            Some(Command::Unknown(word)) => {
                writeln!(stdout, "unknown command {word:?}, type `help`")?;
                continue;
            }
            None => continue,
        };

        let outcome = runtime.dispatch(command);
        if outcome.quit {
            tracing::debug!("quit requested");
            break;
        }
        if outcome.render {
            write!(stdout, "{}", ui::render(runtime.state(), columns))?;
        }
        stdout.flush()?;
    }

    Ok(())
}
