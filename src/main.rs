use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::SetTitle;

use world_clock::app::{event_loop, SystemClock, WorldClock};
use world_clock::config_io::{ConfigStore, APP_DIR_NAME};
use world_clock::timezone::all_timezones;
use world_clock::view::ui::WINDOW_TITLE;

/// A terminal clock showing the current time in several timezones
#[derive(Parser, Debug)]
#[command(name = "world-clock", version, about)]
struct Cli {
    /// Configuration file (defaults to <config dir>/world-clock/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Color theme (equilux, dark, light, high-contrast)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Log file (defaults to <data dir>/world-clock/world-clock.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Send log output to a file; the terminal belongs to the clock window
fn init_logging(path: Option<PathBuf>) -> Result<()> {
    let path = match path.or_else(default_log_path) {
        Some(path) => path,
        None => return Ok(()),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }
    }
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("world_clock=info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join("world-clock.log"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file)?;

    let path = cli
        .config
        .or_else(ConfigStore::default_path)
        .context("no configuration directory on this platform; pass --config")?;
    let mut store = ConfigStore::new(path);
    let mut config = store.load_or_default();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let mut app = WorldClock::new(config, all_timezones())
        .context("failed to build the clock window")?;

    let mut terminal = ratatui::init();
    let result = execute!(
        std::io::stdout(),
        EnableMouseCapture,
        SetTitle(WINDOW_TITLE)
    )
    .context("failed to set up the terminal")
    .and_then(|()| event_loop::run(&mut terminal, &mut app, &SystemClock, &mut store));

    // Restore the terminal even when the loop failed
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}
