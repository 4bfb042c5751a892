//! Feast: a terminal dashboard built with ratatui.
//!
//! This binary loads configuration, initialises logging and the terminal,
//! runs the main event loop, and restores the terminal on exit or panic.

mod app;
mod input;
mod panel;
mod render;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use feast_core::config::settings::LogConfig;
use feast_core::event::Input;
use feast_core::{resolve_dir, Config, CoreError, CoreResult, Keymap, Theme};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;
use crate::input::translate;
use crate::render::render;

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Project-local `./config` when present, otherwise `~/.config/feast`.
fn config_dir() -> PathBuf {
    let local = PathBuf::from("config");
    if local.exists() {
        return local;
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/"))
        .join(".config")
        .join("feast")
}

/// Unwraps a config load, falling back to defaults.
///
/// A missing file is expected and silent; anything else is remembered so it
/// can be logged once the subscriber is up.
fn or_default<T: Default>(result: CoreResult<T>, path: &Path, warnings: &mut Vec<String>) -> T {
    match result {
        Ok(value) => value,
        Err(CoreError::NotFound(_)) => T::default(),
        Err(e) => {
            warnings.push(format!("{}: {e}, using defaults", path.display()));
            T::default()
        }
    }
}

/// Routes `tracing` output to the configured log file, never the terminal.
fn init_tracing(log: &LogConfig) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log.path)?;
    let level = log
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::DEBUG);

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

/// First positional argument, or the invoking user's home directory,
/// resolved to an absolute path.
fn start_dir() -> CoreResult<PathBuf> {
    let dir = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => dirs::home_dir().ok_or(CoreError::HomeDirUnavailable)?,
    };
    resolve_dir(&dir)
}

fn main() -> anyhow::Result<()> {
    let cfg_dir = config_dir();
    let mut warnings = Vec::new();

    let config_path = cfg_dir.join("default.toml");
    let config: Config = or_default(Config::load(&config_path), &config_path, &mut warnings);

    if let Err(e) = init_tracing(&config.log) {
        eprintln!("Error: cannot open log file {}: {e}", config.log.path);
        std::process::exit(1);
    }
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let start_dir = match start_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut warnings = Vec::new();
    let keymap_path = cfg_dir.join("keymap.toml");
    let keymap: Keymap = or_default(Keymap::load(&keymap_path), &keymap_path, &mut warnings);
    let theme_path = cfg_dir.join("theme.toml");
    let theme: Theme = or_default(Theme::load(&theme_path), &theme_path, &mut warnings);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    tracing::info!(start = %start_dir.display(), config = %cfg_dir.display(), "starting feast");

    let app = App::new(start_dir, &config, &keymap, theme);

    install_panic_hook();

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            tracing::error!(error = %e, "terminal initialisation failed");
            let _ = disable_raw_mode();
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let result = run_app(&mut terminal, app, &keymap);

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        tracing::error!(error = %e, "event loop failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    tracing::info!("feast exited");
    Ok(())
}

/// Synchronous event loop: draw, block on one terminal event, dispatch it.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    keymap: &Keymap,
) -> anyhow::Result<()> {
    let size = terminal.size()?;
    app.handle(Input::Resize {
        width: size.width,
        height: size.height,
    });

    while !app.should_quit() {
        terminal.draw(|f| render(f, &mut app))?;

        let event = event::read()?;
        if let Some(input) = translate(&event, keymap) {
            app.handle(input);
        }
    }

    Ok(())
}
