//! Watchterm - console watch app hosted in a real terminal
//!
//! Drives the console at a fixed tick: collects terminal events into a
//! per-frame input snapshot, runs one frame, and draws the render queue.
//! Submitted lines run through the user's shell.

mod events;
mod raw_mode;
mod screen;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;
use events::HostAction;
use screen::Screen;
use shell::ShellRunner;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use watchterm_core::{
    run_frame, Assets, CommandRunner, ConsoleLayout, InputState, OutputStream, TerminalSession,
};

/// Watchterm - terminal console app for the watch face
#[derive(Parser, Debug)]
#[command(name = "watchterm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Console watch app running in your terminal", long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log file (default: <data dir>/watchterm/watchterm.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Layout JSON file (default: <config dir>/watchterm/layout.json if present)
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Shell used to run submitted lines
    #[arg(short, long)]
    shell: Option<String>,

    /// Milliseconds between frames
    #[arg(long, default_value_t = 33)]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level, args.log_file.as_deref())?;
    info!("Starting watchterm v{}", env!("CARGO_PKG_VERSION"));

    let layout = load_layout(args.layout.as_deref())?;
    let assets = Assets::watch_default();

    let shell = args.shell.unwrap_or_else(ShellRunner::default_shell);
    info!("Running commands with {}", shell);
    let (output, inbox) = OutputStream::new();
    let runner = ShellRunner::new(shell, output, tokio::runtime::Handle::current());

    let mut session = TerminalSession::new(layout.clone(), &assets, runner)
        .context("Failed to create console session")?
        .with_inbox(inbox);

    let (columns, _) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut screen = Screen::new(&layout, &assets, columns);

    let tick = Duration::from_millis(args.tick_ms.max(1));
    let guard = raw_mode::RawModeGuard::enable().context("Failed to enter raw mode")?;
    let result = run_console(&mut session, &assets, &mut screen, tick).await;
    drop(guard);

    info!("Shutdown complete");
    result
}

/// Frame loop; returns when the app asks to be unloaded or the user quits
async fn run_console<R: CommandRunner>(
    session: &mut TerminalSession<R>,
    assets: &Assets,
    screen: &mut Screen,
    tick: Duration,
) -> Result<()> {
    let mut input = InputState::new();
    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let mut stdout = std::io::stdout();

    loop {
        interval.tick().await;

        while event::poll(Duration::ZERO)? {
            match events::apply(event::read()?, screen, &mut input) {
                HostAction::Continue => {}
                HostAction::Resize { columns } => screen.resize(columns),
                HostAction::Quit => {
                    info!("Quit requested from keyboard");
                    return Ok(());
                }
            }
        }

        let frame_input = input.take_frame();
        let result = run_frame(&mut *session, &frame_input, assets);
        screen
            .draw(&mut stdout, &result.render_queue)
            .context("Failed to draw frame")?;

        if !result.keep_running {
            info!("Console app requested unload");
            return Ok(());
        }
    }
}

/// Setup logging with tracing
///
/// Logs go to a file: the console owns the terminal screen.
fn setup_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let log_level = level.parse::<Level>().unwrap_or(Level::INFO);

    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let path = log_path(log_file);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();

    Ok(())
}

/// Explicit log file, else the per-user data dir, else the temp dir
fn log_path(log_file: Option<&Path>) -> PathBuf {
    if let Some(path) = log_file {
        return path.to_path_buf();
    }
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("watchterm")
        .join("watchterm.log")
}

/// Layout from an explicit file, the per-user config file, or defaults
fn load_layout(explicit: Option<&Path>) -> Result<ConsoleLayout> {
    if let Some(path) = explicit {
        return ConsoleLayout::load(path)
            .with_context(|| format!("Failed to load layout {}", path.display()));
    }

    let default_path = dirs::config_dir().map(|dir| dir.join("watchterm").join("layout.json"));
    match default_path {
        Some(path) if path.exists() => ConsoleLayout::load(&path)
            .with_context(|| format!("Failed to load layout {}", path.display())),
        _ => Ok(ConsoleLayout::default()),
    }
}
