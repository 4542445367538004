//! Color palette browser for the terminal.
//!
//! Browse a palette as a grid of swatches, copy colors as HEX, RGB, HSL or
//! Tailwind class names, search, and export the palette.
//! Run with: swatchtui [-p|--palette <FILE>] [-f|--format <FORMAT>]

mod app;
mod clipboard;
mod color;
mod constants;
mod contrast;
mod event;
mod export;
mod format;
mod layout;
mod logging;
mod palette;
mod prefs;
mod register;
mod search;
mod theme;
mod toast;
mod ui;

use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::app::{App, View};
use crate::clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
use crate::event::EventHandler;
use crate::format::DisplayFormat;
use crate::logging::LogConfig;
use crate::palette::Palette;
use crate::theme::ThemeController;

/// Command line options.
#[derive(Debug, Default)]
struct Args {
    palette: Option<PathBuf>,
    format: Option<String>,
    log_file: Option<PathBuf>,
    no_clipboard: bool,
}

/// Parses command line arguments.
///
/// Supports:
/// - `-p <FILE>` or `--palette <FILE>` to load a palette file
/// - `-f <FORMAT>` or `--format <FORMAT>` to pick the starting display format
/// - `--log-file <FILE>` to write logs to a file
/// - `--no-clipboard` to keep copies in memory instead of the system clipboard
/// - `-h` or `--help` to show usage
fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args::default();

    // Simple argument parsing using iterator
    let mut args_iter = args.iter().skip(1); // Skip program name

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-p" | "--palette" => {
                parsed.palette = Some(PathBuf::from(required_value(arg, args_iter.next())));
            }
            "-f" | "--format" => {
                parsed.format = Some(required_value(arg, args_iter.next()));
            }
            "--log-file" => {
                parsed.log_file = Some(PathBuf::from(required_value(arg, args_iter.next())));
            }
            "--no-clipboard" => parsed.no_clipboard = true,
            "-h" | "--help" => {
                println!("swatchtui - color palette browser");
                println!();
                println!("Usage: swatchtui [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --palette <FILE>   Load a palette TOML file instead of the built-in one");
                println!("  -f, --format <FORMAT>  Starting format: hex, rgb, hsl, class");
                println!("      --log-file <FILE>  Append logs to FILE (or set SWATCHTUI_LOG_FILE)");
                println!("      --no-clipboard     Do not touch the system clipboard");
                println!("  -h, --help             Show this help message");
                println!();
                println!("Log filtering follows SWATCHTUI_LOG, e.g. SWATCHTUI_LOG=swatchtui=debug");
                std::process::exit(0);
            }
            other => {
                eprintln!("Error: Unknown argument '{}'", other);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }

    parsed
}

/// Returns the value following `flag`, exiting with an error if missing.
fn required_value(flag: &str, value: Option<&String>) -> String {
    match value {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {flag} requires a value");
            std::process::exit(1);
        }
    }
}

/// Entry point for the application.
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = parse_args();

    let log_config = LogConfig::from_env(args.log_file.clone());
    logging::init_logging(&log_config).context("Failed to set up logging")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting swatchtui");

    let palette = match &args.palette {
        Some(path) => Palette::load(path)
            .with_context(|| format!("Failed to load palette from {}", path.display()))?,
        None => Palette::builtin().context("Failed to load the built-in palette")?,
    };
    let format = args
        .format
        .as_deref()
        .map(DisplayFormat::parse)
        .unwrap_or_default();
    let theme = ThemeController::load(prefs::open_default(), theme::terminal_prefers_dark());
    let clipboard: Arc<dyn ClipboardSink> = if args.no_clipboard {
        Arc::new(MemoryClipboard::default())
    } else {
        Arc::new(SystemClipboard)
    };

    let app = App::new(palette, format, theme, clipboard);

    // Initialize the terminal
    let terminal = ratatui::init();

    // Run the application
    let result = run_app(terminal, app).await;

    // Restore the terminal to its original state
    if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
        tracing::warn!(error = %e, "failed to disable mouse capture");
    }
    ratatui::restore();

    result
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Fit the grid to the terminal and draw the current UI state
/// 2. Handle user input events
/// 3. Apply finished copies and timers
/// 4. Repeat until the user quits
async fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    execute!(io::stdout(), EnableMouseCapture).context("Failed to enable mouse capture")?;

    // Create the event handler
    let event_handler = EventHandler::new();

    // Main loop
    loop {
        let size = terminal.size().context("Failed to read terminal size")?;
        app.resize(ui::grid_area(Rect::new(0, 0, size.width, size.height), &app));

        // Draw the UI
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        // Typed text goes to the search box instead of key bindings
        let event = if app.current_view == View::Search {
            event_handler.next_input()?
        } else {
            event_handler.next()?
        };

        if let Some(action) = event {
            // Process the event and check if we should quit
            if app.handle_event(action).await? {
                break;
            }
        }

        app.tick(Instant::now());
    }

    tracing::info!("exiting");
    Ok(())
}
