//! quotient - Main entry point
//!
//! Terminal setup/teardown, logging initialization, and command dispatch.

use std::io::stdout;
use std::path::{Path, PathBuf};

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use quotient::app::App;
use quotient::catalog::Catalog;
use quotient::cli::{Cli, Commands};
use quotient::error;
use quotient::export;
use quotient::selection::{Selection, SelectionSpec};

/// Initialize the logger with appropriate settings
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    init_logging();
    info!("quotient starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Validate { catalog }) => {
            info!("Validating catalog file: {:?}", catalog);
            match Catalog::load_from_file(&catalog) {
                Ok(loaded) => match loaded.validate() {
                    Ok(_) => {
                        info!("Catalog validation successful");
                        println!("✓ Catalog file is valid: {}", catalog.display());
                    }
                    Err(e) => {
                        error!("Catalog validation failed: {}", e);
                        eprintln!("✗ Catalog validation failed: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load catalog file: {}", e);
                    eprintln!("✗ Failed to load catalog file: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Totals { catalog, select }) => {
            run_totals(catalog.as_deref(), &select)?;
        }
        Some(Commands::Quote {
            catalog,
            export_dir,
        }) => {
            run_tui(catalog.as_deref(), export_dir)?;
        }
        None => {
            info!("No command specified, launching the estimate builder");
            run_tui(None, PathBuf::from("."))?;
        }
    }

    Ok(())
}

/// Load a catalog from a file, or fall back to the built-in data set.
fn load_catalog(path: Option<&Path>) -> quotient::error::Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::load_from_file(path)?;
            catalog.validate()?;
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Run the interactive estimate builder.
fn run_tui(catalog_path: Option<&Path>, export_dir: PathBuf) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path).context("Failed to load catalog")?;

    debug!("Initializing terminal for TUI mode");
    enable_raw_mode()
        .map_err(|e| error::general_error(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| error::general_error(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| error::general_error(format!("Failed to create terminal: {}", e)))?;

    let mut app = App::new(catalog, export_dir);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}

/// Apply selection specs and print the resulting estimate (headless mode).
fn run_totals(catalog_path: Option<&Path>, select: &[String]) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path).context("Failed to load catalog")?;
    let mut selection = Selection::new();

    for raw in select {
        let spec: SelectionSpec = raw.parse()?;
        if !selection.apply_spec(&catalog, &spec) {
            error!("Unknown catalog entry: {}", raw);
            eprintln!("✗ Unknown catalog entry: {}", raw);
            std::process::exit(1);
        }
    }

    print!("{}", export::render_snapshot(&selection, chrono::Local::now()));
    Ok(())
}
