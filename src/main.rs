//! MagForge - Main entry point
//!
//! Launches the design wizard TUI or runs one of the headless catalog,
//! suitability and preset commands.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use magforge::app::App;
use magforge::catalog::{self, TopologyEntry};
use magforge::cli::{Cli, Commands};
use magforge::error::MagForgeError;
use magforge::preset::DesignPreset;
use magforge::session::Session;
use magforge::suitability::{resolve_suitability, resolve_suitability_strict, SuitabilityRating};
use magforge::types::{ComponentKind, DesignMode, TopologyCategory};

/// Initialize tracing.
///
/// `RUST_LOG` overrides the level. Logs go to `log_file` when given;
/// otherwise the TUI discards them and headless commands write to stderr.
fn init_logging(verbose: bool, log_file: Option<&Path>, tui: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
        None if tui => builder.with_writer(std::io::sink).init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let tui = matches!(cli.command, None | Some(Commands::Design { .. }));
    init_logging(cli.verbose, cli.log_file.as_deref(), tui)?;
    info!("MagForge starting up");
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Design { mode, preset }) => run_wizard(mode, preset)?,
        Some(Commands::Catalog {
            category,
            component,
            json,
        }) => print_catalog(category, component, json)?,
        Some(Commands::Suitability {
            component,
            topology,
            strict,
        }) => print_suitability(component, &topology, strict),
        Some(Commands::Validate { preset }) => validate_preset(&preset),
        None => {
            info!("No command specified, launching the wizard");
            run_wizard(None, None)?;
        }
    }

    Ok(())
}

/// Build the starting session from `--preset` and `--mode`
fn initial_session(mode: Option<DesignMode>, preset_path: Option<PathBuf>) -> Result<Session> {
    // --mode wins over the preset's mode, and is applied before validation
    let preset = match preset_path {
        Some(ref path) => {
            let preset = DesignPreset::load_from_file(path)?.with_mode_override(mode);
            preset
                .validate()
                .with_context(|| format!("Invalid preset {:?}", path))?;
            preset
        }
        None => DesignPreset::default().with_mode_override(mode),
    };

    let mut session = Session::new();
    let step = preset
        .apply_to(&mut session)
        .context("Failed to apply preset")?;
    debug!("Starting wizard at {} step in {} mode", step, session.mode());
    Ok(session)
}

/// Run the TUI wizard
fn run_wizard(mode: Option<DesignMode>, preset: Option<PathBuf>) -> Result<()> {
    let session = initial_session(mode, preset)?;

    debug!("Initializing terminal for TUI mode");
    enable_raw_mode()
        .map_err(|e| MagForgeError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| MagForgeError::terminal(format!("Failed to enter alternate screen: {}", e)))?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| MagForgeError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| {
            let mut app = App::new(session);
            app.run(&mut terminal)
        });

    // Always restore the terminal, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    if let Err(ref e) = result {
        error!("Wizard exited with error: {}", e);
    }
    Ok(result?)
}

/// One catalog row for `--json` output
#[derive(Serialize)]
struct CatalogRow {
    category: TopologyCategory,
    #[serde(flatten)]
    topology: &'static TopologyEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    suitability: Option<SuitabilityRating>,
}

fn catalog_rows(
    category: Option<TopologyCategory>,
    component: Option<ComponentKind>,
) -> Vec<CatalogRow> {
    catalog::categories()
        .iter()
        .filter(|c| category.is_none_or(|wanted| wanted == c.category))
        .flat_map(|c| {
            c.topologies.iter().map(move |t| CatalogRow {
                category: c.category,
                topology: t,
                suitability: component.map(|k| resolve_suitability(k, t.id)),
            })
        })
        .collect()
}

/// Print the topology catalog
fn print_catalog(
    category: Option<TopologyCategory>,
    component: Option<ComponentKind>,
    json: bool,
) -> Result<()> {
    let rows = catalog_rows(category, component);

    if json {
        let output = serde_json::to_string_pretty(&rows).context("Failed to serialize catalog")?;
        println!("{}", output);
        return Ok(());
    }

    let mut current: Option<TopologyCategory> = None;
    for row in &rows {
        if current != Some(row.category) {
            if current.is_some() {
                println!();
            }
            println!("{}", row.category.name());
            current = Some(row.category);
        }
        let t = row.topology;
        let rating = row
            .suitability
            .map(|r| format!("  [{}]", r))
            .unwrap_or_default();
        println!(
            "  {:<13} {:<23} {:<13} {:<9}{}",
            t.id,
            t.name,
            t.isolation.to_string(),
            t.complexity.to_string(),
            rating
        );
    }
    Ok(())
}

/// Print a suitability rating; strict misses exit with status 1
fn print_suitability(component: ComponentKind, topology: &str, strict: bool) {
    if strict {
        match resolve_suitability_strict(component, topology) {
            Ok(rating) => println!("{}", rating),
            Err(e) => {
                eprintln!("✗ {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", resolve_suitability(component, topology));
    }
}

/// Load and validate a preset file
fn validate_preset(path: &Path) {
    info!("Validating preset file: {:?}", path);
    let preset = match DesignPreset::load_from_file(path) {
        Ok(preset) => preset,
        Err(e) => {
            error!("Failed to load preset file: {:#}", e);
            eprintln!("✗ Failed to load preset file: {:#}", e);
            std::process::exit(1);
        }
    };

    // Replay as well, so the message matches what the wizard would do
    let mut session = Session::new();
    let outcome = preset
        .validate()
        .and_then(|()| Ok(preset.apply_to(&mut session)?));
    match outcome {
        Ok(step) => {
            info!("Preset validation successful");
            if session.is_overview() {
                println!("✓ Preset is valid: {:?} (starts at the overview)", path);
            } else {
                println!("✓ Preset is valid: {:?} (starts at the {} step)", path, step);
            }
        }
        Err(e) => {
            error!("Preset validation failed: {:#}", e);
            eprintln!("✗ Preset validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
