use crate::types::{ComponentKind, DesignMode, TopologyCategory};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MagForge - magnetic component design wizard
#[derive(Parser)]
#[command(name = "magforge")]
#[command(about = "Interactive design wizard for inductors, transformers and coupled inductors")]
#[command(version)]
pub struct Cli {
    /// Write logs to this file (the TUI discards logs otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive design wizard
    Design {
        /// Skip the overview and start in this mode (ai, conventional, compare)
        #[arg(short, long, value_parser = parse_design_mode)]
        mode: Option<DesignMode>,

        /// Seed the wizard from a JSON preset file
        #[arg(short, long)]
        preset: Option<PathBuf>,
    },
    /// Print the topology catalog
    Catalog {
        /// Only show one category (dc-dc, ac-dc, dc-ac, custom)
        #[arg(short, long)]
        category: Option<TopologyCategory>,

        /// Annotate every topology with its suitability for this component
        #[arg(short = 'k', long)]
        component: Option<ComponentKind>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Look up the suitability of a component for a topology
    Suitability {
        /// Component type (inductor, transformer, coupled-inductor)
        component: ComponentKind,

        /// Topology id (e.g. buck, flyback, three-phase)
        topology: String,

        /// Fail on pairs with no recorded rating instead of printing Unknown
        #[arg(long)]
        strict: bool,
    },
    /// Validate a preset file
    Validate {
        /// Path to the preset file to validate
        preset: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

/// Parse a wizard mode; the overview is where the wizard starts, not a mode to pick
fn parse_design_mode(s: &str) -> Result<DesignMode, String> {
    match s.parse::<DesignMode>() {
        Ok(mode) if DesignMode::SELECTABLE.contains(&mode) => Ok(mode),
        _ => Err(format!(
            "invalid mode '{}' (expected one of: {})",
            s,
            DesignMode::SELECTABLE.map(|m| m.to_string()).join(", ")
        )),
    }
}
