//! MagForge Library
//!
//! Selection state machine, static catalogs and parameter schema behind the
//! MagForge magnetic component design wizard, plus the TUI that drives them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod error;
pub mod input;
pub mod parameters;
pub mod preset;
pub mod session;
pub mod suitability;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{CategoryEntry, ComponentInfo, TopologyEntry};
pub use error::MagForgeError;
pub use parameters::{
    CoreShape, CoreType, FieldRange, ParameterError, ParameterField, ParameterSection,
    ParameterSet, ParameterValue, WindingMaterial,
};
pub use preset::DesignPreset;
pub use session::{DesignSummary, Session, TransitionError};
pub use suitability::{
    resolve_suitability, resolve_suitability_strict, SuitabilityError, SuitabilityRating,
};
pub use types::{Complexity, ComponentKind, DesignMode, Isolation, TopologyCategory, WizardStep};
