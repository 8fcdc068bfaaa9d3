//! Design preset files.
//!
//! A preset is a read-only JSON document that seeds a wizard session:
//!
//! ```json
//! {
//!   "mode": "conventional",
//!   "component": "inductor",
//!   "topology": "buck",
//!   "parameters": { "powerLevel": 250, "coreType": "ferrite", "coreMaterial": "N87" }
//! }
//! ```
//!
//! Every key is optional and `parameters` may be partial; missing fields
//! keep their defaults. Presets are replayed through the session's
//! transitions, so they can never produce a state the wizard itself could
//! not reach. MagForge never writes presets.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::catalog;
use crate::error::MagForgeError;
use crate::parameters::{ParameterField, ParameterSet};
use crate::session::Session;
use crate::suitability::resolve_suitability;
use crate::types::{ComponentKind, DesignMode, WizardStep};

/// A design preset loaded from disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignPreset {
    #[serde(default)]
    pub mode: Option<DesignMode>,
    #[serde(default)]
    pub component: Option<ComponentKind>,
    #[serde(default)]
    pub topology: Option<String>,
    #[serde(default)]
    pub parameters: ParameterSet,
}

impl DesignPreset {
    /// Load a preset from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read preset from {:?}", path.as_ref()))?;

        let preset: Self = serde_json::from_str(&content).context("Failed to parse preset JSON")?;
        debug!("Loaded preset from {:?}", path.as_ref());

        Ok(preset)
    }

    /// Let an explicit mode (`design --mode`) replace the preset's own
    pub fn with_mode_override(mut self, mode: Option<DesignMode>) -> Self {
        if let Some(mode) = mode {
            self.mode = Some(mode);
        }
        self
    }

    /// Check the preset without touching a session
    pub fn validate(&self) -> Result<()> {
        if self.mode == Some(DesignMode::Overview) {
            anyhow::bail!("Preset mode must be ai, conventional or compare");
        }

        if self.component.is_some() && self.mode.is_none() {
            anyhow::bail!("A preset that selects a component must also select a mode");
        }

        if let Some(ref topology) = self.topology {
            let Some(component) = self.component else {
                anyhow::bail!("A preset that selects a topology must also select a component");
            };
            let entry = catalog::find_topology(topology)
                .with_context(|| format!("Unknown topology '{}'", topology))?;
            if !resolve_suitability(component, entry.id).is_applicable() {
                anyhow::bail!(
                    "{} is not applicable to {} designs",
                    entry.name,
                    component.prose_name()
                );
            }
        }

        if let Some(ref material) = self.parameters.core_material {
            match self.parameters.core_type {
                None => anyhow::bail!("Core material '{}' needs a core type", material),
                Some(core_type) if !core_type.offers(material) => anyhow::bail!(
                    "Core material '{}' is not offered for {} cores (expected one of: {})",
                    material,
                    core_type.label(),
                    core_type.materials().join(", ")
                ),
                Some(_) => {}
            }
        }

        for field in ParameterField::iter() {
            if let Some(value) = self.parameters.number(field) {
                if !value.is_finite() {
                    anyhow::bail!("{} must be a finite number", field.label());
                }
            }
        }

        Ok(())
    }

    /// Replay the preset onto a fresh session.
    ///
    /// Parameters are applied field by field in form order, then the mode,
    /// component and topology are selected through the normal transitions.
    /// Returns the step the wizard ends up on.
    pub fn apply_to(&self, session: &mut Session) -> Result<WizardStep, MagForgeError> {
        for field in ParameterField::iter() {
            session.set_parameter(field, self.parameters.get(field))?;
        }

        if let Some(mode) = self.mode {
            session.select_mode(mode)?;
        } else if self.component.is_some() {
            return Err(MagForgeError::config(
                "A preset that selects a component must also select a mode",
            ));
        }

        if let Some(component) = self.component {
            session.select_component(component)?;
        }

        if let Some(ref topology) = self.topology {
            session.select_topology(topology)?;
        }

        info!(
            "Applied preset: mode={}, step={}",
            session.mode(),
            session.step()
        );
        Ok(session.step())
    }
}
