//! Wizard Session State Machine
//!
//! The `Session` is the single owned source of truth for one user's wizard:
//! design mode, current step, the chosen component and topology, the active
//! topology category tab, and the parameter set.
//!
//! # Design Principles
//!
//! - **No Global State**: the session is a plain value owned by the caller
//! - **Validated Transitions**: every intent is checked against the current
//!   mode and step; rejected intents return an error and change nothing
//! - **Sticky Selections**: going back never clears a component or topology,
//!   so moving forward again restores them
//!
//! # Step Flow
//!
//! ```text
//! Overview --select_mode--> Component --select_component--> Topology
//!     ^                        |                               |
//!     +--------go_back---------+                      select_topology
//!                                                              v
//!                          Results <--submit-- Parameters <----+
//! ```

use crate::catalog::{self, TopologyEntry};
use crate::parameters::{ParameterError, ParameterField, ParameterSet, ParameterValue};
use crate::suitability::{resolve_suitability, SuitabilityRating};
use crate::types::{ComponentKind, DesignMode, TopologyCategory, WizardStep};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned for rejected wizard intents
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// A mode can only be chosen from the overview
    #[error("A design mode can only be chosen from the overview (currently in {current} mode)")]
    NotInOverview { current: DesignMode },

    /// `overview` is not a selectable design mode
    #[error("Overview is not a design mode")]
    OverviewNotSelectable,

    /// The wizard is on the overview and has no active step
    #[error("No design mode selected")]
    InOverview,

    /// The intent belongs to a different step
    #[error("Expected to be at the {expected} step, but the wizard is at {actual}")]
    WrongStep {
        expected: WizardStep,
        actual: WizardStep,
    },

    /// Topology id is not in the catalog
    #[error("Unknown topology '{0}'")]
    UnknownTopology(String),

    /// Topology cannot be used with the selected component
    #[error("Topology '{topology}' is not applicable to {component} designs")]
    NotApplicable {
        component: ComponentKind,
        topology: String,
    },

    /// Selecting a topology needs a component first
    #[error("Select a component before choosing a topology")]
    MissingComponent,

    /// Submitting needs a topology first
    #[error("Select a topology before continuing")]
    MissingTopology,

    /// Back from the overview has nowhere to go
    #[error("Already at the overview")]
    AlreadyAtOverview,
}

/// Snapshot of the request shown in the design summary card
#[derive(Debug, Clone, PartialEq)]
pub struct DesignSummary {
    pub mode: DesignMode,
    pub component: Option<ComponentKind>,
    pub topology: Option<&'static TopologyEntry>,
    pub suitability: SuitabilityRating,
    pub power_level: f64,
    pub switching_frequency: f64,
    pub efficiency: f64,
    pub stale_core_material: bool,
}

/// One user's wizard session.
///
/// # Example
///
/// ```
/// use magforge::session::Session;
/// use magforge::types::{ComponentKind, DesignMode, WizardStep};
///
/// let mut session = Session::new();
/// session.select_mode(DesignMode::Ai).unwrap();
/// session.select_component(ComponentKind::Transformer).unwrap();
/// session.select_topology("flyback").unwrap();
/// assert_eq!(session.step(), WizardStep::Parameters);
///
/// // Inductors cannot serve a flyback converter
/// let mut other = Session::new();
/// other.select_mode(DesignMode::Conventional).unwrap();
/// other.select_component(ComponentKind::Inductor).unwrap();
/// assert!(other.select_topology("flyback").is_err());
/// assert_eq!(other.step(), WizardStep::Topology);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    mode: DesignMode,
    step: WizardStep,
    component: Option<ComponentKind>,
    topology: Option<&'static str>,
    /// Active tab on the topology step; view state, not part of the selection
    active_category: TopologyCategory,
    parameters: ParameterSet,
}

impl Session {
    /// Fresh session on the overview with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> DesignMode {
        self.mode
    }

    #[inline]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[inline]
    pub fn component(&self) -> Option<ComponentKind> {
        self.component
    }

    /// Selected topology id
    #[inline]
    pub fn topology(&self) -> Option<&'static str> {
        self.topology
    }

    /// Selected topology catalog entry
    pub fn topology_entry(&self) -> Option<&'static TopologyEntry> {
        self.topology.and_then(catalog::find_topology)
    }

    #[inline]
    pub fn active_category(&self) -> TopologyCategory {
        self.active_category
    }

    #[inline]
    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    #[inline]
    pub fn is_overview(&self) -> bool {
        self.mode == DesignMode::Overview
    }

    /// Suitability of a topology for the current component (`Unknown` when unset)
    pub fn suitability_of(&self, topology_id: &str) -> SuitabilityRating {
        match self.component {
            Some(component) => resolve_suitability(component, topology_id),
            None => SuitabilityRating::Unknown,
        }
    }

    /// Steps up to and including this one are reachable with the current selections
    pub fn furthest_reachable_step(&self) -> WizardStep {
        match (self.component, self.topology) {
            (None, _) => WizardStep::Component,
            (Some(_), None) => WizardStep::Topology,
            (Some(_), Some(_)) => WizardStep::Results,
        }
    }

    /// The step never runs ahead of the selections
    pub fn is_consistent(&self) -> bool {
        self.step <= self.furthest_reachable_step()
    }

    fn require_step(&self, expected: WizardStep) -> Result<(), TransitionError> {
        if self.is_overview() {
            return Err(TransitionError::InOverview);
        }
        if self.step != expected {
            return Err(TransitionError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }

    fn rejected(err: TransitionError) -> TransitionError {
        warn!("Rejected wizard transition: {}", err);
        err
    }

    /// Leave the overview in the given mode; the wizard restarts at the component step.
    ///
    /// # Errors
    ///
    /// - `NotInOverview` if a mode is already active
    /// - `OverviewNotSelectable` if `mode` is `Overview`
    pub fn select_mode(&mut self, mode: DesignMode) -> Result<WizardStep, TransitionError> {
        if !self.is_overview() {
            return Err(Self::rejected(TransitionError::NotInOverview { current: self.mode }));
        }
        if mode == DesignMode::Overview {
            return Err(Self::rejected(TransitionError::OverviewNotSelectable));
        }

        self.mode = mode;
        self.step = WizardStep::Component;
        debug!("Entered {} mode", mode);
        Ok(self.step)
    }

    /// Choose the component and advance to the topology step.
    ///
    /// # Errors
    ///
    /// - `InOverview` / `WrongStep` unless at the component step
    pub fn select_component(
        &mut self,
        component: ComponentKind,
    ) -> Result<WizardStep, TransitionError> {
        self.require_step(WizardStep::Component)
            .map_err(Self::rejected)?;

        self.component = Some(component);
        self.step = WizardStep::Topology;
        debug!("Selected component {}", component);
        Ok(self.step)
    }

    /// Choose the topology and advance to the parameters step.
    ///
    /// Also switches the active category tab to the topology's category.
    ///
    /// # Errors
    ///
    /// - `InOverview` / `WrongStep` unless at the topology step
    /// - `UnknownTopology` if the id is not in the catalog
    /// - `MissingComponent` if no component is selected
    /// - `NotApplicable` if the pairing is rated `Not applicable`
    pub fn select_topology(&mut self, topology_id: &str) -> Result<WizardStep, TransitionError> {
        self.require_step(WizardStep::Topology)
            .map_err(Self::rejected)?;

        let entry = catalog::find_topology(topology_id).ok_or_else(|| {
            Self::rejected(TransitionError::UnknownTopology(topology_id.to_string()))
        })?;
        let component = self
            .component
            .ok_or_else(|| Self::rejected(TransitionError::MissingComponent))?;

        if !resolve_suitability(component, entry.id).is_applicable() {
            return Err(Self::rejected(TransitionError::NotApplicable {
                component,
                topology: entry.id.to_string(),
            }));
        }

        self.topology = Some(entry.id);
        if let Some(category) = catalog::category_of(entry.id) {
            self.active_category = category;
        }
        self.step = WizardStep::Parameters;
        debug!("Selected topology {} for {}", entry.id, component);
        Ok(self.step)
    }

    /// Move back exactly one step; from the component step, return to the overview.
    ///
    /// Selections are kept.
    ///
    /// # Errors
    ///
    /// - `AlreadyAtOverview` when there is nothing to go back to
    pub fn go_back(&mut self) -> Result<WizardStep, TransitionError> {
        if self.is_overview() {
            return Err(Self::rejected(TransitionError::AlreadyAtOverview));
        }

        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                debug!("Back to {} step", previous);
            }
            None => {
                self.mode = DesignMode::Overview;
                debug!("Back to overview");
            }
        }
        Ok(self.step)
    }

    /// Submit the parameters and show the results step. No computation happens.
    ///
    /// # Errors
    ///
    /// - `InOverview` / `WrongStep` unless at the parameters step
    /// - `MissingTopology` if no topology is selected
    pub fn submit(&mut self) -> Result<WizardStep, TransitionError> {
        self.require_step(WizardStep::Parameters)
            .map_err(Self::rejected)?;
        if self.topology.is_none() {
            return Err(Self::rejected(TransitionError::MissingTopology));
        }

        self.step = WizardStep::Results;
        debug!("Submitted {} design request", self.mode);
        Ok(self.step)
    }

    /// Header "Back" button: return to the overview from any step, keeping
    /// the step and all selections.
    ///
    /// # Errors
    ///
    /// - `AlreadyAtOverview` if already there
    pub fn return_to_overview(&mut self) -> Result<(), TransitionError> {
        if self.is_overview() {
            return Err(Self::rejected(TransitionError::AlreadyAtOverview));
        }
        self.mode = DesignMode::Overview;
        debug!("Returned to overview from {} step", self.step);
        Ok(())
    }

    /// Switch the topology category tab. Never touches the selection.
    pub fn select_category(&mut self, category: TopologyCategory) {
        self.active_category = category;
    }

    /// Set one parameter field (last write wins)
    pub fn set_parameter(
        &mut self,
        field: ParameterField,
        value: ParameterValue,
    ) -> Result<(), ParameterError> {
        self.parameters.set(field, value)?;
        debug!("Parameter {} set to {}", field, self.parameters.display_value(field));
        Ok(())
    }

    /// Data for the design summary card
    pub fn summary(&self) -> DesignSummary {
        DesignSummary {
            mode: self.mode,
            component: self.component,
            topology: self.topology_entry(),
            suitability: self
                .topology
                .map_or(SuitabilityRating::Unknown, |id| self.suitability_of(id)),
            power_level: self.parameters.power_level,
            switching_frequency: self.parameters.switching_frequency,
            efficiency: self.parameters.efficiency,
            stale_core_material: self.parameters.has_stale_core_material(),
        }
    }
}
