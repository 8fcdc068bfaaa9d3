//! Type-safe wizard vocabulary for MagForge
//!
//! Closed enumerations for everything the wizard selects between. Wire/CLI
//! identifiers are kebab-case (`coupled-inductor`, `dc-dc`) and are shared
//! by strum (parsing/Display) and serde (preset files).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Top-level design mode chosen on the overview screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DesignMode {
    #[default]
    Overview,
    Ai,
    Conventional,
    Compare,
}

impl DesignMode {
    /// Modes that can be entered from the overview
    pub const SELECTABLE: [DesignMode; 3] =
        [DesignMode::Ai, DesignMode::Conventional, DesignMode::Compare];

    /// Page heading shown above the wizard
    pub fn heading(self) -> &'static str {
        match self {
            Self::Overview => "MagForge",
            Self::Ai => "AI-Powered Design",
            Self::Conventional => "Conventional Design",
            Self::Compare => "Design Comparison",
        }
    }

    /// Short badge label for the header
    pub fn badge(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Ai => "AI",
            Self::Conventional => "Conventional",
            Self::Compare => "Compare",
        }
    }

    /// Label of the action that leaves the parameters step
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Ai => "Run AI Design",
            _ => "Calculate Design",
        }
    }

    /// Extra insight lines shown next to the parameter form (AI mode only)
    pub fn insights(self) -> &'static [&'static str] {
        match self {
            Self::Ai => &[
                "Core material optimization available",
                "Thermal modeling will be enhanced",
                "Multi-objective optimization enabled",
            ],
            _ => &[],
        }
    }
}

/// Wizard steps in sequential order.
///
/// # Step Flow
///
/// ```text
/// Component -> Topology -> Parameters -> Results
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum WizardStep {
    #[default]
    Component = 0,
    Topology = 1,
    Parameters = 2,
    Results = 3,
}

impl WizardStep {
    /// Total number of steps.
    pub const TOTAL_STEPS: usize = 4;

    /// Next step in the sequence, or None at the last step
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Component => Some(Self::Topology),
            Self::Topology => Some(Self::Parameters),
            Self::Parameters => Some(Self::Results),
            Self::Results => None,
        }
    }

    /// Previous step in the sequence, or None at the first step
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Component => None,
            Self::Topology => Some(Self::Component),
            Self::Parameters => Some(Self::Topology),
            Self::Results => Some(Self::Parameters),
        }
    }

    /// Display title for this step.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Component => "Select Magnetic Component Type",
            Self::Topology => "Select Power Electronics Topology",
            Self::Parameters => "Design Parameters",
            Self::Results => "Design Results",
        }
    }

    /// Step number (1-indexed for display).
    pub const fn step_number(self) -> usize {
        self as usize + 1
    }
}

/// Magnetic component type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ComponentKind {
    Inductor,
    Transformer,
    CoupledInductor,
}

impl ComponentKind {
    /// Title-case display name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Inductor => "Inductor",
            Self::Transformer => "Transformer",
            Self::CoupledInductor => "Coupled Inductor",
        }
    }

    /// Lowercase name used in running text ("your coupled inductor design")
    pub fn prose_name(self) -> &'static str {
        match self {
            Self::Inductor => "inductor",
            Self::Transformer => "transformer",
            Self::CoupledInductor => "coupled inductor",
        }
    }
}

/// Topology category (the tabs of the topology step)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TopologyCategory {
    #[default]
    DcDc,
    AcDc,
    DcAc,
    Custom,
}

impl TopologyCategory {
    /// Category display name
    pub fn name(self) -> &'static str {
        match self {
            Self::DcDc => "DC-DC Converters",
            Self::AcDc => "AC-DC Converters",
            Self::DcAc => "DC-AC Inverters",
            Self::Custom => "Custom Topologies",
        }
    }
}

/// Galvanic isolation class of a topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum Isolation {
    #[strum(serialize = "Isolated")]
    Isolated,
    #[strum(serialize = "Non-isolated")]
    NonIsolated,
    #[strum(serialize = "Optional")]
    Optional,
    #[strum(serialize = "User defined")]
    UserDefined,
}

/// Qualitative design complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
    Variable,
}
