//! Component/topology suitability table
//!
//! `resolve_suitability` is the lenient lookup used by the wizard: pairs
//! missing from the table map to [`SuitabilityRating::Unknown`]. The strict
//! variant reports them as [`SuitabilityError::UnknownPairing`] instead.

use crate::types::ComponentKind;
use serde::Serialize;
use strum::{Display, EnumIter};
use thiserror::Error;

/// Qualitative fitness of a component type for a topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum SuitabilityRating {
    #[strum(serialize = "Excellent")]
    Excellent,
    #[strum(serialize = "Good")]
    Good,
    #[strum(serialize = "Limited")]
    Limited,
    /// Depends on the user-defined topology
    #[strum(serialize = "Variable")]
    Variable,
    #[strum(serialize = "Not applicable")]
    NotApplicable,
    /// No entry for the pair
    #[strum(serialize = "Unknown")]
    Unknown,
}

impl SuitabilityRating {
    /// Whether a topology with this rating may be selected
    #[inline]
    pub fn is_applicable(self) -> bool {
        self != Self::NotApplicable
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuitabilityError {
    #[error("No suitability recorded for {component} with topology '{topology}'")]
    UnknownPairing {
        component: ComponentKind,
        topology: String,
    },
}

/// Table lookup; `None` when the pair has no entry.
fn lookup(component: ComponentKind, topology_id: &str) -> Option<SuitabilityRating> {
    use SuitabilityRating::*;

    let rating = match component {
        ComponentKind::Inductor => match topology_id {
            "buck" | "boost" | "pfc-boost" => Excellent,
            "forward" | "single-phase" | "three-phase" => Good,
            "flyback" | "pfc-flyback" => NotApplicable,
            "custom" => Variable,
            _ => return None,
        },
        ComponentKind::Transformer => match topology_id {
            "flyback" | "forward" | "pfc-flyback" => Excellent,
            "single-phase" | "three-phase" => Good,
            "buck" | "boost" | "pfc-boost" => NotApplicable,
            "custom" => Variable,
            _ => return None,
        },
        ComponentKind::CoupledInductor => match topology_id {
            "single-phase" | "three-phase" => Excellent,
            "buck" | "boost" | "forward" | "pfc-boost" => Good,
            "flyback" | "pfc-flyback" => Limited,
            "custom" => Variable,
            _ => return None,
        },
    };
    Some(rating)
}

/// Resolve the suitability of a component for a topology id.
///
/// Never fails: unrecorded pairs are `Unknown`.
pub fn resolve_suitability(component: ComponentKind, topology_id: &str) -> SuitabilityRating {
    lookup(component, topology_id).unwrap_or(SuitabilityRating::Unknown)
}

/// Like [`resolve_suitability`] but unrecorded pairs are an error.
pub fn resolve_suitability_strict(
    component: ComponentKind,
    topology_id: &str,
) -> Result<SuitabilityRating, SuitabilityError> {
    lookup(component, topology_id).ok_or_else(|| SuitabilityError::UnknownPairing {
        component,
        topology: topology_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use strum::IntoEnumIterator;

    #[test]
    fn test_recorded_literals() {
        use ComponentKind::*;
        use SuitabilityRating::*;

        let table = [
            (Inductor, "buck", Excellent),
            (Inductor, "boost", Excellent),
            (Inductor, "flyback", NotApplicable),
            (Inductor, "forward", Good),
            (Inductor, "pfc-boost", Excellent),
            (Inductor, "pfc-flyback", NotApplicable),
            (Inductor, "single-phase", Good),
            (Inductor, "three-phase", Good),
            (Inductor, "custom", Variable),
            (Transformer, "buck", NotApplicable),
            (Transformer, "boost", NotApplicable),
            (Transformer, "flyback", Excellent),
            (Transformer, "forward", Excellent),
            (Transformer, "pfc-boost", NotApplicable),
            (Transformer, "pfc-flyback", Excellent),
            (Transformer, "single-phase", Good),
            (Transformer, "three-phase", Good),
            (Transformer, "custom", Variable),
            (CoupledInductor, "buck", Good),
            (CoupledInductor, "boost", Good),
            (CoupledInductor, "flyback", Limited),
            (CoupledInductor, "forward", Good),
            (CoupledInductor, "pfc-boost", Good),
            (CoupledInductor, "pfc-flyback", Limited),
            (CoupledInductor, "single-phase", Excellent),
            (CoupledInductor, "three-phase", Excellent),
            (CoupledInductor, "custom", Variable),
        ];

        for (component, topology, expected) in table {
            assert_eq!(
                resolve_suitability(component, topology),
                expected,
                "{} / {}",
                component,
                topology
            );
        }
        // every catalog pair is covered by the table above
        assert_eq!(table.len(), ComponentKind::iter().count() * catalog::all_topologies().count());
    }

    #[test]
    fn test_custom_is_variable_for_every_component() {
        for component in ComponentKind::iter() {
            assert_eq!(
                resolve_suitability(component, "custom"),
                SuitabilityRating::Variable
            );
        }
    }

    #[test]
    fn test_absent_pair_is_unknown() {
        assert_eq!(
            resolve_suitability(ComponentKind::Inductor, "sepic"),
            SuitabilityRating::Unknown
        );
        assert_eq!(
            resolve_suitability(ComponentKind::Transformer, ""),
            SuitabilityRating::Unknown
        );
        // ids are case-sensitive
        assert_eq!(
            resolve_suitability(ComponentKind::Inductor, "Buck"),
            SuitabilityRating::Unknown
        );
    }

    #[test]
    fn test_every_catalog_pair_is_recorded() {
        for component in ComponentKind::iter() {
            for topology in catalog::all_topologies() {
                assert!(
                    resolve_suitability_strict(component, topology.id).is_ok(),
                    "{} x {} missing",
                    component,
                    topology.id
                );
            }
        }
    }

    #[test]
    fn test_strict_reports_unknown_pairing() {
        let err = resolve_suitability_strict(ComponentKind::CoupledInductor, "cuk").unwrap_err();
        assert_eq!(
            err,
            SuitabilityError::UnknownPairing {
                component: ComponentKind::CoupledInductor,
                topology: "cuk".to_string(),
            }
        );
        assert!(err.to_string().contains("coupled-inductor"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(SuitabilityRating::NotApplicable.to_string(), "Not applicable");
        assert_eq!(SuitabilityRating::Unknown.to_string(), "Unknown");
        assert!(!SuitabilityRating::NotApplicable.is_applicable());
        assert!(SuitabilityRating::Unknown.is_applicable());
        assert!(SuitabilityRating::Limited.is_applicable());
    }
}
