//! Static topology and component catalogs
//!
//! Read-only data backing the component and topology steps. Lookups are
//! linear scans; the catalog is small and never mutated.

use crate::types::{Complexity, ComponentKind, Isolation, TopologyCategory};
use serde::Serialize;
use strum::IntoEnumIterator;

/// A converter topology definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopologyEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub voltage: &'static str,
    pub isolation: Isolation,
    pub complexity: Complexity,
    pub applications: &'static [&'static str],
}

/// A category of topologies (one tab of the topology step)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub category: TopologyCategory,
    pub name: &'static str,
    pub topologies: &'static [TopologyEntry],
}

/// Display metadata for a component type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentInfo {
    pub kind: ComponentKind,
    pub name: &'static str,
    pub description: &'static str,
    pub applications: &'static [&'static str],
    pub complexity: Complexity,
    pub ai_advantage: &'static str,
}

const DC_DC: &[TopologyEntry] = &[
    TopologyEntry {
        id: "buck",
        name: "Buck Converter",
        description: "Step-down converter for voltage reduction",
        voltage: "Vin > Vout",
        isolation: Isolation::NonIsolated,
        complexity: Complexity::Simple,
        applications: &["Point-of-load regulation", "Battery chargers", "LED drivers"],
    },
    TopologyEntry {
        id: "boost",
        name: "Boost Converter",
        description: "Step-up converter for voltage elevation",
        voltage: "Vout > Vin",
        isolation: Isolation::NonIsolated,
        complexity: Complexity::Simple,
        applications: &["Battery backup", "LED backlighting", "Solar MPPT"],
    },
    TopologyEntry {
        id: "flyback",
        name: "Flyback Converter",
        description: "Isolated converter with energy storage in transformer",
        voltage: "Variable",
        isolation: Isolation::Isolated,
        complexity: Complexity::Moderate,
        applications: &["Adapter supplies", "Auxiliary supplies", "Low power isolated"],
    },
    TopologyEntry {
        id: "forward",
        name: "Forward Converter",
        description: "Isolated converter with continuous energy transfer",
        voltage: "Variable",
        isolation: Isolation::Isolated,
        complexity: Complexity::Moderate,
        applications: &["Medium power supplies", "Telecom equipment", "Industrial supplies"],
    },
];

const AC_DC: &[TopologyEntry] = &[
    TopologyEntry {
        id: "pfc-boost",
        name: "PFC Boost",
        description: "Power factor correction using boost topology",
        voltage: "AC to High DC",
        isolation: Isolation::NonIsolated,
        complexity: Complexity::Moderate,
        applications: &["Switch-mode supplies", "Motor drives", "LED lighting"],
    },
    TopologyEntry {
        id: "pfc-flyback",
        name: "PFC Flyback",
        description: "Combined PFC and isolation in single stage",
        voltage: "AC to DC",
        isolation: Isolation::Isolated,
        complexity: Complexity::Complex,
        applications: &["Compact supplies", "Appliance power", "Low-medium power"],
    },
];

const DC_AC: &[TopologyEntry] = &[
    TopologyEntry {
        id: "single-phase",
        name: "Single-Phase Inverter",
        description: "DC to single-phase AC conversion",
        voltage: "DC to AC",
        isolation: Isolation::Optional,
        complexity: Complexity::Moderate,
        applications: &["Solar inverters", "UPS systems", "Motor drives"],
    },
    TopologyEntry {
        id: "three-phase",
        name: "Three-Phase Inverter",
        description: "DC to three-phase AC conversion",
        voltage: "DC to 3-phase AC",
        isolation: Isolation::Optional,
        complexity: Complexity::Complex,
        applications: &["Industrial drives", "Grid-tie inverters", "Motor control"],
    },
];

const CUSTOM: &[TopologyEntry] = &[TopologyEntry {
    id: "custom",
    name: "Custom Topology",
    description: "User-defined converter topology",
    voltage: "User defined",
    isolation: Isolation::UserDefined,
    complexity: Complexity::Variable,
    applications: &["Research projects", "Specialized applications", "Novel topologies"],
}];

const CATEGORIES: &[CategoryEntry] = &[
    CategoryEntry {
        category: TopologyCategory::DcDc,
        name: "DC-DC Converters",
        topologies: DC_DC,
    },
    CategoryEntry {
        category: TopologyCategory::AcDc,
        name: "AC-DC Converters",
        topologies: AC_DC,
    },
    CategoryEntry {
        category: TopologyCategory::DcAc,
        name: "DC-AC Inverters",
        topologies: DC_AC,
    },
    CategoryEntry {
        category: TopologyCategory::Custom,
        name: "Custom Topologies",
        topologies: CUSTOM,
    },
];

const COMPONENTS: &[ComponentInfo] = &[
    ComponentInfo {
        kind: ComponentKind::Inductor,
        name: "Inductor",
        description: "Single winding magnetic component for energy storage and filtering",
        applications: &["Buck/Boost Converters", "PFC Circuits", "Output Filters"],
        complexity: Complexity::Simple,
        ai_advantage: "Core material optimization, thermal modeling",
    },
    ComponentInfo {
        kind: ComponentKind::Transformer,
        name: "Transformer",
        description: "Multi-winding component for galvanic isolation and voltage conversion",
        applications: &["Flyback/Forward Converters", "Isolated Supplies", "Gate Drivers"],
        complexity: Complexity::Moderate,
        ai_advantage: "Inter-winding coupling optimization, leakage minimization",
    },
    ComponentInfo {
        kind: ComponentKind::CoupledInductor,
        name: "Coupled Inductor",
        description: "Multi-phase coupled magnetic component for current ripple reduction",
        applications: &["Multi-phase Converters", "Interleaved Topologies", "Current Balancing"],
        complexity: Complexity::Complex,
        ai_advantage: "Coupling coefficient optimization, flux balancing",
    },
];

/// All topology categories in display order
pub fn categories() -> &'static [CategoryEntry] {
    CATEGORIES
}

/// Look up a category entry
pub fn category(category: TopologyCategory) -> &'static CategoryEntry {
    // CATEGORIES has one entry per variant in declaration order
    &CATEGORIES[category as usize]
}

/// Topologies within a category
pub fn topologies_in(category: TopologyCategory) -> &'static [TopologyEntry] {
    self::category(category).topologies
}

/// Every topology across all categories
pub fn all_topologies() -> impl Iterator<Item = &'static TopologyEntry> {
    CATEGORIES.iter().flat_map(|c| c.topologies.iter())
}

/// Find a topology by id across all categories
pub fn find_topology(id: &str) -> Option<&'static TopologyEntry> {
    all_topologies().find(|t| t.id == id)
}

/// Category containing the given topology id
pub fn category_of(id: &str) -> Option<TopologyCategory> {
    CATEGORIES
        .iter()
        .find(|c| c.topologies.iter().any(|t| t.id == id))
        .map(|c| c.category)
}

/// All component types in display order
pub fn components() -> &'static [ComponentInfo] {
    COMPONENTS
}

/// Display metadata for a component type
pub fn component_info(kind: ComponentKind) -> &'static ComponentInfo {
    &COMPONENTS[kind as usize]
}

/// Category ids in tab order
pub fn category_ids() -> impl Iterator<Item = TopologyCategory> {
    TopologyCategory::iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_matches_enum_order() {
        for (index, category) in TopologyCategory::iter().enumerate() {
            assert_eq!(CATEGORIES[index].category, category);
            assert_eq!(CATEGORIES[index].name, category.name());
        }
    }

    #[test]
    fn test_component_table_matches_enum_order() {
        for kind in ComponentKind::iter() {
            assert_eq!(component_info(kind).kind, kind);
            assert_eq!(component_info(kind).name, kind.display_name());
        }
    }

    #[test]
    fn test_topology_ids_are_unique() {
        let ids: Vec<_> = all_topologies().map(|t| t.id).collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn test_find_topology() {
        let flyback = find_topology("flyback").expect("flyback is in the catalog");
        assert_eq!(flyback.name, "Flyback Converter");
        assert_eq!(flyback.isolation, Isolation::Isolated);
        assert!(find_topology("sepic").is_none());
        assert!(find_topology("").is_none());
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("pfc-flyback"), Some(TopologyCategory::AcDc));
        assert_eq!(category_of("three-phase"), Some(TopologyCategory::DcAc));
        assert_eq!(category_of("custom"), Some(TopologyCategory::Custom));
        assert_eq!(category_of("cuk"), None);
    }

    #[test]
    fn test_topologies_in_preserves_order() {
        let ids: Vec<_> = topologies_in(TopologyCategory::DcDc).iter().map(|t| t.id).collect();
        assert_eq!(ids, ["buck", "boost", "flyback", "forward"]);
    }

    #[test]
    fn test_applications_are_ordered_triples() {
        for topology in all_topologies() {
            assert_eq!(topology.applications.len(), 3, "{}", topology.id);
        }
        assert_eq!(
            find_topology("custom").unwrap().applications[0],
            "Research projects"
        );
    }
}
