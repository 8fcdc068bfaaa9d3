//! Property-Based Tests for MagForge
//!
//! Uses proptest to check invariants over arbitrary inputs:
//! - Lenient and strict suitability lookups agree
//! - Random intent sequences never break session consistency
//! - Rejected intents leave the session unchanged
//! - Parameter writes are last-write-wins
//! - Slider stepping stays inside the documented range

use magforge::catalog;
use magforge::parameters::{ParameterField, ParameterSet, ParameterValue};
use magforge::session::Session;
use magforge::suitability::{resolve_suitability, resolve_suitability_strict, SuitabilityRating};
use magforge::types::{ComponentKind, DesignMode, TopologyCategory};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn component_strategy() -> impl Strategy<Value = ComponentKind> {
    prop_oneof![
        Just(ComponentKind::Inductor),
        Just(ComponentKind::Transformer),
        Just(ComponentKind::CoupledInductor),
    ]
}

/// Catalog ids mixed with ids the catalog does not know
fn topology_id_strategy() -> impl Strategy<Value = String> {
    let known: Vec<String> = catalog::all_topologies().map(|t| t.id.to_string()).collect();
    prop_oneof![
        3 => proptest::sample::select(known),
        1 => "[a-z-]{0,12}",
    ]
}

fn mode_strategy() -> impl Strategy<Value = DesignMode> {
    prop_oneof![
        Just(DesignMode::Overview),
        Just(DesignMode::Ai),
        Just(DesignMode::Conventional),
        Just(DesignMode::Compare),
    ]
}

fn category_strategy() -> impl Strategy<Value = TopologyCategory> {
    proptest::sample::select(TopologyCategory::iter().collect::<Vec<_>>())
}

// =============================================================================
// Suitability
// =============================================================================

proptest! {
    /// Strict lookup fails exactly where the lenient one says Unknown
    #[test]
    fn strict_agrees_with_lenient(component in component_strategy(), topology in topology_id_strategy()) {
        let lenient = resolve_suitability(component, &topology);
        match resolve_suitability_strict(component, &topology) {
            Ok(rating) => prop_assert_eq!(rating, lenient),
            Err(_) => prop_assert_eq!(lenient, SuitabilityRating::Unknown),
        }
    }

    /// Every catalog topology has a recorded rating for every component
    #[test]
    fn catalog_pairs_are_recorded(component in component_strategy(), index in 0usize..9) {
        let topology = catalog::all_topologies().nth(index).unwrap();
        prop_assert!(resolve_suitability_strict(component, topology.id).is_ok());
    }
}

// =============================================================================
// Session state machine
// =============================================================================

#[derive(Debug, Clone)]
enum Intent {
    SelectMode(DesignMode),
    SelectComponent(ComponentKind),
    SelectTopology(String),
    SelectCategory(TopologyCategory),
    GoBack,
    Submit,
    ReturnToOverview,
}

fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![
        mode_strategy().prop_map(Intent::SelectMode),
        component_strategy().prop_map(Intent::SelectComponent),
        topology_id_strategy().prop_map(Intent::SelectTopology),
        category_strategy().prop_map(Intent::SelectCategory),
        Just(Intent::GoBack),
        Just(Intent::Submit),
        Just(Intent::ReturnToOverview),
    ]
}

/// Apply an intent; returns whether it was accepted
fn apply(session: &mut Session, intent: &Intent) -> bool {
    match intent {
        Intent::SelectMode(mode) => session.select_mode(*mode).is_ok(),
        Intent::SelectComponent(component) => session.select_component(*component).is_ok(),
        Intent::SelectTopology(id) => session.select_topology(id).is_ok(),
        Intent::SelectCategory(category) => {
            session.select_category(*category);
            true
        }
        Intent::GoBack => session.go_back().is_ok(),
        Intent::Submit => session.submit().is_ok(),
        Intent::ReturnToOverview => session.return_to_overview().is_ok(),
    }
}

proptest! {
    /// The step never runs ahead of the selections, and rejected intents are no-ops
    #[test]
    fn random_intents_keep_session_consistent(intents in prop::collection::vec(intent_strategy(), 0..40)) {
        let mut session = Session::new();
        for intent in &intents {
            let before = session.clone();
            if !apply(&mut session, intent) {
                prop_assert_eq!(&session, &before);
            }
            prop_assert!(session.is_consistent(), "inconsistent after {:?}", intent);
            if session.topology().is_some() {
                prop_assert!(session.component().is_some());
            }
        }
    }

    /// Going back never clears a selection
    #[test]
    fn go_back_preserves_selections(intents in prop::collection::vec(intent_strategy(), 0..30)) {
        let mut session = Session::new();
        for intent in &intents {
            apply(&mut session, intent);
        }
        let component = session.component();
        let topology = session.topology();
        while session.go_back().is_ok() {
            prop_assert_eq!(session.component(), component);
            prop_assert_eq!(session.topology(), topology);
        }
        prop_assert!(session.is_overview());
    }
}

// =============================================================================
// Parameters
// =============================================================================

fn numeric_field_strategy() -> impl Strategy<Value = ParameterField> {
    let fields: Vec<ParameterField> = ParameterField::iter()
        .filter(|f| ParameterSet::default().number(*f).is_some())
        .collect();
    proptest::sample::select(fields)
}

proptest! {
    /// The last value written to each field is the one that sticks
    #[test]
    fn last_write_wins(writes in prop::collection::vec((numeric_field_strategy(), -1.0e6f64..1.0e6), 1..30)) {
        let mut params = ParameterSet::default();
        for (field, value) in &writes {
            params.set(*field, ParameterValue::Number(*value)).unwrap();
        }
        for field in ParameterField::iter() {
            if let Some(last) = writes.iter().rev().find(|(f, _)| *f == field) {
                prop_assert_eq!(params.number(field), Some(last.1));
            }
        }
    }

    /// Slider steps never leave the documented range
    #[test]
    fn stepping_stays_in_range(field in numeric_field_strategy(), start in -1.0e4f64..1.0e4, up in any::<bool>()) {
        if let Some(range) = field.range() {
            let next = if up { range.step_up(start) } else { range.step_down(start) };
            prop_assert!(range.contains(next), "{} -> {} outside {:?}", start, next, range);
        }
    }
}
