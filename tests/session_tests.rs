//! Tests for the wizard session
//!
//! These tests verify, through the public API only:
//! - The documented end-to-end walkthroughs
//! - Rejected transitions leave the session untouched
//! - Back navigation keeps selections
//! - Presets drive the same state machine

use magforge::catalog;
use magforge::parameters::{CoreType, ParameterField, ParameterValue};
use magforge::preset::DesignPreset;
use magforge::session::{Session, TransitionError};
use magforge::suitability::SuitabilityRating;
use magforge::types::{ComponentKind, DesignMode, TopologyCategory, WizardStep};
use std::io::Write;
use tempfile::NamedTempFile;

// =============================================================================
// Walkthroughs
// =============================================================================

#[test]
fn test_ai_transformer_flyback_walkthrough() {
    let mut session = Session::new();
    assert!(session.is_overview());

    assert_eq!(session.select_mode(DesignMode::Ai).unwrap(), WizardStep::Component);
    assert_eq!(
        session.select_component(ComponentKind::Transformer).unwrap(),
        WizardStep::Topology
    );
    assert_eq!(session.suitability_of("flyback"), SuitabilityRating::Excellent);
    assert_eq!(session.select_topology("flyback").unwrap(), WizardStep::Parameters);
    assert_eq!(session.submit().unwrap(), WizardStep::Results);

    let summary = session.summary();
    assert_eq!(summary.mode, DesignMode::Ai);
    assert_eq!(summary.component, Some(ComponentKind::Transformer));
    assert_eq!(summary.topology.map(|t| t.name), Some("Flyback Converter"));
    assert_eq!(summary.power_level, 100.0);
}

#[test]
fn test_inductor_flyback_is_rejected() {
    let mut session = Session::new();
    session.select_mode(DesignMode::Conventional).unwrap();
    session.select_component(ComponentKind::Inductor).unwrap();
    let before = session.clone();

    let err = session.select_topology("flyback").unwrap_err();
    assert!(matches!(err, TransitionError::NotApplicable { .. }));
    assert_eq!(session, before);
    assert_eq!(session.step(), WizardStep::Topology);
}

#[test]
fn test_coupled_inductor_accepts_limited_topology() {
    let mut session = Session::new();
    session.select_mode(DesignMode::Compare).unwrap();
    session.select_component(ComponentKind::CoupledInductor).unwrap();
    assert_eq!(session.suitability_of("pfc-flyback"), SuitabilityRating::Limited);
    session.select_topology("pfc-flyback").unwrap();
    assert_eq!(session.active_category(), TopologyCategory::AcDc);
}

#[test]
fn test_every_applicable_pair_can_be_selected() {
    for component in [
        ComponentKind::Inductor,
        ComponentKind::Transformer,
        ComponentKind::CoupledInductor,
    ] {
        for topology in catalog::all_topologies() {
            let mut session = Session::new();
            session.select_mode(DesignMode::Ai).unwrap();
            session.select_component(component).unwrap();
            let applicable = session.suitability_of(topology.id).is_applicable();
            assert_eq!(
                session.select_topology(topology.id).is_ok(),
                applicable,
                "{} / {}",
                component,
                topology.id
            );
        }
    }
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_back_from_every_step() {
    let mut session = Session::new();
    session.select_mode(DesignMode::Ai).unwrap();
    session.select_component(ComponentKind::Inductor).unwrap();
    session.select_topology("boost").unwrap();
    session.submit().unwrap();

    assert_eq!(session.go_back().unwrap(), WizardStep::Parameters);
    assert_eq!(session.go_back().unwrap(), WizardStep::Topology);
    assert_eq!(session.topology(), Some("boost"));
    assert_eq!(session.go_back().unwrap(), WizardStep::Component);
    assert_eq!(session.component(), Some(ComponentKind::Inductor));

    session.go_back().unwrap();
    assert!(session.is_overview());
    assert!(matches!(session.go_back(), Err(TransitionError::AlreadyAtOverview)));
}

#[test]
fn test_return_to_overview_then_resume() {
    let mut session = Session::new();
    session.select_mode(DesignMode::Conventional).unwrap();
    session.select_component(ComponentKind::Transformer).unwrap();
    session.select_topology("forward").unwrap();

    session.return_to_overview().unwrap();
    assert!(session.is_overview());
    assert_eq!(session.step(), WizardStep::Parameters);

    session.select_mode(DesignMode::Compare).unwrap();
    assert_eq!(session.step(), WizardStep::Component);
    assert_eq!(session.topology(), Some("forward"));
}

#[test]
fn test_category_tab_never_touches_selection() {
    let mut session = Session::new();
    session.select_mode(DesignMode::Ai).unwrap();
    session.select_component(ComponentKind::Inductor).unwrap();
    session.select_topology("buck").unwrap();

    session.select_category(TopologyCategory::Custom);
    assert_eq!(session.topology(), Some("buck"));
    assert_eq!(session.step(), WizardStep::Parameters);
}

// =============================================================================
// Parameters
// =============================================================================

#[test]
fn test_parameters_survive_navigation() {
    let mut session = Session::new();
    session.select_mode(DesignMode::Ai).unwrap();
    session.select_component(ComponentKind::Inductor).unwrap();
    session.select_topology("buck").unwrap();
    session
        .set_parameter(ParameterField::PowerLevel, ParameterValue::Number(480.0))
        .unwrap();

    session.go_back().unwrap();
    session.select_topology("boost").unwrap();
    assert_eq!(session.parameters().power_level, 480.0);
}

#[test]
fn test_rejected_parameter_leaves_set_untouched() {
    let mut session = Session::new();
    let before = session.parameters().clone();
    assert!(session
        .set_parameter(ParameterField::CoreMaterial, ParameterValue::CoreMaterial(Some("N87".into())))
        .is_err());
    assert!(session
        .set_parameter(ParameterField::CoreType, ParameterValue::Number(1.0))
        .is_err());
    assert_eq!(session.parameters(), &before);

    session
        .set_parameter(ParameterField::CoreType, ParameterValue::CoreType(Some(CoreType::HighFlux)))
        .unwrap();
    session
        .set_parameter(ParameterField::CoreMaterial, ParameterValue::CoreMaterial(Some("HF-147".into())))
        .unwrap();
    assert!(!session.summary().stale_core_material);
}

// =============================================================================
// Presets
// =============================================================================

fn preset_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_preset_seeds_session() {
    let file = preset_file(
        r#"{
            "mode": "conventional",
            "component": "inductor",
            "topology": "buck",
            "parameters": { "powerLevel": 250, "coreType": "ferrite", "coreMaterial": "N87" }
        }"#,
    );
    let preset = DesignPreset::load_from_file(file.path()).unwrap();
    preset.validate().unwrap();

    let mut session = Session::new();
    assert_eq!(preset.apply_to(&mut session).unwrap(), WizardStep::Parameters);
    assert_eq!(session.mode(), DesignMode::Conventional);
    assert_eq!(session.parameters().power_level, 250.0);
    assert_eq!(session.parameters().core_material.as_deref(), Some("N87"));
}

#[test]
fn test_preset_with_inapplicable_topology_fails_validation() {
    let file = preset_file(r#"{ "mode": "ai", "component": "transformer", "topology": "boost" }"#);
    let preset = DesignPreset::load_from_file(file.path()).unwrap();
    let err = preset.validate().unwrap_err();
    assert!(err.to_string().contains("Boost Converter"));
    assert!(preset.apply_to(&mut Session::new()).is_err());
}
