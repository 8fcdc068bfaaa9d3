//! Application state definitions
//!
//! The wizard's selections live in [`Session`]; this module holds only the
//! view state around it: list cursors, the focused parameter, an active
//! number input, help visibility and the status line.

use crate::catalog;
use crate::input::NumberInput;
use crate::parameters::{ParameterField, ParameterSection};
use crate::session::Session;
use crate::types::{DesignMode, WizardStep};

/// Screen currently shown, derived from the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Overview,
    Component,
    Topology,
    Parameters,
    Results,
}

impl Screen {
    pub fn of(session: &Session) -> Self {
        if session.is_overview() {
            return Self::Overview;
        }
        match session.step() {
            WizardStep::Component => Self::Component,
            WizardStep::Topology => Self::Topology,
            WizardStep::Parameters => Self::Parameters,
            WizardStep::Results => Self::Results,
        }
    }

    /// Name shown in the help overlay
    pub fn name(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Component => "Component Selection",
            Self::Topology => "Topology Selection",
            Self::Parameters => "Design Parameters",
            Self::Results => "Design Results",
        }
    }
}

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

/// View state of the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Highlighted entry of [`DesignMode::SELECTABLE`]
    pub mode_cursor: usize,
    /// Highlighted component card
    pub component_cursor: usize,
    /// Highlighted topology within the active category
    pub topology_cursor: usize,
    /// Parameter section tab
    pub section: ParameterSection,
    /// Focused field within the section
    pub field_cursor: usize,
    /// Number entry in progress
    pub input: Option<NumberInput>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    pub status: Option<StatusMessage>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode_cursor: 0,
            component_cursor: 0,
            topology_cursor: 0,
            section: ParameterSection::Electrical,
            field_cursor: 0,
            input: None,
            help_visible: false,
            status: None,
        }
    }
}

impl AppState {
    /// Field with keyboard focus on the parameters step
    pub fn focused_field(&self) -> ParameterField {
        self.section
            .fields()
            .nth(self.field_cursor)
            .or_else(|| self.section.fields().next())
            .unwrap_or(ParameterField::PowerLevel)
    }

    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            level,
            text: text.into(),
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Point the cursors at the session's current selections
    pub fn sync_with(&mut self, session: &Session) {
        if let Some(index) = DesignMode::SELECTABLE
            .iter()
            .position(|m| *m == session.mode())
        {
            self.mode_cursor = index;
        }

        if let Some(component) = session.component() {
            if let Some(index) = catalog::components().iter().position(|c| c.kind == component) {
                self.component_cursor = index;
            }
        }

        let topologies = catalog::topologies_in(session.active_category());
        match session
            .topology()
            .and_then(|id| topologies.iter().position(|t| t.id == id))
        {
            Some(index) => self.topology_cursor = index,
            None => {
                self.topology_cursor = self.topology_cursor.min(topologies.len().saturating_sub(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComponentKind, TopologyCategory};

    #[test]
    fn test_screen_follows_session() {
        let mut session = Session::new();
        assert_eq!(Screen::of(&session), Screen::Overview);
        session.select_mode(DesignMode::Ai).unwrap();
        assert_eq!(Screen::of(&session), Screen::Component);
        session.select_component(ComponentKind::Inductor).unwrap();
        assert_eq!(Screen::of(&session), Screen::Topology);
        session.return_to_overview().unwrap();
        assert_eq!(Screen::of(&session), Screen::Overview);
    }

    #[test]
    fn test_focused_field_per_section() {
        let mut state = AppState::default();
        assert_eq!(state.focused_field(), ParameterField::PowerLevel);
        state.section = ParameterSection::Material;
        state.field_cursor = 2;
        assert_eq!(state.focused_field(), ParameterField::CoreMaterial);
        state.field_cursor = 99;
        assert_eq!(state.focused_field(), ParameterField::CoreType);
    }

    #[test]
    fn test_sync_points_at_selection() {
        let mut session = Session::new();
        session.select_mode(DesignMode::Compare).unwrap();
        session.select_component(ComponentKind::CoupledInductor).unwrap();
        session.select_topology("three-phase").unwrap();

        let mut state = AppState::default();
        state.sync_with(&session);
        assert_eq!(state.mode_cursor, 2);
        assert_eq!(state.component_cursor, 2);
        assert_eq!(session.active_category(), TopologyCategory::DcAc);
        assert_eq!(state.topology_cursor, 1);
    }
}
