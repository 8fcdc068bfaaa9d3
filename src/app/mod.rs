//! Application module
//!
//! Owns the wizard [`Session`] and the view state, translates key events
//! into session intents and drives the render loop.
//!
//! # Module Structure
//! - `state` - View state types (AppState, Screen, StatusMessage)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppState, Screen, StatusLevel, StatusMessage};

use crate::catalog;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::Result;
use crate::input::{InputResult, NumberInput};
use crate::parameters::{
    CoreShape, CoreType, FieldKind, ParameterField, ParameterSection, ParameterValue,
    WindingMaterial,
};
use crate::session::{Session, TransitionError};
use crate::types::{DesignMode, TopologyCategory, WizardStep};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    session: Session,
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for dispatch and navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application around an existing session
    pub fn new(session: Session) -> Self {
        info!("Creating new App instance");
        let mut state = AppState::default();
        state.sync_with(&session);

        Self {
            session,
            state,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        Screen::of(&self.session)
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| self.ui_renderer.render(f, &self.session, &self.state, &self.keybinding_context))?;

            if crossterm::event::poll(Duration::from_millis(250))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    // Windows reports both press and release
                    if key_event.kind == KeyEventKind::Press && self.handle_key_event(key_event) {
                        break;
                    }
                }
            }
        }

        info!("Main loop finished");
        Ok(())
    }

    /// Handle one key event. Returns true when the user asked to quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if let Some(ref mut input) = self.state.input {
            match input.handle_input(key_event) {
                InputResult::Confirm(value) => {
                    let field = input.field;
                    self.state.input = None;
                    self.apply_parameter(field, ParameterValue::Number(value));
                }
                InputResult::Cancel => {
                    self.state.input = None;
                    self.state.clear_status();
                }
                InputResult::Continue(Some(message)) => {
                    self.state.set_status(StatusLevel::Error, message);
                }
                InputResult::Continue(None) => {}
            }
            return false;
        }

        let screen = self.screen();
        let action = self.keybinding_context.action_for(screen, &key_event);

        // Help overlay swallows everything except its own toggles
        if self.state.help_visible {
            if action == Some(KeyAction::Help) || key_event.code == crossterm::event::KeyCode::Esc {
                self.toggle_help();
            }
            return false;
        }

        let Some(action) = action else {
            return false;
        };
        debug!("{:?} on {:?}", action, screen);

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.toggle_help(),
            KeyAction::Back => {
                let result = self.session.go_back().map(|_| ());
                self.after_transition(result);
            }
            KeyAction::Overview => {
                let result = self.session.return_to_overview();
                self.after_transition(result);
            }
            _ => match screen {
                Screen::Overview => self.handle_overview(action),
                Screen::Component => self.handle_component(action),
                Screen::Topology => self.handle_topology(action),
                Screen::Parameters => self.handle_parameters(action),
                Screen::Results => {}
            },
        }
        false
    }

    fn after_transition(&mut self, result: std::result::Result<(), TransitionError>) {
        match result {
            Ok(()) => {
                self.state.clear_status();
                self.state.sync_with(&self.session);
            }
            Err(e) => self.state.set_status(StatusLevel::Error, e.to_string()),
        }
    }

    fn handle_overview(&mut self, action: KeyAction) {
        let count = DesignMode::SELECTABLE.len();
        match action {
            KeyAction::NavigateUp => self.state.mode_cursor = step_index(self.state.mode_cursor, count, false),
            KeyAction::NavigateDown => self.state.mode_cursor = step_index(self.state.mode_cursor, count, true),
            KeyAction::Select => {
                let mode = DesignMode::SELECTABLE[self.state.mode_cursor.min(count - 1)];
                let result = self.session.select_mode(mode).map(|_| ());
                self.after_transition(result);
            }
            _ => {}
        }
    }

    fn handle_component(&mut self, action: KeyAction) {
        let components = catalog::components();
        match action {
            KeyAction::NavigateUp => {
                self.state.component_cursor = step_index(self.state.component_cursor, components.len(), false)
            }
            KeyAction::NavigateDown => {
                self.state.component_cursor = step_index(self.state.component_cursor, components.len(), true)
            }
            KeyAction::Select => {
                if let Some(info) = components.get(self.state.component_cursor) {
                    let result = self.session.select_component(info.kind).map(|_| ());
                    self.after_transition(result);
                }
            }
            _ => {}
        }
    }

    fn handle_topology(&mut self, action: KeyAction) {
        let topologies = catalog::topologies_in(self.session.active_category());
        match action {
            KeyAction::NavigateUp => {
                self.state.topology_cursor = step_index(self.state.topology_cursor, topologies.len(), false)
            }
            KeyAction::NavigateDown => {
                self.state.topology_cursor = step_index(self.state.topology_cursor, topologies.len(), true)
            }
            KeyAction::NextTab | KeyAction::PreviousTab => {
                let categories: Vec<TopologyCategory> = catalog::category_ids().collect();
                let current = categories
                    .iter()
                    .position(|c| *c == self.session.active_category())
                    .unwrap_or(0);
                let next = step_index(current, categories.len(), action == KeyAction::NextTab);
                self.session.select_category(categories[next]);
                self.state.topology_cursor = 0;
            }
            KeyAction::Select => {
                if let Some(entry) = topologies.get(self.state.topology_cursor) {
                    let result = self.session.select_topology(entry.id).map(|_| ());
                    self.after_transition(result);
                }
            }
            _ => {}
        }
    }

    fn handle_parameters(&mut self, action: KeyAction) {
        let field_count = self.state.section.fields().count();
        match action {
            KeyAction::NavigateUp => {
                self.state.field_cursor = self.state.field_cursor.saturating_sub(1);
            }
            KeyAction::NavigateDown => {
                self.state.field_cursor = (self.state.field_cursor + 1).min(field_count.saturating_sub(1));
            }
            KeyAction::NextTab | KeyAction::PreviousTab => {
                let sections: Vec<ParameterSection> = ParameterSection::iter().collect();
                let current = sections
                    .iter()
                    .position(|s| *s == self.state.section)
                    .unwrap_or(0);
                let next = step_index(current, sections.len(), action == KeyAction::NextTab);
                self.state.section = sections[next];
                self.state.field_cursor = 0;
            }
            KeyAction::Increase => self.adjust_focused(true),
            KeyAction::Decrease => self.adjust_focused(false),
            KeyAction::Edit => {
                let field = self.state.focused_field();
                match self.session.parameters().number(field) {
                    Some(current) => {
                        self.state.input = Some(NumberInput::new(field, current));
                        self.state.set_status(
                            StatusLevel::Info,
                            format!("Editing {} (Enter to confirm, Esc to cancel)", field.label()),
                        );
                    }
                    None => self.adjust_focused(true),
                }
            }
            KeyAction::Submit => {
                let result = self.session.submit().map(|_| ());
                self.after_transition(result);
                if self.session.step() == WizardStep::Results {
                    info!("Design request submitted in {} mode", self.session.mode());
                }
            }
            _ => {}
        }
    }

    /// Slider notch or option cycle for the focused field
    fn adjust_focused(&mut self, forward: bool) {
        let field = self.state.focused_field();
        let params = self.session.parameters();

        let value = match field.kind() {
            FieldKind::Number => {
                let (Some(range), Some(current)) = (field.range(), params.number(field)) else {
                    self.state.set_status(
                        StatusLevel::Info,
                        format!("{} has no slider; press Enter to type a value", field.label()),
                    );
                    return;
                };
                let next = if forward {
                    range.step_up(current)
                } else {
                    range.step_down(current)
                };
                ParameterValue::Number(next)
            }
            FieldKind::CoreType => {
                let options: Vec<CoreType> = CoreType::iter().collect();
                ParameterValue::CoreType(cycle_optional(&options, params.core_type, forward))
            }
            FieldKind::CoreShape => {
                let options: Vec<CoreShape> = CoreShape::iter().collect();
                ParameterValue::CoreShape(cycle_optional(&options, params.core_shape, forward))
            }
            FieldKind::CoreMaterial => {
                let options = params.available_core_materials();
                if options.is_empty() {
                    self.state
                        .set_status(StatusLevel::Warning, "Select a core type first");
                    return;
                }
                let current = params
                    .core_material
                    .as_deref()
                    .and_then(|m| options.iter().copied().find(|o| *o == m));
                ParameterValue::CoreMaterial(
                    cycle_optional(options, current, forward).map(str::to_string),
                )
            }
            FieldKind::WindingMaterial => {
                let options: Vec<WindingMaterial> = WindingMaterial::iter().collect();
                let current = options
                    .iter()
                    .position(|w| *w == params.winding_material)
                    .unwrap_or(0);
                ParameterValue::WindingMaterial(options[step_index(current, options.len(), forward)])
            }
        };

        self.apply_parameter(field, value);
    }

    fn apply_parameter(&mut self, field: ParameterField, value: ParameterValue) {
        match self.session.set_parameter(field, value) {
            Ok(()) if self.session.parameters().has_stale_core_material() => {
                self.state.set_status(
                    StatusLevel::Warning,
                    "Core material is not offered for the selected core type",
                );
            }
            Ok(()) => self.state.clear_status(),
            Err(e) => self.state.set_status(StatusLevel::Error, e.to_string()),
        }
    }
}

/// Wrapping cursor step over `len` entries
fn step_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

/// Cycle through `options` with an extra "unset" slot between the last and
/// the first entry
fn cycle_optional<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let position = current.and_then(|c| options.iter().position(|o| *o == c));
    let slots = options.len() + 1;
    // slot 0 is "unset", slot i + 1 is options[i]
    let slot = position.map_or(0, |p| p + 1);
    let next = step_index(slot, slots, forward);
    next.checked_sub(1).map(|i| options[i])
}
