//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change with the current wizard
//! screen. The same registry drives key dispatch, the nav bar and the help
//! overlay, so what is shown is always what works.

use crate::app::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    /// Previous category tab / parameter section
    PreviousTab,
    /// Next category tab / parameter section
    NextTab,
    /// Slider notch down or previous option
    Decrease,
    /// Slider notch up or next option
    Increase,
    Select,
    /// Type a value for the focused parameter
    Edit,
    Submit,
    Back,
    /// Header "Back" button: straight to the overview
    Overview,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding.
    ///
    /// Shift is ignored for character keys since it is already folded into
    /// the character ('?' arrives as Shift+'?' on most terminals).
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.code != self.key {
            return false;
        }
        let mut modifiers = event.modifiers;
        if matches!(event.code, KeyCode::Char(_) | KeyCode::BackTab) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        modifiers == self.modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Screen-specific keybindings
    screen_bindings: HashMap<Screen, Vec<Keybinding>>,
    /// Global keybindings (available on every screen)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            screen_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        let back = || Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back");
        let back_esc = || Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back");
        let overview =
            || Keybinding::new(KeyCode::Char('o'), KeyAction::Overview, "O", "Back to overview");

        // Overview
        self.screen_bindings.insert(
            Screen::Overview,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous mode"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next mode"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Start design"),
            ],
        );

        // Component
        self.screen_bindings.insert(
            Screen::Component,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous component"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next component"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Select component"),
                back(),
                back_esc(),
                overview(),
            ],
        );

        // Topology
        self.screen_bindings.insert(
            Screen::Topology,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous topology"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next topology"),
                Keybinding::new(KeyCode::Left, KeyAction::PreviousTab, "Left", "Previous category"),
                Keybinding::new(KeyCode::Right, KeyAction::NextTab, "Right", "Next category"),
                Keybinding::new(KeyCode::Tab, KeyAction::NextTab, "Tab", "Next category"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PreviousTab, "S-Tab", "Previous category"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Select topology"),
                back(),
                back_esc(),
                overview(),
            ],
        );

        // Parameters
        self.screen_bindings.insert(
            Screen::Parameters,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous field"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next field"),
                Keybinding::new(KeyCode::Tab, KeyAction::NextTab, "Tab", "Next section"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PreviousTab, "S-Tab", "Previous section"),
                Keybinding::new(KeyCode::Left, KeyAction::Decrease, "Left", "Decrease / previous option"),
                Keybinding::new(KeyCode::Right, KeyAction::Increase, "Right", "Increase / next option"),
                Keybinding::new(KeyCode::Char('-'), KeyAction::Decrease, "-", "Decrease"),
                Keybinding::new(KeyCode::Char('+'), KeyAction::Increase, "+", "Increase"),
                Keybinding::new(KeyCode::Enter, KeyAction::Edit, "Enter", "Type a value"),
                Keybinding::new(KeyCode::Char('s'), KeyAction::Submit, "S", "Submit design"),
                back(),
                back_esc(),
                overview(),
            ],
        );

        // Results
        self.screen_bindings.insert(
            Screen::Results,
            vec![back(), back_esc(), overview()],
        );
    }

    /// Get keybindings for a screen (includes global bindings)
    pub fn get_bindings(&self, screen: Screen) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(screen_bindings) = self.screen_bindings.get(&screen) {
            bindings.extend(screen_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key event to an action on the given screen
    pub fn action_for(&self, screen: Screen, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(screen)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, screen: Screen) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(screen);

        let priority_actions = match screen {
            Screen::Overview => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            Screen::Component => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            Screen::Topology => vec![
                KeyAction::NavigateUp,
                KeyAction::NextTab,
                KeyAction::Select,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            Screen::Parameters => vec![
                KeyAction::NavigateUp,
                KeyAction::NextTab,
                KeyAction::Increase,
                KeyAction::Edit,
                KeyAction::Submit,
                KeyAction::Back,
                KeyAction::Help,
            ],
            Screen::Results => vec![
                KeyAction::Back,
                KeyAction::Overview,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();

        for action in priority_actions {
            let Some(binding) = bindings.iter().find(|b| b.action == action) else {
                continue;
            };
            // Combined labels for the paired keys
            let item = match action {
                KeyAction::NavigateUp | KeyAction::NavigateDown => NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Navigate".to_string(),
                },
                KeyAction::NextTab | KeyAction::PreviousTab if screen == Screen::Topology => {
                    NavBarItem {
                        key_display: "Tab".to_string(),
                        action_label: "Category".to_string(),
                    }
                }
                KeyAction::NextTab | KeyAction::PreviousTab => NavBarItem {
                    key_display: "Tab".to_string(),
                    action_label: "Section".to_string(),
                },
                KeyAction::Increase | KeyAction::Decrease => NavBarItem {
                    key_display: "Lt/Rt".to_string(),
                    action_label: "Adjust".to_string(),
                },
                _ => NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                },
            };
            items.push(item);
        }

        items
    }

    /// Get full help content for a screen (for the help overlay)
    pub fn get_help_content(&self, screen: Screen) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PreviousTab
                        | KeyAction::NextTab
                )
            }),
            ("Actions", |a| {
                matches!(
                    a,
                    KeyAction::Select
                        | KeyAction::Edit
                        | KeyAction::Increase
                        | KeyAction::Decrease
                        | KeyAction::Submit
                )
            }),
            ("General", |a| {
                matches!(
                    a,
                    KeyAction::Back | KeyAction::Overview | KeyAction::Help | KeyAction::Quit
                )
            }),
        ];

        let bindings = self.get_bindings(screen);
        groups
            .iter()
            .filter_map(|(title, in_group)| {
                let items: Vec<_> = bindings
                    .iter()
                    .filter(|b| in_group(b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
