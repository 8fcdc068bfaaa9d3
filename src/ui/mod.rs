//! User interface rendering module
//!
//! - `header` - Title bar, mode badge and step indicator
//! - `screens` - One renderer per wizard screen

mod header;
pub mod screens;

use crate::app::{AppState, Screen, StatusLevel};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::session::Session;
use crate::theme::{Styles, UiConstants};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// Main entry point for rendering. Delegates the content area to the
/// screen renderers in [`screens`].
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI for the current session
    pub fn render(
        &self,
        f: &mut Frame,
        session: &Session,
        state: &AppState,
        keybinding_ctx: &KeybindingContext,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        self.header.render(f, chunks[0], session);

        let screen = Screen::of(session);
        match screen {
            Screen::Overview => screens::render_overview(f, chunks[1], state),
            Screen::Component => screens::render_component_select(f, chunks[1], session, state),
            Screen::Topology => screens::render_topology_select(f, chunks[1], session, state),
            Screen::Parameters => screens::render_parameters(f, chunks[1], session, state),
            Screen::Results => screens::render_results(f, chunks[1], session),
        }

        render_status_bar(f, chunks[2], state);

        let nav_bar = NavBar::new(keybinding_ctx.get_nav_items(screen));
        nav_bar.render(f, chunks[3]);

        // Help goes on top of everything
        if state.help_visible {
            let help_overlay = HelpOverlay::new(screen, keybinding_ctx);
            help_overlay.render(f, f.area());
        }
    }
}

/// Render the one-line status message, if any
fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(ref status) = state.status else {
        return;
    };

    let style = match status.level {
        StatusLevel::Info => Styles::text_secondary(),
        StatusLevel::Warning => Styles::warning(),
        StatusLevel::Error => Styles::error(),
    };
    let line = Line::from(vec![Span::raw(" "), Span::styled(status.text.clone(), style)]);
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComponentKind, DesignMode};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(session: &Session, state: &AppState) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let renderer = UiRenderer::new();
        let keybindings = KeybindingContext::new();
        terminal
            .draw(|f| renderer.render(f, session, state, &keybindings))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_status_bar_shows_message() {
        let session = Session::new();
        let mut state = AppState::default();
        state.set_status(StatusLevel::Warning, "Select a core type first");
        let screen = render_to_string(&session, &state);
        assert!(screen.contains("Select a core type first"));
    }

    #[test]
    fn test_help_overlay_drawn_on_top() {
        let mut session = Session::new();
        session.select_mode(DesignMode::Ai).unwrap();
        session.select_component(ComponentKind::Inductor).unwrap();
        let mut state = AppState::default();
        state.sync_with(&session);
        state.help_visible = true;

        let screen = render_to_string(&session, &state);
        assert!(screen.contains("MagForge Help"));
        assert!(screen.contains("Topology Selection"));
    }

    #[test]
    fn test_nav_bar_follows_screen() {
        let screen = render_to_string(&Session::new(), &AppState::default());
        assert!(screen.contains("[Enter]"));
        assert!(screen.contains("Quit"));
    }
}
