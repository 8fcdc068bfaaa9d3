//! Header rendering
//!
//! Application title, mode badge, mode heading and the step indicator.

use crate::session::Session;
use crate::theme::{Colors, Styles, Theme};
use crate::types::{DesignMode, WizardStep};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

const APP_TITLE: &str = "MagForge";

/// Header renderer
#[derive(Debug, Default)]
pub struct HeaderRenderer;

impl HeaderRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the header block for the current session
    pub fn render(&self, f: &mut Frame, area: Rect, session: &Session) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mode = session.mode();
        let mut lines = vec![Self::title_line(mode)];
        if !session.is_overview() {
            lines.push(Self::step_indicator(session.step()));
        }

        let header = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Styles::border_inactive()),
            )
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn title_line(mode: DesignMode) -> Line<'static> {
        let accent = Theme::mode_color(mode);
        let mut spans = vec![Span::styled(APP_TITLE, Styles::title())];

        if mode != DesignMode::Overview {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!(" {} ", mode.badge()),
                Style::default()
                    .fg(Colors::SELECTED_FG)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                mode.heading(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
        }

        Line::from(spans)
    }

    /// "1 Component > 2 Topology > ..." with completed, active and pending styling
    fn step_indicator(current: WizardStep) -> Line<'static> {
        let mut spans = Vec::new();
        for step in WizardStep::iter() {
            if step.step_number() > 1 {
                spans.push(Span::styled(" > ", Styles::text_muted()));
            }
            let marker = if step < current { "✓" } else { "" };
            spans.push(Span::styled(
                format!("{}{} {}", marker, step.step_number(), Self::short_title(step)),
                Theme::step_style(step < current, step == current),
            ));
        }
        Line::from(spans)
    }

    fn short_title(step: WizardStep) -> &'static str {
        match step {
            WizardStep::Component => "Component",
            WizardStep::Topology => "Topology",
            WizardStep::Parameters => "Parameters",
            WizardStep::Results => "Results",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_overview_title_has_no_badge() {
        let line = HeaderRenderer::title_line(DesignMode::Overview);
        assert_eq!(text_of(&line), "MagForge");
    }

    #[test]
    fn test_mode_badge() {
        let line = HeaderRenderer::title_line(DesignMode::Compare);
        let text = text_of(&line);
        assert!(text.contains(" Compare "));
        assert!(text.contains("Design Comparison"));
    }

    #[test]
    fn test_step_indicator_marks_completed_steps() {
        let text = text_of(&HeaderRenderer::step_indicator(WizardStep::Parameters));
        assert_eq!(text, "✓1 Component > ✓2 Topology > 3 Parameters > 4 Results");
    }
}
