//! Centered floating window drawn over the current screen

use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Sizing and decoration of a floating window
#[derive(Debug, Clone)]
pub struct FloatingWindowConfig {
    pub title: String,
    pub width_percent: u16,
    pub height_percent: u16,
    pub min_width: u16,
    pub min_height: u16,
    pub max_width: u16,
    pub max_height: u16,
}

impl Default for FloatingWindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width_percent: 60,
            height_percent: 60,
            min_width: 30,
            min_height: 8,
            max_width: 100,
            max_height: 40,
        }
    }
}

pub struct FloatingWindow {
    config: FloatingWindowConfig,
}

impl FloatingWindow {
    pub fn new(config: FloatingWindowConfig) -> Self {
        Self { config }
    }

    /// Window rectangle centered in `parent`, clamped to the configured
    /// bounds and never larger than the parent
    pub fn area(&self, parent: Rect) -> Rect {
        let c = &self.config;
        let width = (parent.width * c.width_percent / 100)
            .clamp(c.min_width, c.max_width)
            .min(parent.width);
        let height = (parent.height * c.height_percent / 100)
            .clamp(c.min_height, c.max_height)
            .min(parent.height);

        Rect {
            x: parent.x + (parent.width - width) / 2,
            y: parent.y + (parent.height - height) / 2,
            width,
            height,
        }
    }

    /// Render lines inside the window, with an optional footer hint
    pub fn render_lines(
        &self,
        f: &mut Frame,
        parent: Rect,
        lines: &[Line<'static>],
        footer: Option<&str>,
    ) {
        let area = self.area(parent);
        if area.width < 3 || area.height < 3 {
            return;
        }

        let mut block = Block::default()
            .title(format!(" {} ", self.config.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .style(Style::default().bg(Colors::BG_PRIMARY));
        if let Some(footer) = footer {
            block = block.title_bottom(Line::styled(format!(" {} ", footer), Styles::nav_hint()));
        }

        f.render_widget(Clear, area);
        let paragraph = Paragraph::new(lines.to_vec())
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_centered() {
        let window = FloatingWindow::new(FloatingWindowConfig {
            width_percent: 50,
            height_percent: 50,
            ..Default::default()
        });
        let area = window.area(Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_area_respects_bounds() {
        let window = FloatingWindow::new(FloatingWindowConfig {
            width_percent: 10,
            min_width: 40,
            max_width: 60,
            ..Default::default()
        });
        assert_eq!(window.area(Rect::new(0, 0, 200, 50)).width, 40);
        // never wider than the parent
        assert_eq!(window.area(Rect::new(0, 0, 20, 50)).width, 20);
    }
}
