//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors, styles and visual constants used by the
//! wizard screens.
//!
//! # Usage
//! ```rust
//! use magforge::theme::{Colors, Styles, Theme};
//! use magforge::suitability::SuitabilityRating;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let badge = Theme::suitability_style(SuitabilityRating::Excellent);
//! ```

use crate::suitability::SuitabilityRating;
use crate::types::{Complexity, DesignMode};
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Panel background for popups
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    pub const BORDER_ACTIVE: Color = Color::Cyan;
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Text on an accent-coloured highlight
    pub const SELECTED_FG: Color = Color::Black;

    pub const NAV_HINT: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Design Mode Accents
    // -------------------------------------------------------------------------

    pub const MODE_AI: Color = Color::Magenta;
    pub const MODE_CONVENTIONAL: Color = Color::Blue;
    pub const MODE_COMPARE: Color = Color::Green;

    // -------------------------------------------------------------------------
    // Step Progress Colors
    // -------------------------------------------------------------------------

    pub const STEP_ACTIVE: Color = Color::Yellow;
    pub const STEP_COMPLETE: Color = Color::Green;
    pub const STEP_PENDING: Color = Color::Gray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section header (yellow)
    pub fn category() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Entries the user cannot pick
    pub fn disabled() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Semantic style lookups for domain values
pub struct Theme;

impl Theme {
    /// Accent color of a design mode
    pub fn mode_color(mode: DesignMode) -> Color {
        match mode {
            DesignMode::Overview => Colors::PRIMARY,
            DesignMode::Ai => Colors::MODE_AI,
            DesignMode::Conventional => Colors::MODE_CONVENTIONAL,
            DesignMode::Compare => Colors::MODE_COMPARE,
        }
    }

    /// Badge style for a suitability rating
    pub fn suitability_style(rating: SuitabilityRating) -> Style {
        match rating {
            SuitabilityRating::Excellent => Style::default()
                .fg(Colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
            SuitabilityRating::Good => Style::default().fg(Colors::INFO),
            SuitabilityRating::Limited => Style::default().fg(Colors::WARNING),
            SuitabilityRating::Variable => Style::default().fg(Colors::MODE_AI),
            SuitabilityRating::NotApplicable => Style::default().fg(Colors::ERROR),
            SuitabilityRating::Unknown => Style::default().fg(Colors::FG_MUTED),
        }
    }

    /// Style for a complexity label
    pub fn complexity_style(complexity: Complexity) -> Style {
        match complexity {
            Complexity::Simple => Style::default().fg(Colors::SUCCESS),
            Complexity::Moderate => Style::default().fg(Colors::WARNING),
            Complexity::Complex => Style::default().fg(Colors::ERROR),
            Complexity::Variable => Style::default().fg(Colors::FG_SECONDARY),
        }
    }

    /// Style for a wizard step indicator
    pub fn step_style(completed: bool, active: bool) -> Style {
        if active {
            Style::default()
                .fg(Colors::STEP_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else if completed {
            Style::default().fg(Colors::STEP_COMPLETE)
        } else {
            Style::default().fg(Colors::STEP_PENDING)
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Help popup size as a percentage of the screen
    pub const HELP_WIDTH_PCT: u16 = 60;
    pub const HELP_HEIGHT_PCT: u16 = 70;

    /// Help popup bounds
    pub const HELP_MIN_WIDTH: u16 = 44;
    pub const HELP_MAX_WIDTH: u16 = 80;

    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Mode heading plus step indicator
    pub const HEADER_HEIGHT: u16 = 4;

    pub const STATUS_BAR_HEIGHT: u16 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_mode_has_distinct_accent() {
        let colors: Vec<_> = DesignMode::SELECTABLE
            .iter()
            .map(|m| Theme::mode_color(*m))
            .collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }

    #[test]
    fn test_not_applicable_is_red() {
        assert_eq!(
            Theme::suitability_style(SuitabilityRating::NotApplicable).fg,
            Some(Colors::ERROR)
        );
        for rating in SuitabilityRating::iter() {
            let _ = Theme::suitability_style(rating);
        }
    }

    #[test]
    fn test_active_step_wins_over_completed() {
        assert_eq!(Theme::step_style(true, true).fg, Some(Colors::STEP_ACTIVE));
        assert_eq!(Theme::step_style(true, false).fg, Some(Colors::STEP_COMPLETE));
    }
}
