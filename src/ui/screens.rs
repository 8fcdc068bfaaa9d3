//! Wizard screens.
//!
//! One renderer per step plus the overview:
//! - `Overview` - Mode selection and feature list
//! - `Component` - Component type cards
//! - `Topology` - Category tabs, topology list with suitability badges
//! - `Parameters` - Sectioned parameter form with the design summary
//! - `Results` - Summary of the submitted request
//!
//! Renderers only read the session and view state; every change goes back
//! through the app's key handling.

use crate::app::AppState;
use crate::catalog::{self, TopologyEntry};
use crate::parameters::{ParameterField, ParameterSection};
use crate::session::{DesignSummary, Session};
use crate::suitability::SuitabilityRating;
use crate::theme::{Colors, Styles, Theme};
use crate::types::{ComponentKind, DesignMode, TopologyCategory};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};
use strum::IntoEnumIterator;

const TAGLINE: &str = "Advanced Magnetic Component Design for Power Electronics";
const POWERED_BY: &str = "Powered by MagNet AI & Advanced Analytics";

/// Feature cards on the overview: (title, badge, description)
const FEATURES: &[(&str, &str, &str)] = &[
    (
        "AI-Powered Optimization",
        "AI Enhanced",
        "Advanced neural networks and machine learning algorithms optimize designs based on extensive datasets",
    ),
    (
        "Conventional Design Methods",
        "Proven Methods",
        "Time-tested analytical approaches and engineering rules for reliable component design",
    ),
    (
        "Performance Analysis",
        "Analytics",
        "Comprehensive efficiency analysis, loss calculations, and thermal profiling",
    ),
    (
        "Export Capabilities",
        "Production Ready",
        "Generate design reports, winding specifications, 3D models, and manufacturing files",
    ),
];

const COMPONENT_SUBTITLE: &str = "Choose the type of magnetic component you want to design. \
    Each type has different design considerations and optimization opportunities.";

fn mode_entry_label(mode: DesignMode) -> &'static str {
    match mode {
        DesignMode::Ai => "Start with AI Design",
        DesignMode::Conventional => "Conventional Design",
        DesignMode::Compare => "Compare Designs",
        DesignMode::Overview => "",
    }
}

fn section_description(section: ParameterSection) -> &'static str {
    match section {
        ParameterSection::Electrical => "Define the electrical operating conditions",
        ParameterSection::Material => "Choose magnetic core specifications",
        ParameterSection::Thermal => "Define thermal operating conditions",
        ParameterSection::Constraints => "Set physical and performance limits",
    }
}

fn section_tab(section: ParameterSection) -> &'static str {
    match section {
        ParameterSection::Electrical => "Electrical",
        ParameterSection::Material => "Material",
        ParameterSection::Thermal => "Thermal",
        ParameterSection::Constraints => "Constraints",
    }
}

fn subtitle(text: String) -> Paragraph<'static> {
    Paragraph::new(Line::styled(text, Styles::text_secondary()))
        .wrap(Wrap { trim: true })
}

fn highlight_style(mode: DesignMode) -> Style {
    Style::default()
        .fg(Colors::SELECTED_FG)
        .bg(Theme::mode_color(mode))
        .add_modifier(Modifier::BOLD)
}

// ============================================================================
// Overview
// ============================================================================

pub fn render_overview(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Tagline
            Constraint::Length(5), // Mode list
            Constraint::Min(4),    // Features
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::styled(format!(" {} ", POWERED_BY), Style::default().fg(Colors::PRIMARY)),
        Line::from(""),
        Line::styled(TAGLINE, Styles::text_secondary()),
    ])
    .alignment(Alignment::Center);
    f.render_widget(intro, chunks[0]);

    let items: Vec<ListItem> = DesignMode::SELECTABLE
        .iter()
        .map(|mode| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("  {}  ", mode_entry_label(*mode)),
                    Style::default().fg(Theme::mode_color(*mode)),
                ),
                Span::styled(mode.heading(), Styles::text_muted()),
            ]))
        })
        .collect();
    let selected_mode = DesignMode::SELECTABLE[state.mode_cursor.min(DesignMode::SELECTABLE.len() - 1)];
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active())
                .title(" Choose a design mode "),
        )
        .highlight_style(highlight_style(selected_mode))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    list_state.select(Some(state.mode_cursor));
    f.render_stateful_widget(list, chunks[1], &mut list_state);

    let mut lines = Vec::new();
    for (title, badge, description) in FEATURES {
        lines.push(Line::from(vec![
            Span::styled(*title, Styles::category()),
            Span::raw("  "),
            Span::styled(format!("[{}]", badge), Styles::text_muted()),
        ]));
        lines.push(Line::styled(format!("  {}", description), Styles::text()));
        lines.push(Line::from(""));
    }
    let features = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive())
                .title(" Professional-Grade Design Tools "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(features, chunks[2]);
}

// ============================================================================
// Component Selection
// ============================================================================

pub fn render_component_select(f: &mut Frame, area: Rect, session: &Session, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step title
            Constraint::Length(2), // Subtitle
            Constraint::Min(6),    // Cards
            Constraint::Length(1), // Selection footer
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::styled(session.step().title(), Styles::title())),
        chunks[0],
    );
    f.render_widget(subtitle(COMPONENT_SUBTITLE.to_string()), chunks[1]);

    let components = catalog::components();
    let constraints = vec![Constraint::Ratio(1, components.len() as u32); components.len()];
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(chunks[2]);

    let show_ai = session.mode() == DesignMode::Ai;
    for (index, info) in components.iter().enumerate() {
        let focused = index == state.component_cursor;
        let chosen = session.component() == Some(info.kind);

        let mut lines = vec![
            Line::from(vec![
                Span::raw("Complexity: "),
                Span::styled(info.complexity.to_string(), Theme::complexity_style(info.complexity)),
            ]),
            Line::from(""),
            Line::styled(info.description, Styles::text()),
            Line::from(""),
            Line::styled("Common Applications:", Styles::category()),
        ];
        lines.extend(
            info.applications
                .iter()
                .map(|app| Line::styled(format!("  • {}", app), Styles::text_secondary())),
        );
        if show_ai {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "AI Advantages:",
                Style::default().fg(Colors::MODE_AI).add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::styled(format!("  {}", info.ai_advantage), Styles::text_secondary()));
        }

        let title = if chosen {
            format!(" ✓ {} ", info.name)
        } else {
            format!(" {} ", info.name)
        };
        let border = if focused {
            Style::default().fg(Theme::mode_color(session.mode()))
        } else {
            Styles::border_inactive()
        };
        let card = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(title)
                    .title_style(if focused { Styles::title() } else { Styles::text() }),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(card, cards[index]);
    }

    if let Some(component) = session.component() {
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Selected: ", Styles::text_muted()),
                Span::styled(component.display_name(), Styles::success()),
            ])),
            chunks[3],
        );
    }
}

// ============================================================================
// Topology Selection
// ============================================================================

/// One line of the topology list: name, isolation and the suitability badge
fn topology_item(entry: &TopologyEntry, rating: SuitabilityRating, chosen: bool) -> ListItem<'static> {
    let name_style = if rating.is_applicable() {
        Styles::text()
    } else {
        Styles::disabled()
    };
    let marker = if chosen { "✓ " } else { "  " };
    ListItem::new(Line::from(vec![
        Span::styled(marker, Styles::success()),
        Span::styled(entry.name, name_style),
        Span::styled(format!("  ({})  ", entry.isolation), Styles::text_muted()),
        Span::styled(format!("[{}]", rating), Theme::suitability_style(rating)),
    ]))
}

fn topology_details(entry: &TopologyEntry, rating: SuitabilityRating) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(entry.name, Styles::title()),
        Line::styled(entry.description, Styles::text()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Voltage:     ", Styles::text_muted()),
            Span::styled(entry.voltage, Styles::text()),
        ]),
        Line::from(vec![
            Span::styled("Isolation:   ", Styles::text_muted()),
            Span::styled(entry.isolation.to_string(), Styles::text()),
        ]),
        Line::from(vec![
            Span::styled("Complexity:  ", Styles::text_muted()),
            Span::styled(entry.complexity.to_string(), Theme::complexity_style(entry.complexity)),
        ]),
        Line::from(vec![
            Span::styled("Suitability: ", Styles::text_muted()),
            Span::styled(rating.to_string(), Theme::suitability_style(rating)),
        ]),
        Line::from(""),
        Line::styled("Applications:", Styles::category()),
    ];
    lines.extend(
        entry
            .applications
            .iter()
            .map(|app| Line::styled(format!("  • {}", app), Styles::text_secondary())),
    );
    if !rating.is_applicable() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Not selectable for this component", Styles::error()));
    }
    lines
}

pub fn render_topology_select(f: &mut Frame, area: Rect, session: &Session, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step title
            Constraint::Length(1), // Subtitle
            Constraint::Length(3), // Category tabs
            Constraint::Min(6),    // List + details
            Constraint::Length(1), // Selection footer
        ])
        .split(area);

    let component_name = session
        .component()
        .map_or("component", ComponentKind::prose_name);

    f.render_widget(
        Paragraph::new(Line::styled(session.step().title(), Styles::title())),
        chunks[0],
    );
    f.render_widget(
        subtitle(format!(
            "Choose the converter topology for your {} design",
            component_name
        )),
        chunks[1],
    );

    let active = session.active_category();
    let titles: Vec<Line> = TopologyCategory::iter()
        .map(|c| Line::from(c.name()))
        .collect();
    let selected_tab = TopologyCategory::iter().position(|c| c == active).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive()),
        )
        .style(Styles::text_secondary())
        .highlight_style(Styles::category().add_modifier(Modifier::UNDERLINED))
        .select(selected_tab);
    f.render_widget(tabs, chunks[2]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);

    let topologies = catalog::topologies_in(active);
    let items: Vec<ListItem> = topologies
        .iter()
        .map(|t| topology_item(t, session.suitability_of(t.id), session.topology() == Some(t.id)))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active())
                .title(format!(" {} ", catalog::category(active).name)),
        )
        .highlight_style(Style::default().bg(Colors::BG_PRIMARY).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    list_state.select(Some(state.topology_cursor));
    f.render_stateful_widget(list, body[0], &mut list_state);

    if let Some(entry) = topologies.get(state.topology_cursor) {
        let details = Paragraph::new(topology_details(entry, session.suitability_of(entry.id)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::border_inactive())
                    .title(" Details "),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(details, body[1]);
    }

    if let Some(entry) = session.topology_entry() {
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Selected topology: ", Styles::text_muted()),
                Span::styled(entry.name, Styles::success()),
                Span::styled(format!(" for {} design", component_name), Styles::text_muted()),
            ])),
            chunks[4],
        );
    }
}

// ============================================================================
// Parameters
// ============================================================================

fn field_line(
    session: &Session,
    state: &AppState,
    field: ParameterField,
    focused: bool,
) -> Line<'static> {
    let params = session.parameters();
    let value = match state.input {
        Some(ref input) if focused && input.field == field => format!("{}_", input.buffer),
        _ => params.display_value(field),
    };
    let value_style = if focused && state.input.is_some() {
        Styles::category()
    } else if field == ParameterField::CoreMaterial && params.has_stale_core_material() {
        Styles::warning()
    } else {
        Styles::text()
    };

    let mut spans = vec![
        Span::styled(if focused { "> " } else { "  " }, Styles::title()),
        Span::styled(format!("{:<22}", field.label()), if focused { Styles::title() } else { Styles::text_secondary() }),
        Span::styled(value, value_style),
    ];
    if let Some(range) = field.range() {
        spans.push(Span::styled(
            format!("  [{} - {}]", range.min, range.max),
            Styles::text_muted(),
        ));
    }
    if field == ParameterField::CoreMaterial && params.available_core_materials().is_empty() {
        spans.push(Span::styled("  (select a core type first)", Styles::text_muted()));
    }
    Line::from(spans)
}

fn summary_lines(summary: &DesignSummary) -> Vec<Line<'static>> {
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<11}", label), Styles::text_muted()),
            Span::styled(value, Styles::text()),
        ])
    };

    let mut lines = vec![
        row(
            "Component:",
            summary
                .component
                .map_or("-", ComponentKind::display_name)
                .to_string(),
        ),
        row(
            "Topology:",
            summary.topology.map_or("-", |t| t.name).to_string(),
        ),
        row("Power:", format!("{}W", summary.power_level)),
        row("Frequency:", format!("{}kHz", summary.switching_frequency)),
        row("Efficiency:", format!("{}%", summary.efficiency)),
    ];
    if summary.topology.is_some() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<11}", "Rating:"), Styles::text_muted()),
            Span::styled(summary.suitability.to_string(), Theme::suitability_style(summary.suitability)),
        ]));
    }
    if summary.stale_core_material {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Core material does not match the core type",
            Styles::warning(),
        ));
    }
    lines
}

pub fn render_parameters(f: &mut Frame, area: Rect, session: &Session, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step title + mode badge
            Constraint::Length(1), // Subtitle
            Constraint::Min(8),    // Form + sidebar
        ])
        .split(area);

    let mode = session.mode();
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(session.step().title(), Styles::title()),
            Span::raw("  "),
            Span::styled(
                format!(" {} Mode ", mode.to_string().to_uppercase()),
                highlight_style(mode),
            ),
        ])),
        chunks[0],
    );

    let component_name = session.component().map_or("component", ComponentKind::prose_name);
    let topology_name = session.topology_entry().map_or("-", |t| t.name);
    f.render_widget(
        subtitle(format!(
            "Configure parameters for your {} in {} topology",
            component_name, topology_name
        )),
        chunks[1],
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);

    // Form
    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(body[0]);

    let sections: Vec<ParameterSection> = ParameterSection::iter().collect();
    let tabs = Tabs::new(sections.iter().map(|s| Line::from(section_tab(*s))).collect::<Vec<_>>())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive()),
        )
        .style(Styles::text_secondary())
        .highlight_style(Styles::category().add_modifier(Modifier::UNDERLINED))
        .select(sections.iter().position(|s| *s == state.section).unwrap_or(0));
    f.render_widget(tabs, form[0]);

    let mut lines = vec![
        Line::styled(section_description(state.section), Styles::text_muted()),
        Line::from(""),
    ];
    let focused_field = state.focused_field();
    lines.extend(
        state
            .section
            .fields()
            .map(|field| field_line(session, state, field, field == focused_field)),
    );
    let fields = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(format!(" {} ", state.section.title())),
    );
    f.render_widget(fields, form[1]);

    // Sidebar
    let insights = mode.insights();
    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(if insights.is_empty() { 0 } else { insights.len() as u16 + 2 }),
            Constraint::Length(3),
        ])
        .split(body[1]);

    let summary = Paragraph::new(summary_lines(&session.summary()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive())
                .title(" Design Summary "),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(summary, sidebar[0]);

    if !insights.is_empty() {
        let lines: Vec<Line> = insights
            .iter()
            .map(|i| Line::styled(format!("• {}", i), Styles::text_secondary()))
            .collect();
        let panel = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Colors::MODE_AI))
                    .title(" AI Insights "),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(panel, sidebar[1]);
    }

    let submit = Paragraph::new(Line::from(vec![
        Span::styled(" [S] ", Styles::title()),
        Span::styled(format!(" {} ", mode.submit_label()), highlight_style(mode)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Styles::border_inactive()));
    f.render_widget(submit, sidebar[2]);
}

// ============================================================================
// Results
// ============================================================================

pub fn render_results(f: &mut Frame, area: Rect, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(6),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::styled(session.step().title(), Styles::title())),
        chunks[0],
    );
    f.render_widget(
        subtitle(format!(
            "Design request submitted in {} mode. No solver is attached; the request below is what would be sent.",
            session.mode().badge()
        )),
        chunks[1],
    );

    let mut lines = summary_lines(&session.summary());
    lines.push(Line::from(""));
    lines.push(Line::styled("Parameters", Styles::category()));
    for section in ParameterSection::iter() {
        lines.push(Line::styled(format!(" {}", section.title()), Styles::text_secondary()));
        for field in section.fields() {
            lines.push(Line::from(vec![
                Span::styled(format!("   {:<22}", field.label()), Styles::text_muted()),
                Span::styled(session.parameters().display_value(field), Styles::text()),
            ]));
        }
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::mode_color(session.mode())))
            .title(" Design Summary "),
    );
    f.render_widget(panel, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NumberInput;
    use crate::parameters::{CoreType, ParameterValue};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw<F: FnOnce(&mut Frame)>(render: F) -> String {
        let backend = TestBackend::new(140, 45);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(render).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn session_at_parameters(mode: DesignMode) -> Session {
        let mut session = Session::new();
        session.select_mode(mode).unwrap();
        session.select_component(ComponentKind::Transformer).unwrap();
        session.select_topology("flyback").unwrap();
        session
    }

    #[test]
    fn test_overview_renders_modes_and_features() {
        let text = draw(|f| render_overview(f, f.area(), &AppState::default()));
        assert!(text.contains(TAGLINE));
        assert!(text.contains("Start with AI Design"));
        assert!(text.contains("Compare Designs"));
        assert!(text.contains("Export Capabilities"));
        assert!(text.contains("Professional-Grade Design Tools"));
    }

    #[test]
    fn test_component_screen_ai_advantages_only_in_ai_mode() {
        let mut session = Session::new();
        session.select_mode(DesignMode::Ai).unwrap();
        let text = draw(|f| render_component_select(f, f.area(), &session, &AppState::default()));
        assert!(text.contains("Coupled Inductor"));
        assert!(text.contains("AI Advantages:"));

        let mut session = Session::new();
        session.select_mode(DesignMode::Conventional).unwrap();
        let text = draw(|f| render_component_select(f, f.area(), &session, &AppState::default()));
        assert!(text.contains("Common Applications:"));
        assert!(!text.contains("AI Advantages:"));
    }

    #[test]
    fn test_topology_screen_shows_ratings() {
        let mut session = Session::new();
        session.select_mode(DesignMode::Conventional).unwrap();
        session.select_component(ComponentKind::Inductor).unwrap();
        let text = draw(|f| render_topology_select(f, f.area(), &session, &AppState::default()));
        assert!(text.contains("Choose the converter topology for your inductor design"));
        assert!(text.contains("Buck Converter"));
        assert!(text.contains("[Excellent]"));
        assert!(text.contains("[Not applicable]"));
        assert!(text.contains("AC-DC Converters"));
    }

    #[test]
    fn test_parameters_screen_ai_mode() {
        let session = session_at_parameters(DesignMode::Ai);
        let text = draw(|f| render_parameters(f, f.area(), &session, &AppState::default()));
        assert!(text.contains("AI Mode"));
        assert!(text.contains("Configure parameters for your transformer in Flyback Converter topology"));
        assert!(text.contains("Power Level"));
        assert!(text.contains("AI Insights"));
        assert!(text.contains("Run AI Design"));
        assert!(text.contains("100W"));
    }

    #[test]
    fn test_parameters_screen_shows_input_buffer() {
        let session = session_at_parameters(DesignMode::Conventional);
        let state = AppState {
            input: Some(NumberInput::new(ParameterField::PowerLevel, 42.0)),
            ..AppState::default()
        };
        let text = draw(|f| render_parameters(f, f.area(), &session, &state));
        assert!(text.contains("42_"));
        assert!(text.contains("Calculate Design"));
        assert!(!text.contains("AI Insights"));
    }

    #[test]
    fn test_stale_material_warning() {
        let mut session = session_at_parameters(DesignMode::Compare);
        session
            .set_parameter(ParameterField::CoreType, ParameterValue::CoreType(Some(CoreType::Ferrite)))
            .unwrap();
        session
            .set_parameter(ParameterField::CoreMaterial, ParameterValue::CoreMaterial(Some("N87".into())))
            .unwrap();
        session
            .set_parameter(ParameterField::CoreType, ParameterValue::CoreType(Some(CoreType::Mpp)))
            .unwrap();
        let text = draw(|f| render_results(f, f.area(), &session));
        assert!(text.contains("Core material does not match the core type"));
    }

    #[test]
    fn test_results_screen() {
        let mut session = session_at_parameters(DesignMode::Conventional);
        session.submit().unwrap();
        let text = draw(|f| render_results(f, f.area(), &session));
        assert!(text.contains("Design Results"));
        assert!(text.contains("Flyback Converter"));
        assert!(text.contains("Switching Frequency"));
    }
}
