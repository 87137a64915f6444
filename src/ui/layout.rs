//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{DUMMY_DATA_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FieldKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the session identifier and location
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " New Patient ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    spans.push(Span::raw(" | "));
    spans.push(match &app.state.identifier {
        Some(identifier) => Span::styled(
            format!("ID {identifier}"),
            Style::default().fg(Color::White),
        ),
        None => Span::styled("ID unavailable", Style::default().fg(Color::Red)),
    });

    spans.push(Span::raw(" | "));
    spans.push(match &app.state.location {
        Some(location) => Span::styled(
            format!("Location {location}"),
            Style::default().fg(Color::Blue),
        ),
        None => Span::styled("Location unknown", Style::default().fg(Color::Red)),
    });

    let error_count = app.state.form.errors().len();
    if error_count > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{error_count} error(s)"),
            Style::default().fg(Color::Red),
        ));
    }

    if !app.state.registered.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} registered", app.state.registered.len()),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let spans = match &app.status_message {
        Some(msg) => vec![Span::styled(
            format!(" {msg}"),
            Style::default().fg(Color::Green),
        )],
        None => vec![Span::styled(
            format!(" {}", keyboard_hints(app)),
            Style::default().fg(Color::Gray),
        )],
    };

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever currently has focus
fn keyboard_hints(app: &App) -> String {
    let form = &app.state.form;
    if form.is_buttons_row_active() {
        return "j/k:nav  Enter:run  Tab:next".to_string();
    }
    let field_hint = match form.active_field_name().map(|f| f.kind()) {
        Some(FieldKind::Checkbox) => "Space:toggle",
        Some(FieldKind::Select) => "←/→:choose",
        Some(FieldKind::Date) => "YYYY-MM-DD",
        _ => "type to edit",
    };
    format!(
        "Tab:next  {field_hint}  {SUBMIT_SHORTCUT}:register  {DUMMY_DATA_SHORTCUT}:dummy  {RESET_SHORTCUT}:reset"
    )
}
