//! Dropdown rendering

use super::field_renderer::field_block;
use crate::state::SelectInput;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw a dropdown showing the current option, or its placeholder when empty.
/// Arrows are shown while the field has focus.
pub fn draw_select(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    select: &SelectInput,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let text = select.display(value);
    let text_style = if select.selected_index(value).is_some() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = Vec::new();
    if is_active {
        spans.push(Span::styled("◂ ", Style::default().fg(Color::Cyan)));
    }
    spans.push(Span::styled(text, text_style));
    if is_active {
        spans.push(Span::styled(" ▸", Style::default().fg(Color::Cyan)));
    }

    let content = Paragraph::new(Line::from(spans));
    frame.render_widget(content.block(field_block(label, is_active, error)), area);
}
