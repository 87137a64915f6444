//! Patient registration form rendering

use super::field_renderer::{draw_checkbox, draw_text_field};
use super::select_input::draw_select;
use crate::app::App;
use crate::state::{FieldKind, FieldName, FormAction, RegistrationForm, GENDER_SELECT};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of one input row
const ROW_HEIGHT: u16 = 3;

/// Demographics inputs, one inner slice per row
const DEMOGRAPHICS_ROWS: &[&[FieldName]] = &[
    &[
        FieldName::GivenName,
        FieldName::MiddleName,
        FieldName::FamilyName,
    ],
    &[FieldName::UnidentifiedPatient, FieldName::Gender],
    &[
        FieldName::Birthdate,
        FieldName::BirthdateEstimated,
        FieldName::YearsEstimated,
        FieldName::MonthsEstimated,
    ],
];

/// Contact info inputs, one inner slice per row
const CONTACT_ROWS: &[&[FieldName]] = &[
    &[FieldName::Address1, FieldName::Address2],
    &[FieldName::CityVillage, FieldName::StateProvince],
    &[FieldName::Country, FieldName::PostalCode],
];

/// Draw the registration form with action sidebar
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(22), // Action panel
        ])
        .split(area);

    let form = &app.state.form;
    let section_height = |rows: &[&[FieldName]]| rows.len() as u16 * ROW_HEIGHT + 2;

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(section_height(DEMOGRAPHICS_ROWS)),
            Constraint::Length(section_height(CONTACT_ROWS)),
            Constraint::Min(0),
        ])
        .split(main_chunks[0]);

    draw_section(frame, sections[0], "Demographics", DEMOGRAPHICS_ROWS, false, form);
    draw_section(frame, sections[1], "Contact Info", CONTACT_ROWS, true, form);

    draw_action_panel(frame, main_chunks[1], form, app.state.ready_to_submit());
}

/// Draw one titled section of input rows
fn draw_section(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[&[FieldName]],
    contact: bool,
    form: &RegistrationForm,
) {
    let has_focus = form
        .active_field_name()
        .is_some_and(|active| active.is_contact() == contact);
    let border_color = if has_focus {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows.iter().map(|_| Constraint::Length(ROW_HEIGHT)))
        .split(inner);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(row.iter().map(|_| Constraint::Ratio(1, row.len() as u32)))
            .split(*row_area);
        for (field, cell) in row.iter().zip(cells.iter()) {
            draw_input(frame, *cell, *field, form);
        }
    }
}

/// Draw a single input according to its kind
fn draw_input(frame: &mut Frame, area: Rect, field: FieldName, form: &RegistrationForm) {
    let values = form.values();
    let is_active = form.active_field_name() == Some(field);
    let error = form.visible_error(field);

    match field.kind() {
        FieldKind::Checkbox => draw_checkbox(
            frame,
            area,
            field.label(),
            values.flag(field).unwrap_or_default(),
            is_active,
        ),
        FieldKind::Select => draw_select(
            frame,
            area,
            field.label(),
            &GENDER_SELECT,
            &values.gender,
            is_active,
            error,
        ),
        FieldKind::Date => draw_text_field(
            frame,
            area,
            field.label(),
            form.birthdate_input(),
            is_active,
            error,
        ),
        FieldKind::Text | FieldKind::Number => draw_text_field(
            frame,
            area,
            field.label(),
            &values.display_value(field),
            is_active,
            error,
        ),
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, form: &RegistrationForm, can_submit: bool) {
    let is_focused = form.is_buttons_row_active();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FormAction::ALL
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    for (index, action) in FormAction::ALL.iter().enumerate() {
        let (enabled, accent) = match action {
            FormAction::Register => (can_submit, Some(Color::Green)),
            FormAction::FillDummyData => (true, Some(Color::Yellow)),
            FormAction::Reset => (true, Some(Color::Blue)),
            FormAction::Quit => (true, Some(Color::Gray)),
        };
        render_action_button(
            frame,
            button_chunks[index],
            action.label(),
            is_focused && form.selected_button == index,
            enabled,
            accent,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_cover_every_field_once() {
        let mut fields: Vec<FieldName> = DEMOGRAPHICS_ROWS
            .iter()
            .chain(CONTACT_ROWS.iter())
            .flat_map(|row| row.iter().copied())
            .collect();
        fields.sort();
        fields.dedup();
        assert_eq!(fields.len(), FieldName::ALL.len());
    }

    #[test]
    fn test_contact_rows_hold_contact_fields() {
        for row in CONTACT_ROWS {
            assert!(row.iter().all(|f| f.is_contact()));
        }
        for row in DEMOGRAPHICS_ROWS {
            assert!(row.iter().all(|f| !f.is_contact()));
        }
    }
}
