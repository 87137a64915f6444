//! Form state management for the registration form

use super::field::{FieldKind, FieldName, FieldUpdate};
use super::validation::{validate, validate_field, ErrorMap};
use super::values::{FormValues, GENDER_SELECT};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::collections::HashSet;

/// Longest accepted birthdate input (`YYYY-MM-DD`)
const DATE_INPUT_LEN: usize = 10;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Parse a fully typed `YYYY-MM-DD` date
fn parse_birthdate(input: &str) -> Option<NaiveDate> {
    if input.len() != DATE_INPUT_LEN {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Events accepted by [`reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A single user edit. Dependency rules apply.
    Set(FieldUpdate),
    /// Bulk replacement used for pre-filling. Dependency rules do not apply.
    Prefill(Vec<FieldUpdate>),
    /// Back to the initial values
    Reset,
}

/// Pure state transition for the form values.
///
/// Checking "name unknown" clears every name field in the same transition.
pub fn reduce(mut values: FormValues, event: FormEvent) -> FormValues {
    match event {
        FormEvent::Set(FieldUpdate::UnidentifiedPatient(true)) => {
            values.unidentified_patient = true;
            values.given_name.clear();
            values.middle_name.clear();
            values.family_name.clear();
        }
        FormEvent::Set(update) => values.apply(update),
        FormEvent::Prefill(updates) => {
            for update in updates {
                values.apply(update);
            }
        }
        FormEvent::Reset => values = FormValues::default(),
    }
    values
}

/// Action panel buttons, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Register,
    FillDummyData,
    Reset,
    Quit,
}

impl FormAction {
    pub const ALL: [FormAction; 4] = [
        FormAction::Register,
        FormAction::FillDummyData,
        FormAction::Reset,
        FormAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormAction::Register => "Register Patient",
            FormAction::FillDummyData => "Fill Dummy Data",
            FormAction::Reset => "Reset",
            FormAction::Quit => "Quit",
        }
    }
}

/// The registration session: values, touched flags, errors and focus
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    values: FormValues,
    touched: HashSet<FieldName>,
    errors: ErrorMap,
    /// Raw birthdate text while it is being typed
    birthdate_input: String,
    pub active_field_index: usize,
    /// Which button is selected when on the actions row
    pub selected_button: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot of every field
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current errors for touched fields (all fields after a submit attempt)
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    /// Error text to render for a field
    pub fn visible_error(&self, field: FieldName) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Birthdate as the user is typing it
    pub fn birthdate_input(&self) -> &str {
        &self.birthdate_input
    }

    /// Apply one user edit, including the name-clearing rule
    pub fn set_field(&mut self, update: FieldUpdate) {
        let field = update.field();
        self.dispatch(FormEvent::Set(update));
        if field == FieldName::Birthdate {
            self.sync_birthdate_input();
        }
    }

    /// Apply many updates at once without dependency rules
    pub fn set_values(&mut self, updates: impl IntoIterator<Item = FieldUpdate>) {
        self.dispatch(FormEvent::Prefill(updates.into_iter().collect()));
        self.sync_birthdate_input();
    }

    /// Back to a fresh session
    pub fn reset(&mut self) {
        self.dispatch(FormEvent::Reset);
        self.touched.clear();
        self.errors.clear();
        self.birthdate_input.clear();
        self.active_field_index = 0;
        self.selected_button = 0;
    }

    /// Mark a field as interacted with and evaluate its rule
    pub fn touch(&mut self, field: FieldName) {
        self.touched.insert(field);
        let error = validate_field(&self.values, field, &Local::now());
        self.errors.set(field, error);
    }

    /// Attempt submission at the current time
    pub fn submit(&mut self) -> Result<&FormValues, ErrorMap> {
        self.submit_at(&Local::now())
    }

    /// Touch every field and run the full rule set.
    /// Returns the values when they may be submitted.
    pub fn submit_at<Tz: TimeZone>(
        &mut self,
        now: &DateTime<Tz>,
    ) -> Result<&FormValues, ErrorMap> {
        self.touched.extend(FieldName::ALL);
        self.errors = validate(&self.values, now);
        if self.errors.is_empty() {
            Ok(&self.values)
        } else {
            Err(self.errors.clone())
        }
    }

    /// Field under the cursor, None on the actions row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == FieldName::ALL.len()
    }

    pub fn selected_action(&self) -> FormAction {
        FormAction::ALL[self.selected_button % FormAction::ALL.len()]
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FormAction::ALL.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FormAction::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_field_name() else {
            return;
        };
        match field.kind() {
            FieldKind::Text => {
                let mut text = self.values.text(field).unwrap_or_default().to_string();
                text.push(c);
                if let Some(update) = FieldUpdate::text(field, text) {
                    self.set_field(update);
                }
            }
            FieldKind::Number => {
                let current = self.values.number(field).unwrap_or_default();
                let next = if c == '-' {
                    current.saturating_neg()
                } else if let Some(d) = c.to_digit(10) {
                    let digit = d as i32;
                    let magnitude = current
                        .saturating_abs()
                        .saturating_mul(10)
                        .saturating_add(digit);
                    if current < 0 {
                        -magnitude
                    } else {
                        magnitude
                    }
                } else {
                    return;
                };
                self.set_number(field, next);
            }
            FieldKind::Date => {
                if (c.is_ascii_digit() || c == '-') && self.birthdate_input.len() < DATE_INPUT_LEN {
                    self.birthdate_input.push(c);
                    self.commit_birthdate_input();
                }
            }
            FieldKind::Checkbox if c == ' ' => self.toggle_active(),
            FieldKind::Checkbox | FieldKind::Select => {}
        }
    }

    /// Remove the last character from the active field
    pub fn backspace(&mut self) {
        let Some(field) = self.active_field_name() else {
            return;
        };
        match field.kind() {
            FieldKind::Text => {
                let mut text = self.values.text(field).unwrap_or_default().to_string();
                text.pop();
                if let Some(update) = FieldUpdate::text(field, text) {
                    self.set_field(update);
                }
            }
            FieldKind::Number => {
                let current = self.values.number(field).unwrap_or_default();
                self.set_number(field, current / 10);
            }
            FieldKind::Date => {
                self.birthdate_input.pop();
                self.commit_birthdate_input();
            }
            FieldKind::Select => self.set_field(FieldUpdate::Gender(String::new())),
            FieldKind::Checkbox => {}
        }
    }

    /// Flip the active checkbox
    pub fn toggle_active(&mut self) {
        let update = match self.active_field_name() {
            Some(FieldName::UnidentifiedPatient) => {
                FieldUpdate::UnidentifiedPatient(!self.values.unidentified_patient)
            }
            Some(FieldName::BirthdateEstimated) => {
                FieldUpdate::BirthdateEstimated(!self.values.birthdate_estimated)
            }
            _ => return,
        };
        self.set_field(update);
    }

    /// Move the active dropdown one option forward or back
    pub fn cycle_select(&mut self, forward: bool) {
        if self.active_field_name() != Some(FieldName::Gender) {
            return;
        }
        let value = if forward {
            GENDER_SELECT.next_value(&self.values.gender)
        } else {
            GENDER_SELECT.prev_value(&self.values.gender)
        };
        self.set_field(FieldUpdate::Gender(value));
    }

    fn set_number(&mut self, field: FieldName, value: i32) {
        match field {
            FieldName::YearsEstimated => self.set_field(FieldUpdate::YearsEstimated(value)),
            FieldName::MonthsEstimated => self.set_field(FieldUpdate::MonthsEstimated(value)),
            _ => {}
        }
    }

    fn commit_birthdate_input(&mut self) {
        let parsed = parse_birthdate(&self.birthdate_input);
        self.dispatch(FormEvent::Set(FieldUpdate::Birthdate(parsed)));
    }

    fn sync_birthdate_input(&mut self) {
        if let Some(date) = self.values.birthdate {
            self.birthdate_input = date.format("%Y-%m-%d").to_string();
        } else if parse_birthdate(&self.birthdate_input).is_some() {
            self.birthdate_input.clear();
        }
    }

    fn dispatch(&mut self, event: FormEvent) {
        let values = std::mem::take(&mut self.values);
        self.values = reduce(values, event);
        self.revalidate_touched();
    }

    fn revalidate_touched(&mut self) {
        let now = Local::now();
        for field in FieldName::ALL {
            if self.touched.contains(&field) {
                self.errors.set(field, validate_field(&self.values, field, &now));
            }
        }
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        FieldName::ALL.len() + 1 // fields plus the actions row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    /// Leaving a field counts as a blur and touches it
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(FieldName::ALL.len());
        if index != self.active_field_index {
            if let Some(field) = self.active_field_name() {
                self.touch(field);
            }
        }
        self.active_field_index = index;
    }
}
