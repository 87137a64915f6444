//! Application state and core logic

use crate::error::SubmitError;
use crate::registry::RegistryClientTrait;
use crate::state::{
    estimate_birthdate, AppState, FieldName, FieldUpdate, Form, FormAction, FormValues, Patient,
    SavedPatient,
};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Registry used for location, identifiers and saving
    registry: Box<dyn RegistryClientTrait>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance and fetch the session values
    pub async fn new(registry: Box<dyn RegistryClientTrait>) -> Self {
        let mut app = Self {
            state: AppState::default(),
            registry,
            quit: false,
            status_message: None,
        };
        app.load_session().await;
        app
    }

    /// Fetch the current location and a patient identifier.
    /// Failures are queued for the error dialog; the form stays usable.
    pub async fn load_session(&mut self) {
        match self.registry.current_location().await {
            Ok(location) => self.state.location = Some(location),
            Err(e) => self.push_error(format!("Failed to load current location: {e}")),
        }
        self.refresh_identifier().await;
    }

    async fn refresh_identifier(&mut self) {
        match self.registry.next_identifier().await {
            Ok(identifier) => {
                tracing::debug!("Using patient identifier {identifier}");
                self.state.identifier = Some(identifier);
            }
            Err(e) => {
                self.state.identifier = None;
                self.push_error(format!("Failed to get patient identifier: {e}"));
            }
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        let on_action_panel = self.state.form.is_buttons_row_active();
        let active = self.state.form.active_field_name();

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Up/Down for action panel navigation
            KeyCode::Up | KeyCode::Char('k') if on_action_panel => self.state.form.prev_button(),
            KeyCode::Down | KeyCode::Char('j') if on_action_panel => {
                self.state.form.next_button()
            }
            KeyCode::Enter if on_action_panel => {
                let action = self.state.form.selected_action();
                self.run_action(action).await;
            }
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.run_action(FormAction::Register).await;
            }
            KeyCode::Char('d') if key.modifiers.contains(crate::platform::COMMAND_MODIFIER) => {
                self.run_action(FormAction::FillDummyData).await;
            }
            KeyCode::Char('r') if key.modifiers.contains(crate::platform::COMMAND_MODIFIER) => {
                self.run_action(FormAction::Reset).await;
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Left => self.state.form.cycle_select(false),
            KeyCode::Right => self.state.form.cycle_select(true),
            // Form field input (only when not on action panel)
            KeyCode::Char(c) if !on_action_panel => {
                self.state.form.input_char(c);
                if let Some(field) = active {
                    self.sync_estimated_birthdate(field);
                }
            }
            KeyCode::Backspace if !on_action_panel => {
                self.state.form.backspace();
                if let Some(field) = active {
                    self.sync_estimated_birthdate(field);
                }
            }
            KeyCode::Enter => self.state.form.next_field(),
            _ => {}
        }
        Ok(())
    }

    /// Run one of the action panel buttons
    pub async fn run_action(&mut self, action: FormAction) {
        match action {
            FormAction::Register => self.register().await,
            FormAction::FillDummyData => {
                self.state.form.set_values(FormValues::dummy());
                self.status_message = Some("Form filled with dummy data".to_string());
            }
            FormAction::Reset => {
                self.state.form.reset();
                self.status_message = Some("Form cleared".to_string());
            }
            FormAction::Quit => self.quit = true,
        }
    }

    /// Derive the birthdate from the estimated age while "estimated" is checked
    fn sync_estimated_birthdate(&mut self, field: FieldName) {
        let values = self.state.form.values();
        let age_changed = matches!(
            field,
            FieldName::YearsEstimated | FieldName::MonthsEstimated | FieldName::BirthdateEstimated
        );
        if !age_changed || !values.birthdate_estimated {
            return;
        }
        if values.years_estimated == 0 && values.months_estimated == 0 {
            return;
        }
        let today = Local::now().date_naive();
        if let Some(date) =
            estimate_birthdate(values.years_estimated, values.months_estimated, today)
        {
            self.state.form.set_field(FieldUpdate::Birthdate(Some(date)));
        }
    }

    /// Validate the form and hand the patient record to the registry
    pub async fn submit(&mut self) -> Result<SavedPatient, SubmitError> {
        let values = self
            .state
            .form
            .submit()
            .map_err(SubmitError::Invalid)?
            .clone();
        let identifier = self
            .state
            .identifier
            .clone()
            .ok_or(SubmitError::MissingIdentifier)?;
        let location = self
            .state
            .location
            .clone()
            .ok_or(SubmitError::MissingLocation)?;

        let patient = Patient::from_form(&values, &identifier, &location);
        tracing::info!("Registering patient with identifier {identifier}");
        tracing::debug!("Patient name: {}", patient.display_name());
        self.registry
            .save_patient(&patient)
            .await
            .map_err(|e| SubmitError::Save(format!("{e:#}")))
    }

    /// Submit and report the outcome in the UI
    async fn register(&mut self) {
        match self.submit().await {
            Ok(saved) => {
                self.status_message = Some(format!("Patient registered ({})", saved.uuid));
                self.state.registered.push(saved);
                self.state.form.reset();
                // Every patient gets its own identifier
                self.refresh_identifier().await;
            }
            Err(SubmitError::Invalid(errors)) => {
                let fields = errors.fields();
                let names: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
                tracing::debug!("Registration blocked by invalid fields: {}", names.join(", "));
                if let Some(index) = fields
                    .first()
                    .and_then(|first| FieldName::ALL.iter().position(|f| f == first))
                {
                    self.state.form.active_field_index = index;
                }
                self.status_message = Some(SubmitError::Invalid(errors).to_string());
            }
            Err(e) => self.push_error(e.to_string()),
        }
    }
}
