//! Application state definitions

use super::forms::RegistrationForm;
use super::patient::SavedPatient;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The registration form being filled in
    pub form: RegistrationForm,

    // Values obtained from the registry at startup
    pub identifier: Option<String>,
    pub location: Option<String>,

    /// Patients saved during this run, newest last
    pub registered: Vec<SavedPatient>,

    /// Errors waiting to be shown in the error dialog
    error_queue: Vec<String>,
}

impl AppState {
    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }

    /// Whether the registry values needed to submit are present
    pub fn ready_to_submit(&self) -> bool {
        self.identifier.is_some() && self.location.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert!(!state.has_errors());
        assert!(state.current_error().is_none());
        assert!(!state.ready_to_submit());
        assert!(state.registered.is_empty());
    }

    #[test]
    fn test_errors_are_shown_in_order() {
        let mut state = AppState::default();
        state.push_error("first".into());
        state.push_error("second".into());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_dismiss_on_empty_queue_is_noop() {
        let mut state = AppState::default();
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_ready_to_submit_needs_identifier_and_location() {
        let mut state = AppState {
            identifier: Some("100GEJ".into()),
            ..Default::default()
        };
        assert!(!state.ready_to_submit());
        state.location = Some("loc".into());
        assert!(state.ready_to_submit());
    }
}
