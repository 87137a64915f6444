//! Trait abstraction for the registry to enable mocking in tests

use crate::state::{Patient, SavedPatient};
use anyhow::Result;
use async_trait::async_trait;

/// Operations the registration screen needs from the patient registry
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryClientTrait: Send + Sync {
    /// Location uuid of the current session
    async fn current_location(&mut self) -> Result<String>;

    /// A fresh, unique patient identifier
    async fn next_identifier(&mut self) -> Result<String>;

    /// Store a new patient and return its uuid
    async fn save_patient(&mut self, patient: &Patient) -> Result<SavedPatient>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormValues, RegistrationForm};

    #[test]
    fn test_mock_save_patient_returns_uuid() {
        let mut mock = MockRegistryClientTrait::new();
        mock.expect_save_patient()
            .withf(|patient| patient.identifiers[0].identifier == "100GEJ")
            .times(1)
            .returning(|_| {
                Ok(SavedPatient {
                    uuid: "p-1".to_string(),
                })
            });

        let mut form = RegistrationForm::new();
        form.set_values(FormValues::dummy());
        let patient = Patient::from_form(form.values(), "100GEJ", "loc-1");

        let saved = tokio_test::block_on(mock.save_patient(&patient)).unwrap();
        assert_eq!(saved.uuid, "p-1");
    }

    #[test]
    fn test_mock_location_error_propagates() {
        let mut mock = MockRegistryClientTrait::new();
        mock.expect_current_location()
            .returning(|| Err(anyhow::anyhow!("offline")));

        let err = tokio_test::block_on(mock.current_location()).unwrap_err();
        assert_eq!(err.to_string(), "offline");
    }
}
