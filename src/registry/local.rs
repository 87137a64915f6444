//! File-backed registry for running without a remote server
//!
//! Each registered patient is written as pretty JSON to
//! `<data_dir>/patients/<uuid>.json`.

use super::traits::RegistryClientTrait;
use crate::state::{Patient, SavedPatient};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Length of the random part of a generated identifier
const IDENTIFIER_LEN: usize = 10;

/// A patient as persisted on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPatient {
    pub uuid: String,
    pub registered_at: DateTime<Utc>,
    #[serde(flatten)]
    pub patient: Patient,
}

/// Registry storing patients in a local directory
pub struct LocalRegistry {
    location: Option<String>,
    identifier_prefix: String,
    data_dir: PathBuf,
}

impl LocalRegistry {
    pub fn new(location: Option<String>, identifier_prefix: &str, data_dir: PathBuf) -> Self {
        Self {
            location,
            identifier_prefix: identifier_prefix.to_string(),
            data_dir,
        }
    }

    fn patients_dir(&self) -> PathBuf {
        self.data_dir.join("patients")
    }

    fn patient_path(&self, uuid: &str) -> PathBuf {
        self.patients_dir().join(format!("{uuid}.json"))
    }

    /// Read back a stored patient
    #[allow(dead_code)]
    pub async fn load_patient(&self, uuid: &str) -> Result<StoredPatient> {
        read_stored(&self.patient_path(uuid)).await
    }
}

async fn read_stored(path: &Path) -> Result<StoredPatient> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(serde_json::from_str(&content)?)
}

#[async_trait]
impl RegistryClientTrait for LocalRegistry {
    async fn current_location(&mut self) -> Result<String> {
        self.location
            .clone()
            .ok_or_else(|| anyhow!("No session location configured"))
    }

    async fn next_identifier(&mut self) -> Result<String> {
        let random = Uuid::new_v4().simple().to_string().to_uppercase();
        Ok(format!(
            "{}{}",
            self.identifier_prefix,
            &random[..IDENTIFIER_LEN]
        ))
    }

    async fn save_patient(&mut self, patient: &Patient) -> Result<SavedPatient> {
        let dir = self.patients_dir();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let uuid = Uuid::new_v4().to_string();
        let stored = StoredPatient {
            uuid: uuid.clone(),
            registered_at: Utc::now(),
            patient: patient.clone(),
        };
        let path = self.patient_path(&uuid);
        let content = serde_json::to_string_pretty(&stored)?;
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!("Saved patient {uuid} to {}", path.display());
        Ok(SavedPatient { uuid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormValues, RegistrationForm};
    use pretty_assertions::assert_eq;

    fn sample_patient() -> Patient {
        let mut form = RegistrationForm::new();
        form.set_values(FormValues::dummy());
        Patient::from_form(form.values(), "100GEJ", "loc-1")
    }

    #[tokio::test]
    async fn test_current_location_configured() {
        let mut registry = LocalRegistry::new(Some("loc-1".into()), "", PathBuf::from("."));
        assert_eq!(registry.current_location().await.unwrap(), "loc-1");
    }

    #[tokio::test]
    async fn test_current_location_missing() {
        let mut registry = LocalRegistry::new(None, "", PathBuf::from("."));
        assert!(registry.current_location().await.is_err());
    }

    #[tokio::test]
    async fn test_identifiers_are_prefixed_and_unique() {
        let mut registry = LocalRegistry::new(None, "MRN-", PathBuf::from("."));
        let first = registry.next_identifier().await.unwrap();
        let second = registry.next_identifier().await.unwrap();
        assert!(first.starts_with("MRN-"));
        assert_eq!(first.len(), "MRN-".len() + IDENTIFIER_LEN);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_save_patient_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = LocalRegistry::new(None, "", dir.path().to_path_buf());
        let patient = sample_patient();

        let saved = registry.save_patient(&patient).await.unwrap();

        let path = dir
            .path()
            .join("patients")
            .join(format!("{}.json", saved.uuid));
        assert!(path.exists());

        let stored = registry.load_patient(&saved.uuid).await.unwrap();
        assert_eq!(stored.uuid, saved.uuid);
        assert_eq!(stored.patient, patient);
    }

    #[tokio::test]
    async fn test_saved_json_is_flat_patient_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = LocalRegistry::new(None, "", dir.path().to_path_buf());
        let saved = registry.save_patient(&sample_patient()).await.unwrap();

        let path = registry.patient_path(&saved.uuid);
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["uuid"], saved.uuid.as_str());
        assert!(json.get("registeredAt").is_some());
        assert_eq!(json["person"]["gender"], "M");
    }

    #[tokio::test]
    async fn test_load_missing_patient_fails() {
        let dir = tempfile::tempdir().unwrap();
        let registry = LocalRegistry::new(None, "", dir.path().to_path_buf());
        assert!(registry.load_patient("nope").await.is_err());
    }
}
