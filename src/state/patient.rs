//! Patient record built from a submitted form

use super::forms::FormValues;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier type assigned to every generated patient identifier
pub const IDENTIFIER_TYPE_UUID: &str = "05a29f94-c0ed-11e2-94be-8c13b969e334";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientIdentifier {
    pub identifier: String,
    pub identifier_type: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub preferred: bool,
    pub given_name: String,
    pub middle_name: String,
    pub family_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonAddress {
    pub address1: String,
    pub address2: String,
    pub city_village: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub names: Vec<PersonName>,
    pub gender: String,
    pub birthdate: Option<NaiveDate>,
    pub birthdate_estimated: bool,
    pub addresses: Vec<PersonAddress>,
}

/// Patient information handed to the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub identifiers: Vec<PatientIdentifier>,
    pub person: Person,
}

impl Patient {
    /// Map a form snapshot plus the session identifier and location
    pub fn from_form(values: &FormValues, identifier: &str, location: &str) -> Self {
        Self {
            identifiers: vec![PatientIdentifier {
                identifier: identifier.to_string(),
                identifier_type: IDENTIFIER_TYPE_UUID.to_string(),
                location: location.to_string(),
            }],
            person: Person {
                names: vec![PersonName {
                    preferred: true,
                    given_name: values.given_name.clone(),
                    middle_name: values.middle_name.clone(),
                    family_name: values.family_name.clone(),
                }],
                gender: values.gender.clone(),
                birthdate: values.birthdate,
                birthdate_estimated: values.birthdate_estimated,
                addresses: vec![PersonAddress {
                    address1: values.address1.clone(),
                    address2: values.address2.clone(),
                    city_village: values.city_village.clone(),
                    state_province: values.state_province.clone(),
                    postal_code: values.postal_code.clone(),
                    country: values.country.clone(),
                }],
            },
        }
    }

    /// Preferred name for display, "Unknown" when empty
    pub fn display_name(&self) -> String {
        let name = self
            .person
            .names
            .iter()
            .find(|n| n.preferred)
            .map(|n| {
                [&n.given_name, &n.middle_name, &n.family_name]
                    .iter()
                    .filter(|part| !part.is_empty())
                    .map(|part| part.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default();
        if name.is_empty() {
            "Unknown".to_string()
        } else {
            name
        }
    }
}

/// Result of a successful save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPatient {
    pub uuid: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{FieldUpdate, RegistrationForm};
    use pretty_assertions::assert_eq;

    fn submitted_values() -> FormValues {
        let mut form = RegistrationForm::new();
        form.set_values(FormValues::dummy());
        form.set_field(FieldUpdate::MiddleName("Q".into()));
        form.set_field(FieldUpdate::BirthdateEstimated(true));
        form.values().clone()
    }

    #[test]
    fn test_from_form_maps_every_section() {
        let values = submitted_values();
        let patient = Patient::from_form(&values, "100GEJ", "loc-1");

        let expected = Patient {
            identifiers: vec![PatientIdentifier {
                identifier: "100GEJ".into(),
                identifier_type: IDENTIFIER_TYPE_UUID.into(),
                location: "loc-1".into(),
            }],
            person: Person {
                names: vec![PersonName {
                    preferred: true,
                    given_name: "John".into(),
                    middle_name: "Q".into(),
                    family_name: "Smith".into(),
                }],
                gender: "M".into(),
                birthdate: NaiveDate::from_ymd_opt(2020, 1, 1),
                birthdate_estimated: true,
                addresses: vec![PersonAddress {
                    address1: "Bom Jesus Street".into(),
                    address2: String::new(),
                    city_village: "Recife".into(),
                    state_province: "Pernambuco".into(),
                    postal_code: "50030-310".into(),
                    country: "Brazil".into(),
                }],
            },
        };
        assert_eq!(patient, expected);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let patient = Patient::from_form(&submitted_values(), "id", "loc");
        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["identifiers"][0]["identifierType"], IDENTIFIER_TYPE_UUID);
        assert_eq!(json["person"]["names"][0]["givenName"], "John");
        assert_eq!(json["person"]["birthdate"], "2020-01-01");
        assert_eq!(json["person"]["birthdateEstimated"], true);
        assert_eq!(json["person"]["addresses"][0]["cityVillage"], "Recife");
    }

    #[test]
    fn test_display_name() {
        let patient = Patient::from_form(&submitted_values(), "id", "loc");
        assert_eq!(patient.display_name(), "John Q Smith");

        let unknown = Patient::from_form(&FormValues::default(), "id", "loc");
        assert_eq!(unknown.display_name(), "Unknown");
    }
}
