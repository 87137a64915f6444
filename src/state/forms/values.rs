//! Registration form values

use super::field::{FieldName, FieldUpdate};
use super::select::SelectInput;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Gender dropdown labels. The stored value is the first character.
pub const GENDER_OPTIONS: [&str; 4] = ["Male", "Female", "Other", "Unknown"];

/// The gender dropdown
pub const GENDER_SELECT: SelectInput = SelectInput::new("gender", &GENDER_OPTIONS);

/// Full set of patient-registration inputs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub given_name: String,
    pub middle_name: String,
    pub family_name: String,
    pub unidentified_patient: bool,
    pub gender: String,
    pub birthdate: Option<NaiveDate>,
    pub years_estimated: i32,
    pub months_estimated: i32,
    pub birthdate_estimated: bool,
    pub address1: String,
    pub address2: String,
    pub city_village: String,
    pub state_province: String,
    pub country: String,
    pub postal_code: String,
}

impl FormValues {
    /// Write one field without any dependency rules
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::GivenName(v) => self.given_name = v,
            FieldUpdate::MiddleName(v) => self.middle_name = v,
            FieldUpdate::FamilyName(v) => self.family_name = v,
            FieldUpdate::UnidentifiedPatient(v) => self.unidentified_patient = v,
            FieldUpdate::Gender(v) => self.gender = v,
            FieldUpdate::Birthdate(v) => self.birthdate = v,
            FieldUpdate::BirthdateEstimated(v) => self.birthdate_estimated = v,
            FieldUpdate::YearsEstimated(v) => self.years_estimated = v,
            FieldUpdate::MonthsEstimated(v) => self.months_estimated = v,
            FieldUpdate::Address1(v) => self.address1 = v,
            FieldUpdate::Address2(v) => self.address2 = v,
            FieldUpdate::CityVillage(v) => self.city_village = v,
            FieldUpdate::StateProvince(v) => self.state_province = v,
            FieldUpdate::Country(v) => self.country = v,
            FieldUpdate::PostalCode(v) => self.postal_code = v,
        }
    }

    /// Text content of a string-valued field, None for other kinds
    pub fn text(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::GivenName => &self.given_name,
            FieldName::MiddleName => &self.middle_name,
            FieldName::FamilyName => &self.family_name,
            FieldName::Gender => &self.gender,
            FieldName::Address1 => &self.address1,
            FieldName::Address2 => &self.address2,
            FieldName::CityVillage => &self.city_village,
            FieldName::StateProvince => &self.state_province,
            FieldName::Country => &self.country,
            FieldName::PostalCode => &self.postal_code,
            _ => return None,
        };
        Some(value)
    }

    /// Value of a checkbox field
    pub fn flag(&self, field: FieldName) -> Option<bool> {
        match field {
            FieldName::UnidentifiedPatient => Some(self.unidentified_patient),
            FieldName::BirthdateEstimated => Some(self.birthdate_estimated),
            _ => None,
        }
    }

    /// Value of a number field
    pub fn number(&self, field: FieldName) -> Option<i32> {
        match field {
            FieldName::YearsEstimated => Some(self.years_estimated),
            FieldName::MonthsEstimated => Some(self.months_estimated),
            _ => None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, field: FieldName) -> String {
        if let Some(text) = self.text(field) {
            return text.to_string();
        }
        if let Some(flag) = self.flag(field) {
            return if flag { "[x]" } else { "[ ]" }.to_string();
        }
        if let Some(n) = self.number(field) {
            return n.to_string();
        }
        self.birthdate
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Sample values used to pre-fill the form during demos and testing
    pub fn dummy() -> Vec<FieldUpdate> {
        vec![
            FieldUpdate::GivenName("John".into()),
            FieldUpdate::MiddleName(String::new()),
            FieldUpdate::FamilyName("Smith".into()),
            FieldUpdate::UnidentifiedPatient(false),
            FieldUpdate::Gender("M".into()),
            FieldUpdate::Birthdate(NaiveDate::from_ymd_opt(2020, 1, 1)),
            FieldUpdate::YearsEstimated(1),
            FieldUpdate::MonthsEstimated(2),
            FieldUpdate::BirthdateEstimated(false),
            FieldUpdate::Address1("Bom Jesus Street".into()),
            FieldUpdate::Address2(String::new()),
            FieldUpdate::CityVillage("Recife".into()),
            FieldUpdate::StateProvince("Pernambuco".into()),
            FieldUpdate::Country("Brazil".into()),
            FieldUpdate::PostalCode("50030-310".into()),
        ]
    }
}

/// Whether a gender code is one of the dropdown's values
pub fn is_known_gender(code: &str) -> bool {
    GENDER_SELECT.selected_index(code).is_some()
}

/// Approximate a birthdate from an age given in years and months.
/// Returns None for negative ages or dates before the calendar start.
pub fn estimate_birthdate(years: i32, months: i32, today: NaiveDate) -> Option<NaiveDate> {
    if years < 0 || months < 0 {
        return None;
    }
    let total = (years as u32).checked_mul(12)?.checked_add(months as u32)?;
    today.checked_sub_months(Months::new(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_matches_initial_form() {
        let values = FormValues::default();
        assert_eq!(values.given_name, "");
        assert!(!values.unidentified_patient);
        assert_eq!(values.gender, "");
        assert!(values.birthdate.is_none());
        assert_eq!(values.years_estimated, 0);
        assert_eq!(values.months_estimated, 0);
        assert!(!values.birthdate_estimated);
    }

    #[test]
    fn test_apply_writes_only_target_field() {
        let mut values = FormValues::default();
        values.apply(FieldUpdate::Country("Kenya".into()));
        assert_eq!(values.country, "Kenya");
        assert_eq!(
            values,
            FormValues {
                country: "Kenya".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_apply_unidentified_does_not_clear_names() {
        let mut values = FormValues {
            given_name: "Jane".into(),
            ..Default::default()
        };
        values.apply(FieldUpdate::UnidentifiedPatient(true));
        assert_eq!(values.given_name, "Jane");
    }

    #[test]
    fn test_display_values() {
        let values = FormValues {
            given_name: "Jane".into(),
            unidentified_patient: true,
            years_estimated: 4,
            birthdate: Some(ymd(2020, 5, 10)),
            ..Default::default()
        };
        assert_eq!(values.display_value(FieldName::GivenName), "Jane");
        assert_eq!(values.display_value(FieldName::UnidentifiedPatient), "[x]");
        assert_eq!(values.display_value(FieldName::BirthdateEstimated), "[ ]");
        assert_eq!(values.display_value(FieldName::YearsEstimated), "4");
        assert_eq!(values.display_value(FieldName::Birthdate), "2020-05-10");
    }

    #[test]
    fn test_missing_birthdate_displays_empty() {
        let values = FormValues::default();
        assert_eq!(values.display_value(FieldName::Birthdate), "");
    }

    #[test]
    fn test_gender_codes_from_labels() {
        let codes: Vec<String> = GENDER_OPTIONS
            .iter()
            .map(|l| SelectInput::value_for(l))
            .collect();
        assert_eq!(codes, vec!["M", "F", "O", "U"]);
        assert!(is_known_gender("U"));
        assert!(!is_known_gender("X"));
        assert!(!is_known_gender(""));
    }

    #[test]
    fn test_dummy_values_cover_every_field() {
        let mut fields: Vec<FieldName> = FormValues::dummy().iter().map(|u| u.field()).collect();
        fields.sort();
        fields.dedup();
        assert_eq!(fields.len(), FieldName::ALL.len());
    }

    #[test]
    fn test_estimate_birthdate() {
        let today = ymd(2024, 6, 15);
        assert_eq!(estimate_birthdate(0, 0, today), Some(today));
        assert_eq!(estimate_birthdate(2, 3, today), Some(ymd(2022, 3, 15)));
        assert_eq!(estimate_birthdate(0, 18, today), Some(ymd(2022, 12, 15)));
    }

    #[test]
    fn test_estimate_birthdate_rejects_negative_age() {
        let today = ymd(2024, 6, 15);
        assert!(estimate_birthdate(-1, 0, today).is_none());
        assert!(estimate_birthdate(0, -1, today).is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(FormValues::default()).unwrap();
        assert!(json.get("givenName").is_some());
        assert!(json.get("unidentifiedPatient").is_some());
        assert!(json.get("given_name").is_none());
    }
}
