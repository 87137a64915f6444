//! Validation rules for the registration form
//!
//! Rules are evaluated per field against a snapshot of the form values and
//! the current time. Failures are reported as data in an [`ErrorMap`], never
//! as `Err`.

use super::field::FieldName;
use super::values::{is_known_gender, FormValues};
use chrono::{DateTime, TimeZone};
use std::collections::BTreeMap;

pub const GIVEN_NAME_REQUIRED: &str = "Given name is required";
pub const FAMILY_NAME_REQUIRED: &str = "Family name is required";
pub const GENDER_REQUIRED: &str = "Gender is required";
pub const GENDER_UNSPECIFIED: &str = "Gender is unspecified";
pub const BIRTHDATE_REQUIRED: &str = "Birthdate is required";
pub const BIRTHDATE_IN_FUTURE: &str = "Birthdate cannot be in the future";
pub const YEARS_NEGATIVE: &str = "Years cannot be less than 0";
pub const MONTHS_NEGATIVE: &str = "Months cannot be less than 0";

/// Field name to message. An absent key means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Replace the entry for one field with a fresh rule result
    pub fn set(&mut self, field: FieldName, error: Option<String>) {
        match error {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> Vec<FieldName> {
        self.0.keys().copied().collect()
    }
}

/// Evaluate the rule for a single field.
///
/// Fields without a rule always pass. Each field reports at most one message.
pub fn validate_field<Tz: TimeZone>(
    values: &FormValues,
    field: FieldName,
    now: &DateTime<Tz>,
) -> Option<String> {
    let message = match field {
        FieldName::GivenName if values.given_name.is_empty() => GIVEN_NAME_REQUIRED,
        FieldName::FamilyName if values.family_name.is_empty() => FAMILY_NAME_REQUIRED,
        FieldName::Gender if values.gender.is_empty() => GENDER_REQUIRED,
        FieldName::Gender if !is_known_gender(&values.gender) => GENDER_UNSPECIFIED,
        FieldName::Birthdate => match values.birthdate {
            None => BIRTHDATE_REQUIRED,
            Some(date) if date > now.date_naive() => BIRTHDATE_IN_FUTURE,
            Some(_) => return None,
        },
        FieldName::YearsEstimated if values.years_estimated < 0 => YEARS_NEGATIVE,
        FieldName::MonthsEstimated if values.months_estimated < 0 => MONTHS_NEGATIVE,
        _ => return None,
    };
    Some(message.to_string())
}

/// Evaluate every rule. An empty map means the form may be submitted.
pub fn validate<Tz: TimeZone>(values: &FormValues, now: &DateTime<Tz>) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for field in FieldName::ALL {
        errors.set(field, validate_field(values, field, now));
    }
    errors
}
