//! Form field value objects

use chrono::NaiveDate;
use std::fmt;

/// Every input on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    GivenName,
    MiddleName,
    FamilyName,
    UnidentifiedPatient,
    Gender,
    Birthdate,
    BirthdateEstimated,
    YearsEstimated,
    MonthsEstimated,
    Address1,
    Address2,
    CityVillage,
    StateProvince,
    Country,
    PostalCode,
}

impl FieldName {
    /// All fields in tab order
    pub const ALL: [FieldName; 15] = [
        FieldName::GivenName,
        FieldName::MiddleName,
        FieldName::FamilyName,
        FieldName::UnidentifiedPatient,
        FieldName::Gender,
        FieldName::Birthdate,
        FieldName::BirthdateEstimated,
        FieldName::YearsEstimated,
        FieldName::MonthsEstimated,
        FieldName::Address1,
        FieldName::Address2,
        FieldName::CityVillage,
        FieldName::StateProvince,
        FieldName::Country,
        FieldName::PostalCode,
    ];

    /// Stable camelCase name, matching the patient record keys
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::GivenName => "givenName",
            FieldName::MiddleName => "middleName",
            FieldName::FamilyName => "familyName",
            FieldName::UnidentifiedPatient => "unidentifiedPatient",
            FieldName::Gender => "gender",
            FieldName::Birthdate => "birthdate",
            FieldName::BirthdateEstimated => "birthdateEstimated",
            FieldName::YearsEstimated => "yearsEstimated",
            FieldName::MonthsEstimated => "monthsEstimated",
            FieldName::Address1 => "address1",
            FieldName::Address2 => "address2",
            FieldName::CityVillage => "cityVillage",
            FieldName::StateProvince => "stateProvince",
            FieldName::Country => "country",
            FieldName::PostalCode => "postalCode",
        }
    }

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::GivenName => "Given Name",
            FieldName::MiddleName => "Middle Name",
            FieldName::FamilyName => "Family Name",
            FieldName::UnidentifiedPatient => "Name Unknown",
            FieldName::Gender => "Gender",
            FieldName::Birthdate => "Birth Date (YYYY-MM-DD)",
            FieldName::BirthdateEstimated => "Estimated",
            FieldName::YearsEstimated => "Years",
            FieldName::MonthsEstimated => "Months",
            FieldName::Address1 => "Address Line 1",
            FieldName::Address2 => "Address Line 2",
            FieldName::CityVillage => "City/Village",
            FieldName::StateProvince => "State/Province",
            FieldName::Country => "Country",
            FieldName::PostalCode => "Postal Code",
        }
    }

    /// How the field is edited and rendered
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::UnidentifiedPatient | FieldName::BirthdateEstimated => FieldKind::Checkbox,
            FieldName::Gender => FieldKind::Select,
            FieldName::Birthdate => FieldKind::Date,
            FieldName::YearsEstimated | FieldName::MonthsEstimated => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }

    /// Whether the field belongs to the contact info section
    pub fn is_contact(&self) -> bool {
        matches!(
            self,
            FieldName::Address1
                | FieldName::Address2
                | FieldName::CityVillage
                | FieldName::StateProvince
                | FieldName::Country
                | FieldName::PostalCode
        )
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input widget family for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox,
    Select,
    Date,
    Number,
}

/// A typed value for exactly one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    GivenName(String),
    MiddleName(String),
    FamilyName(String),
    UnidentifiedPatient(bool),
    Gender(String),
    Birthdate(Option<NaiveDate>),
    BirthdateEstimated(bool),
    YearsEstimated(i32),
    MonthsEstimated(i32),
    Address1(String),
    Address2(String),
    CityVillage(String),
    StateProvince(String),
    Country(String),
    PostalCode(String),
}

impl FieldUpdate {
    /// The field this update targets
    pub fn field(&self) -> FieldName {
        match self {
            FieldUpdate::GivenName(_) => FieldName::GivenName,
            FieldUpdate::MiddleName(_) => FieldName::MiddleName,
            FieldUpdate::FamilyName(_) => FieldName::FamilyName,
            FieldUpdate::UnidentifiedPatient(_) => FieldName::UnidentifiedPatient,
            FieldUpdate::Gender(_) => FieldName::Gender,
            FieldUpdate::Birthdate(_) => FieldName::Birthdate,
            FieldUpdate::BirthdateEstimated(_) => FieldName::BirthdateEstimated,
            FieldUpdate::YearsEstimated(_) => FieldName::YearsEstimated,
            FieldUpdate::MonthsEstimated(_) => FieldName::MonthsEstimated,
            FieldUpdate::Address1(_) => FieldName::Address1,
            FieldUpdate::Address2(_) => FieldName::Address2,
            FieldUpdate::CityVillage(_) => FieldName::CityVillage,
            FieldUpdate::StateProvince(_) => FieldName::StateProvince,
            FieldUpdate::Country(_) => FieldName::Country,
            FieldUpdate::PostalCode(_) => FieldName::PostalCode,
        }
    }

    /// Build a text update for a text-kind field.
    /// Returns None if the field does not hold a string.
    pub fn text(field: FieldName, value: String) -> Option<Self> {
        let update = match field {
            FieldName::GivenName => FieldUpdate::GivenName(value),
            FieldName::MiddleName => FieldUpdate::MiddleName(value),
            FieldName::FamilyName => FieldUpdate::FamilyName(value),
            FieldName::Gender => FieldUpdate::Gender(value),
            FieldName::Address1 => FieldUpdate::Address1(value),
            FieldName::Address2 => FieldUpdate::Address2(value),
            FieldName::CityVillage => FieldUpdate::CityVillage(value),
            FieldName::StateProvince => FieldUpdate::StateProvince(value),
            FieldName::Country => FieldUpdate::Country(value),
            FieldName::PostalCode => FieldUpdate::PostalCode(value),
            _ => return None,
        };
        Some(update)
    }
}
