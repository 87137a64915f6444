//! Form domain layer
//!
//! This module provides type-safe form handling for the registration view:
//! typed field updates, a pure reducer for the values, per-field validation
//! and the dropdown model.

mod field;
mod form_state;
mod select;
mod validation;
mod values;

pub use field::{FieldKind, FieldName, FieldUpdate};
pub use form_state::{Form, FormAction, RegistrationForm};
pub use select::SelectInput;
pub use validation::ErrorMap;
pub use values::{estimate_birthdate, FormValues, GENDER_SELECT};
