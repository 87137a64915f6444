//! Error types for patient submission

use crate::state::ErrorMap;
use thiserror::Error;

/// Reasons a registration attempt did not produce a saved patient
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or more fields failed validation
    #[error("{} field(s) need attention", .0.len())]
    Invalid(ErrorMap),

    /// No patient identifier was obtained for this session
    #[error("no patient identifier available")]
    MissingIdentifier,

    /// The session location is unknown
    #[error("current location is unknown")]
    MissingLocation,

    /// The registry rejected or failed to store the record
    #[error("failed to save patient: {0}")]
    Save(String),
}
