use thiserror::Error;

use crate::services::client::ClientError;

/// Form problems caught before any request is sent.
///
/// `Display` is the toast text shown to the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingDonorFields,

    #[error("Please enter a name")]
    MissingName,

    #[error("Please enter a phone number")]
    MissingPhoneNumber,

    #[error("Please fill in all required fields")]
    MissingAppointmentDetails,

    #[error("Please select an available date")]
    MissingAvailableDate,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Appointment date cannot be in the past")]
    AppointmentInPast,
}

/// Why a dialog submission did not go through
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("{title}: {source}")]
    Failed {
        title: &'static str,
        #[source]
        source: ClientError,
    },
}
