//! Post-call outcome to donor status mapping.
//!
//! The operator classifies a call as approved, rejected or not attended.
//! Approved and rejected outcomes become a status request; a call that was
//! not attended leaves the donor untouched and sends nothing. The service
//! still decides whether the transition is allowed.

use time::macros::format_description;
use time::Date;

use super::errors::ValidationError;
use crate::services::client::{DonorStatus, Timestamp};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CallResponse {
    #[default]
    Approved,
    Rejected,
    NotAttend,
}

impl CallResponse {
    pub const ALL: [CallResponse; 3] = [
        CallResponse::Approved,
        CallResponse::Rejected,
        CallResponse::NotAttend,
    ];

    pub fn value(self) -> &'static str {
        match self {
            CallResponse::Approved => "approved",
            CallResponse::Rejected => "rejected",
            CallResponse::NotAttend => "notAttend",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CallResponse::Approved => "Approved",
            CallResponse::Rejected => "Rejected",
            CallResponse::NotAttend => "Not Attend",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RejectionKind {
    #[default]
    Temporary,
    Permanent,
}

impl RejectionKind {
    pub const ALL: [RejectionKind; 2] = [RejectionKind::Temporary, RejectionKind::Permanent];

    pub fn value(self) -> &'static str {
        match self {
            RejectionKind::Temporary => "temporary",
            RejectionKind::Permanent => "permanent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RejectionKind::Temporary => "Temporary Rejected",
            RejectionKind::Permanent => "Permanent Rejected",
        }
    }
}

/// Controlled state of the post-call dialog
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PostCallForm {
    pub response: CallResponse,
    pub rejection: RejectionKind,
    /// `YYYY-MM-DD` as produced by a date input
    pub appointment_date: String,
    pub patient_name: String,
    /// `YYYY-MM-DD` as produced by a date input
    pub available_date: String,
}

/// What submitting the dialog amounts to
#[derive(Clone, PartialEq, Debug)]
pub enum PostCallOutcome {
    /// Not attended: close without a request
    NoChange,
    UpdateStatus(DonorStatus),
}

impl PostCallForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates the form and builds the status request.
    ///
    /// `today` is the operator's current date; appointments before it are refused.
    pub fn resolve(&self, today: Date) -> Result<PostCallOutcome, ValidationError> {
        match self.response {
            CallResponse::NotAttend => Ok(PostCallOutcome::NoChange),
            CallResponse::Approved => {
                let patient_name = self.patient_name.trim();
                if self.appointment_date.trim().is_empty() || patient_name.is_empty() {
                    return Err(ValidationError::MissingAppointmentDetails);
                }
                let appointment = parse_form_date(&self.appointment_date)?;
                if appointment < today {
                    return Err(ValidationError::AppointmentInPast);
                }
                Ok(PostCallOutcome::UpdateStatus(DonorStatus::Appointed {
                    appointment_date: form_timestamp(&self.appointment_date, appointment)?,
                    patient_name: patient_name.to_string(),
                }))
            }
            CallResponse::Rejected => match self.rejection {
                RejectionKind::Permanent => {
                    Ok(PostCallOutcome::UpdateStatus(DonorStatus::PermanentlyRejected))
                }
                RejectionKind::Temporary => {
                    if self.available_date.trim().is_empty() {
                        return Err(ValidationError::MissingAvailableDate);
                    }
                    let available = parse_form_date(&self.available_date)?;
                    Ok(PostCallOutcome::UpdateStatus(DonorStatus::TemporarilyRejected {
                        available_date: form_timestamp(&self.available_date, available)?,
                    }))
                }
            },
        }
    }
}

/// Parses the `YYYY-MM-DD` value of an `<input type="date">`
pub fn parse_form_date(value: &str) -> Result<Date, ValidationError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| ValidationError::InvalidDate(value.trim().to_string()))
}

/// Dates the service cannot represent are refused like malformed input
fn form_timestamp(value: &str, date: Date) -> Result<Timestamp, ValidationError> {
    Timestamp::from_date(date).ok_or_else(|| ValidationError::InvalidDate(value.trim().to_string()))
}
