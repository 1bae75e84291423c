//! Dialog submissions.
//!
//! Each function validates its form, sends at most one request through the
//! data-access layer and returns the toast to show. Validation failures
//! return before anything is sent.

use time::Date;
use tracing::{error, warn};

use super::errors::{SubmitError, ValidationError};
use super::forms::DonorForm;
use super::status::{PostCallForm, PostCallOutcome};
use super::types::{ToastKind, ToastMessage};
use crate::services::client::{ClientError, Donor, DonorStatus};
use crate::services::queries::DonorQueries;
use crate::utils::formatting::format_date;

pub const ADD_FAILED: &str = "Failed to add donor";
pub const EDIT_FAILED: &str = "Failed to update donor";
pub const DELETE_FAILED: &str = "Failed to delete donor";
pub const STATUS_FAILED: &str = "Failed to update donor status";
pub const CALL_FAILED: &str = "Failed to record call";

fn failed(title: &'static str) -> impl FnOnce(ClientError) -> SubmitError {
    move |source| {
        error!(error = %source, "{}", title);
        SubmitError::Failed { title, source }
    }
}

impl SubmitError {
    /// Error toast for this failure
    pub fn toast(&self) -> ToastMessage {
        match self {
            SubmitError::Invalid(validation) => {
                warn!(%validation, "submission blocked");
                ToastMessage {
                    kind: ToastKind::Error,
                    title: validation.to_string(),
                    description: None,
                }
            }
            // Status changes share one generic message
            SubmitError::Failed { title, .. } if *title == STATUS_FAILED => ToastMessage {
                kind: ToastKind::Error,
                title: title.to_string(),
                description: None,
            },
            SubmitError::Failed { title, source } => {
                ToastMessage::error(*title, source.user_message())
            }
        }
    }
}

pub async fn submit_add_donor(
    queries: &DonorQueries,
    form: &DonorForm,
) -> Result<ToastMessage, SubmitError> {
    let details = form.validate_new()?;
    queries
        .add_donor(&details)
        .await
        .map_err(failed(ADD_FAILED))?;
    Ok(ToastMessage::success(
        "Donor added successfully!",
        format!("{} has been added to the donor list", details.name),
    ))
}

pub async fn submit_edit_donor(
    queries: &DonorQueries,
    donor: &Donor,
    form: &DonorForm,
) -> Result<ToastMessage, SubmitError> {
    let details = form.validate_edit()?;
    queries
        .edit_donor(donor.id, &details)
        .await
        .map_err(failed(EDIT_FAILED))?;
    Ok(ToastMessage::success(
        "Donor updated successfully!",
        format!("{}'s information has been updated", details.name),
    ))
}

pub async fn submit_delete_donor(
    queries: &DonorQueries,
    donor: &Donor,
) -> Result<ToastMessage, SubmitError> {
    queries
        .delete_donor(donor.id)
        .await
        .map_err(failed(DELETE_FAILED))?;
    Ok(ToastMessage::success(
        "Donor deleted successfully",
        format!("{} has been removed from the system", donor.name),
    ))
}

/// `Ok(None)` when the call was not attended and nothing was sent
pub async fn submit_post_call(
    queries: &DonorQueries,
    donor: &Donor,
    form: &PostCallForm,
    today: Date,
) -> Result<Option<ToastMessage>, SubmitError> {
    let status = match form.resolve(today)? {
        PostCallOutcome::NoChange => return Ok(None),
        PostCallOutcome::UpdateStatus(status) => status,
    };

    queries
        .update_donor_status(donor.id, &status)
        .await
        .map_err(failed(STATUS_FAILED))?;

    let toast = match status {
        DonorStatus::Appointed { .. } => ToastMessage::success(
            "Donor approved!",
            format!("{} has been marked as appointed", donor.name),
        ),
        DonorStatus::TemporarilyRejected { available_date } => ToastMessage::success(
            "Donor temporarily rejected",
            format!(
                "{} will be available after {}",
                donor.name,
                format_date(available_date)
            ),
        ),
        DonorStatus::PermanentlyRejected => ToastMessage::success(
            "Donor permanently rejected",
            format!("{} has been marked as permanently rejected", donor.name),
        ),
        DonorStatus::Active => ToastMessage::success(
            "Donor status updated",
            format!("{} is active", donor.name),
        ),
    };
    Ok(Some(toast))
}

pub async fn submit_mark_donated(
    queries: &DonorQueries,
    donor: &Donor,
) -> Result<ToastMessage, SubmitError> {
    queries
        .mark_donor_as_donated(donor.id)
        .await
        .map_err(failed(STATUS_FAILED))?;
    Ok(ToastMessage::success(
        "Donation recorded",
        format!("{} has been marked as donated", donor.name),
    ))
}

pub async fn submit_mark_not_donated(
    queries: &DonorQueries,
    donor: &Donor,
) -> Result<ToastMessage, SubmitError> {
    queries
        .mark_donor_as_not_donated(donor.id)
        .await
        .map_err(failed(STATUS_FAILED))?;
    Ok(ToastMessage::success(
        "Appointment cleared",
        format!("{} is back on the active list", donor.name),
    ))
}

/// Bumps the call count before the post-call dialog opens
pub async fn submit_record_call(queries: &DonorQueries, donor: &Donor) -> Result<(), SubmitError> {
    queries
        .record_call(donor.id)
        .await
        .map_err(failed(CALL_FAILED))
}

/// Validation failures are reported without touching the network
pub fn validation_toast(error: &ValidationError) -> ToastMessage {
    SubmitError::Invalid(error.clone()).toast()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use time::macros::date;

    use crate::features::donors::status::{CallResponse, RejectionKind};
    use crate::services::client::{BloodGroup, DonorId, InMemoryDonorBackend, Timestamp};
    use crate::services::queries::QueryCache;

    const TODAY: Date = date!(2026 - 05 - 20);

    fn setup() -> (Arc<InMemoryDonorBackend>, DonorQueries) {
        let backend = Arc::new(InMemoryDonorBackend::new());
        let queries = DonorQueries::new(backend.clone(), QueryCache::new(16));
        (backend, queries)
    }

    fn donor_form(name: &str, group: Option<BloodGroup>, phone: &str) -> DonorForm {
        DonorForm {
            name: name.to_string(),
            blood_group: group,
            phone_number: phone.to_string(),
        }
    }

    async fn added(queries: &DonorQueries) -> Donor {
        submit_add_donor(queries, &donor_form("Nadeesha", Some(BloodGroup::ONegative), "0771234567"))
            .await
            .unwrap();
        queries.get_donor(DonorId(1)).await.unwrap()
    }

    #[tokio::test]
    async fn test_add_donor_toast_and_validation() {
        let (backend, queries) = setup();

        let err = submit_add_donor(&queries, &donor_form("Nadeesha", None, "077"))
            .await
            .unwrap_err();
        assert_eq!(err, SubmitError::Invalid(ValidationError::MissingDonorFields));
        assert_eq!(err.toast().title, "Please fill in all fields");
        assert_eq!(backend.request_count(), 0);

        let toast = submit_add_donor(
            &queries,
            &donor_form(" Nadeesha ", Some(BloodGroup::ONegative), "0771234567"),
        )
        .await
        .unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(
            toast.description.as_deref(),
            Some("Nadeesha has been added to the donor list")
        );
        assert_eq!(backend.request_count(), 1);
    }

    #[tokio::test]
    async fn test_approved_without_patient_sends_nothing() {
        let (backend, queries) = setup();
        let donor = added(&queries).await;
        let before = backend.request_count();

        let form = PostCallForm {
            response: CallResponse::Approved,
            appointment_date: "2026-05-22".to_string(),
            ..PostCallForm::default()
        };
        let err = submit_post_call(&queries, &donor, &form, TODAY)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SubmitError::Invalid(ValidationError::MissingAppointmentDetails)
        );
        assert_eq!(err.toast().title, "Please fill in all required fields");
        assert_eq!(backend.request_count(), before);
        assert_eq!(queries.get_donor(donor.id).await.unwrap().status, DonorStatus::Active);
    }

    #[tokio::test]
    async fn test_post_call_outcomes() {
        let (backend, queries) = setup();
        let donor = added(&queries).await;

        let not_attended = PostCallForm {
            response: CallResponse::NotAttend,
            ..PostCallForm::default()
        };
        let before = backend.request_count();
        assert_eq!(
            submit_post_call(&queries, &donor, &not_attended, TODAY).await,
            Ok(None)
        );
        assert_eq!(backend.request_count(), before);

        let approved = PostCallForm {
            appointment_date: "2026-05-22".to_string(),
            patient_name: "S. Silva".to_string(),
            ..PostCallForm::default()
        };
        let toast = submit_post_call(&queries, &donor, &approved, TODAY)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(toast.title, "Donor approved!");
        assert_eq!(
            queries.get_donor(donor.id).await.unwrap().status,
            DonorStatus::Appointed {
                appointment_date: Timestamp::from_date(date!(2026 - 05 - 22)).unwrap(),
                patient_name: "S. Silva".to_string(),
            }
        );

        let temporary = PostCallForm {
            response: CallResponse::Rejected,
            rejection: RejectionKind::Temporary,
            available_date: "2026-08-01".to_string(),
            ..PostCallForm::default()
        };
        let toast = submit_post_call(&queries, &donor, &temporary, TODAY)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            toast.description.as_deref(),
            Some("Nadeesha will be available after Aug 1, 2026")
        );

        let permanent = PostCallForm {
            response: CallResponse::Rejected,
            rejection: RejectionKind::Permanent,
            ..PostCallForm::default()
        };
        let toast = submit_post_call(&queries, &donor, &permanent, TODAY)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(toast.title, "Donor permanently rejected");
        assert_eq!(
            queries.get_donor(donor.id).await.unwrap().status,
            DonorStatus::PermanentlyRejected
        );

        // A permanently rejected donor cannot be moved again
        let err = submit_post_call(&queries, &donor, &approved, TODAY)
            .await
            .unwrap_err();
        let toast = err.toast();
        assert_eq!(toast.title, STATUS_FAILED);
        assert_eq!(toast.description, None);
    }

    #[tokio::test]
    async fn test_edit_and_delete() {
        let (_backend, queries) = setup();
        let donor = added(&queries).await;

        let mut form = DonorForm::from_donor(&donor);
        form.phone_number = " ".to_string();
        let err = submit_edit_donor(&queries, &donor, &form).await.unwrap_err();
        assert_eq!(err.toast().title, "Please enter a phone number");

        form.name = "Nadeesha P.".to_string();
        form.phone_number = "0779999999".to_string();
        let toast = submit_edit_donor(&queries, &donor, &form).await.unwrap();
        assert_eq!(
            toast.description.as_deref(),
            Some("Nadeesha P.'s information has been updated")
        );

        let toast = submit_delete_donor(&queries, &donor).await.unwrap();
        assert_eq!(toast.title, "Donor deleted successfully");

        let err = submit_delete_donor(&queries, &donor).await.unwrap_err();
        let toast = err.toast();
        assert_eq!(toast.title, DELETE_FAILED);
        assert!(toast.description.is_some());
    }

    #[tokio::test]
    async fn test_record_call_then_donation() {
        let (_backend, queries) = setup();
        let donor = added(&queries).await;

        submit_record_call(&queries, &donor).await.unwrap();
        let called = queries.get_donor(donor.id).await.unwrap();
        assert_eq!(called.call_count, 1);
        assert!(called.last_called_date.is_some());

        // Only appointed donors can be marked
        assert!(submit_mark_donated(&queries, &donor).await.is_err());

        let approved = PostCallForm {
            appointment_date: "2026-05-21".to_string(),
            patient_name: "S. Silva".to_string(),
            ..PostCallForm::default()
        };
        submit_post_call(&queries, &donor, &approved, TODAY).await.unwrap();
        let toast = submit_mark_not_donated(&queries, &donor).await.unwrap();
        assert_eq!(toast.title, "Appointment cleared");
        assert_eq!(queries.get_donor(donor.id).await.unwrap().status, DonorStatus::Active);

        submit_post_call(&queries, &donor, &approved, TODAY).await.unwrap();
        submit_mark_donated(&queries, &donor).await.unwrap();
        assert!(matches!(
            queries.get_donor(donor.id).await.unwrap().status,
            DonorStatus::TemporarilyRejected { .. }
        ));
    }

    #[tokio::test]
    async fn test_unrepresentable_date_sends_nothing() {
        let (backend, queries) = setup();
        let donor = added(&queries).await;
        let before = backend.request_count();

        let form = PostCallForm {
            response: CallResponse::Rejected,
            rejection: RejectionKind::Temporary,
            available_date: "2300-01-01".to_string(),
            ..PostCallForm::default()
        };
        let err = submit_post_call(&queries, &donor, &form, TODAY)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            SubmitError::Invalid(ValidationError::InvalidDate("2300-01-01".to_string()))
        );
        assert_eq!(backend.request_count(), before);
    }

    #[test]
    fn test_validation_toast_has_no_description() {
        let toast = validation_toast(&ValidationError::MissingAvailableDate);
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Please select an available date");
        assert_eq!(toast.description, None);
    }
}
