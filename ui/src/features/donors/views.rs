//! Row models for the donor tables.
//!
//! Components render these as-is; sorting and date formatting happen here so
//! the rules can be tested without a browser.

use std::ops::RangeInclusive;
use time::OffsetDateTime;

use super::ordering::{sort_appointed, sort_default};
use crate::services::client::{BloodGroup, Donor, DonorId, DonorStatus, Timestamp};
use crate::services::queries::QueryKey;
use crate::utils::formatting::{format_date, format_optional_date};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusBadge {
    Active,
    Appointed,
    TempRejected,
    PermRejected,
}

impl StatusBadge {
    pub fn for_status(status: &DonorStatus) -> Self {
        match status {
            DonorStatus::Active => StatusBadge::Active,
            DonorStatus::Appointed { .. } => StatusBadge::Appointed,
            DonorStatus::TemporarilyRejected { .. } => StatusBadge::TempRejected,
            DonorStatus::PermanentlyRejected => StatusBadge::PermRejected,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusBadge::Active => "Active",
            StatusBadge::Appointed => "Appointed",
            StatusBadge::TempRejected => "Temp. Rejected",
            StatusBadge::PermRejected => "Perm. Rejected",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            StatusBadge::Active => "badge badge-active",
            StatusBadge::Appointed => "badge badge-appointed",
            StatusBadge::TempRejected => "badge badge-temp-rejected",
            StatusBadge::PermRejected => "badge badge-perm-rejected",
        }
    }
}

/// Outcome shown for a temporarily rejected donor
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RejectionBadge {
    Donated,
    Rejected,
}

impl RejectionBadge {
    pub fn label(self) -> &'static str {
        match self {
            RejectionBadge::Donated => "Donated",
            RejectionBadge::Rejected => "Rejected",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RejectionBadge::Donated => "badge badge-active",
            RejectionBadge::Rejected => "badge badge-temp-rejected",
        }
    }
}

/// A donation cooldown shows up as an available date roughly three months
/// out; anything else in the list was a rejection.
// TODO: drop this once the service records why a donor became temporarily rejected
pub fn is_donation_cooldown(
    available_date: Timestamp,
    now: OffsetDateTime,
    window: &RangeInclusive<i64>,
) -> bool {
    window.contains(&available_date.days_after(now))
}

#[derive(Clone, PartialEq, Debug)]
pub struct DonorRow {
    pub donor: Donor,
    pub blood_group: &'static str,
    pub status: StatusBadge,
}

#[derive(Clone, PartialEq, Debug)]
pub struct AppointedRow {
    pub donor: Donor,
    pub blood_group: &'static str,
    pub appointment_date: String,
    pub patient_name: String,
    pub last_called: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct TempRejectedRow {
    pub id: DonorId,
    pub name: String,
    pub blood_group: &'static str,
    pub phone_number: String,
    pub available_date: String,
    pub badge: RejectionBadge,
}

#[derive(Clone, PartialEq, Debug)]
pub struct PermanentRejectedRow {
    pub id: DonorId,
    pub name: String,
    pub blood_group: &'static str,
    pub phone_number: String,
}

/// Total donor list and blood-requirement results, in default order
pub fn donor_rows(donors: &[Donor]) -> Vec<DonorRow> {
    let mut donors = donors.to_vec();
    sort_default(&mut donors);
    donors
        .into_iter()
        .map(|donor| DonorRow {
            blood_group: donor.blood_group.label(),
            status: StatusBadge::for_status(&donor.status),
            donor,
        })
        .collect()
}

/// Appointed list, most in need of a call first
pub fn appointed_rows(donors: &[Donor]) -> Vec<AppointedRow> {
    let mut donors = donors.to_vec();
    sort_appointed(&mut donors);
    donors
        .into_iter()
        .map(|donor| {
            let (appointment_date, patient_name) = match &donor.status {
                DonorStatus::Appointed {
                    appointment_date,
                    patient_name,
                } => (format_date(*appointment_date), patient_name.clone()),
                _ => (String::new(), String::new()),
            };
            AppointedRow {
                blood_group: donor.blood_group.label(),
                appointment_date,
                patient_name,
                last_called: format_optional_date(donor.last_called_date, "Never"),
                donor,
            }
        })
        .collect()
}

pub fn temp_rejected_rows(
    donors: &[Donor],
    now: OffsetDateTime,
    donated_window: &RangeInclusive<i64>,
) -> Vec<TempRejectedRow> {
    let mut donors = donors.to_vec();
    sort_default(&mut donors);
    donors
        .into_iter()
        .map(|donor| {
            let available_date = match donor.status {
                DonorStatus::TemporarilyRejected { available_date } => available_date,
                _ => Timestamp(0),
            };
            let badge = if is_donation_cooldown(available_date, now, donated_window) {
                RejectionBadge::Donated
            } else {
                RejectionBadge::Rejected
            };
            TempRejectedRow {
                id: donor.id,
                blood_group: donor.blood_group.label(),
                available_date: format_date(available_date),
                badge,
                name: donor.name,
                phone_number: donor.phone_number,
            }
        })
        .collect()
}

pub fn permanent_rejected_rows(donors: &[Donor]) -> Vec<PermanentRejectedRow> {
    let mut donors = donors.to_vec();
    sort_default(&mut donors);
    donors
        .into_iter()
        .map(|donor| PermanentRejectedRow {
            id: donor.id,
            blood_group: donor.blood_group.label(),
            name: donor.name,
            phone_number: donor.phone_number,
        })
        .collect()
}

/// Blood-requirement selector
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BloodGroupFilter {
    #[default]
    Unselected,
    Any,
    Group(BloodGroup),
}

impl BloodGroupFilter {
    pub const ANY_VALUE: &'static str = "any";

    pub fn from_select_value(value: &str) -> Self {
        match value {
            "" => BloodGroupFilter::Unselected,
            Self::ANY_VALUE => BloodGroupFilter::Any,
            other => other
                .parse()
                .map(BloodGroupFilter::Group)
                .unwrap_or(BloodGroupFilter::Unselected),
        }
    }

    pub fn select_value(self) -> &'static str {
        match self {
            BloodGroupFilter::Unselected => "",
            BloodGroupFilter::Any => Self::ANY_VALUE,
            BloodGroupFilter::Group(group) => group.as_wire(),
        }
    }

    /// Query to run; nothing is fetched until a choice is made
    pub fn query_key(self) -> Option<QueryKey> {
        match self {
            BloodGroupFilter::Unselected => None,
            BloodGroupFilter::Any => Some(QueryKey::AllDonors),
            BloodGroupFilter::Group(group) => Some(QueryKey::ByBloodGroup(group)),
        }
    }
}
