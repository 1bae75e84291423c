//! Client-side orderings for the donor lists.
//!
//! Both orderings run over the full fetched set on every render; sorting is
//! stable so equal keys keep the order the service returned.

use std::cmp::Ordering;

use crate::services::client::Donor;

/// Case-insensitive name, then blood-group precedence (A+, A-, B+, B-, AB+, AB-, O+, O-)
pub fn default_order(a: &Donor, b: &Donor) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.blood_group.precedence().cmp(&b.blood_group.precedence()))
}

/// Donors most in need of a call first: never called, then oldest
/// last call, then fewest calls.
pub fn appointed_order(a: &Donor, b: &Donor) -> Ordering {
    // None < Some, so never-called donors lead
    a.last_called_date
        .cmp(&b.last_called_date)
        .then_with(|| a.call_count.cmp(&b.call_count))
}

pub fn sort_default(donors: &mut [Donor]) {
    donors.sort_by(default_order);
}

pub fn sort_appointed(donors: &mut [Donor]) {
    donors.sort_by(appointed_order);
}
