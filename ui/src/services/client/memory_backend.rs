use async_trait::async_trait;
use std::cell::{RefCell, RefMut};
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::{info, warn};

use super::backend::DonorBackend;
use super::errors::{ClientError, ClientResult};
use super::types::{BloodGroup, Donor, DonorDetails, DonorId, DonorStatus, Timestamp};

/// Days a donor stays unavailable after giving blood
pub const DONATION_COOLDOWN_DAYS: i64 = 90;

#[derive(Default)]
struct MemoryState {
    donors: BTreeMap<DonorId, Donor>,
    next_id: u64,
    requests: usize,
}

/// Process-local stand-in for the donor service.
///
/// Mirrors the service rules the client relies on: sequential ids,
/// call bookkeeping, and the donated/not-donated transitions.
/// Single-threaded like the rest of the client.
pub struct InMemoryDonorBackend {
    state: RefCell<MemoryState>,
    clock: Rc<dyn Fn() -> Timestamp>,
}

impl InMemoryDonorBackend {
    pub fn new() -> Self {
        Self::with_clock(Rc::new(Timestamp::now))
    }

    pub fn with_clock(clock: Rc<dyn Fn() -> Timestamp>) -> Self {
        Self {
            state: RefCell::new(MemoryState {
                next_id: 1,
                ..MemoryState::default()
            }),
            clock,
        }
    }

    /// Seeds a donor record as-is
    pub fn insert(&self, donor: Donor) {
        let mut state = self.state.borrow_mut();
        state.next_id = state.next_id.max(donor.id.0 + 1);
        state.donors.insert(donor.id, donor);
    }

    /// Number of RPC calls served so far
    pub fn request_count(&self) -> usize {
        self.state.borrow().requests
    }

    fn serve(&self) -> RefMut<'_, MemoryState> {
        let mut state = self.state.borrow_mut();
        state.requests += 1;
        state
    }

    fn list(&self, keep: impl Fn(&Donor) -> bool) -> Vec<Donor> {
        self.serve()
            .donors
            .values()
            .filter(|donor| keep(donor))
            .cloned()
            .collect()
    }

    fn update(&self, id: DonorId, apply: impl FnOnce(&mut Donor) -> ClientResult<()>) -> ClientResult<()> {
        let mut state = self.serve();
        let donor = state
            .donors
            .get_mut(&id)
            .ok_or(ClientError::NotFound { id: id.0 })?;
        apply(donor)
    }
}

impl Default for InMemoryDonorBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_details(operation: &str, details: &DonorDetails) -> ClientResult<()> {
    if details.name.trim().is_empty() || details.phone_number.trim().is_empty() {
        return Err(ClientError::rejected(
            operation,
            "Name and phone number are required",
        ));
    }
    Ok(())
}

#[async_trait(?Send)]
impl DonorBackend for InMemoryDonorBackend {
    async fn add_donor(&self, details: &DonorDetails) -> ClientResult<DonorId> {
        validate_details("addDonor", details)?;
        let mut state = self.serve();
        let id = DonorId(state.next_id);
        state.next_id += 1;
        state.donors.insert(
            id,
            Donor {
                id,
                name: details.name.clone(),
                blood_group: details.blood_group,
                phone_number: details.phone_number.clone(),
                status: DonorStatus::Active,
                call_count: 0,
                last_called_date: None,
            },
        );
        info!("Added donor {} ({})", id, details.name);
        Ok(id)
    }

    async fn edit_donor(&self, id: DonorId, details: &DonorDetails) -> ClientResult<()> {
        validate_details("editDonor", details)?;
        self.update(id, |donor| {
            donor.name = details.name.clone();
            donor.blood_group = details.blood_group;
            donor.phone_number = details.phone_number.clone();
            Ok(())
        })
    }

    async fn delete_donor(&self, id: DonorId) -> ClientResult<()> {
        match self.serve().donors.remove(&id) {
            Some(_) => Ok(()),
            None => Err(ClientError::NotFound { id: id.0 }),
        }
    }

    async fn get_all_donors(&self) -> ClientResult<Vec<Donor>> {
        Ok(self.list(|_| true))
    }

    async fn get_donor(&self, id: DonorId) -> ClientResult<Donor> {
        self.serve()
            .donors
            .get(&id)
            .cloned()
            .ok_or(ClientError::NotFound { id: id.0 })
    }

    async fn get_donors_by_blood_group(&self, blood_group: BloodGroup) -> ClientResult<Vec<Donor>> {
        Ok(self.list(|donor| donor.blood_group == blood_group))
    }

    async fn get_all_appointed_donors(&self) -> ClientResult<Vec<Donor>> {
        Ok(self.list(|donor| matches!(donor.status, DonorStatus::Appointed { .. })))
    }

    async fn get_all_temp_rejected_donors(&self) -> ClientResult<Vec<Donor>> {
        Ok(self.list(|donor| matches!(donor.status, DonorStatus::TemporarilyRejected { .. })))
    }

    async fn get_all_permanently_rejected_donors(&self) -> ClientResult<Vec<Donor>> {
        Ok(self.list(|donor| donor.status == DonorStatus::PermanentlyRejected))
    }

    async fn update_donor_status(&self, id: DonorId, new_status: &DonorStatus) -> ClientResult<()> {
        self.update(id, |donor| {
            if donor.status == DonorStatus::PermanentlyRejected {
                warn!("Refusing status change for permanently rejected donor {}", id);
                return Err(ClientError::rejected(
                    "updateDonorStatus",
                    "Donor is permanently rejected",
                ));
            }
            donor.status = new_status.clone();
            Ok(())
        })
    }

    async fn mark_donor_as_donated(&self, id: DonorId) -> ClientResult<()> {
        let available_date = (self.clock)().plus_days(DONATION_COOLDOWN_DAYS);
        self.update(id, |donor| match donor.status {
            DonorStatus::Appointed { .. } => {
                donor.status = DonorStatus::TemporarilyRejected { available_date };
                Ok(())
            }
            _ => Err(ClientError::rejected(
                "markDonorAsDonated",
                "Donor has no appointment",
            )),
        })
    }

    async fn mark_donor_as_not_donated(&self, id: DonorId) -> ClientResult<()> {
        self.update(id, |donor| match donor.status {
            DonorStatus::Appointed { .. } => {
                donor.status = DonorStatus::Active;
                Ok(())
            }
            _ => Err(ClientError::rejected(
                "markDonorAsNotDonated",
                "Donor has no appointment",
            )),
        })
    }

    async fn record_call(&self, id: DonorId) -> ClientResult<()> {
        let now = (self.clock)();
        self.update(id, |donor| {
            donor.call_count += 1;
            donor.last_called_date = Some(now);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn details(name: &str, blood_group: BloodGroup) -> DonorDetails {
        DonorDetails {
            name: name.to_string(),
            blood_group,
            phone_number: "0711111111".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_donors_start_active() {
        let backend = InMemoryDonorBackend::new();
        let first = backend.add_donor(&details("Kamal", BloodGroup::APositive)).await.unwrap();
        let second = backend.add_donor(&details("Mala", BloodGroup::ONegative)).await.unwrap();
        assert_eq!(first, DonorId(1));
        assert_eq!(second, DonorId(2));

        let donor = backend.get_donor(second).await.unwrap();
        assert_eq!(donor.status, DonorStatus::Active);
        assert_eq!(donor.call_count, 0);
        assert_eq!(donor.last_called_date, None);
    }

    #[tokio::test]
    async fn test_record_call_increments_and_stamps() {
        let tick = Rc::new(Cell::new(100));
        let clock_tick = tick.clone();
        let backend = InMemoryDonorBackend::with_clock(Rc::new(move || Timestamp(clock_tick.get())));
        let id = backend.add_donor(&details("Kamal", BloodGroup::APositive)).await.unwrap();

        backend.record_call(id).await.unwrap();
        tick.set(250);
        backend.record_call(id).await.unwrap();

        let donor = backend.get_donor(id).await.unwrap();
        assert_eq!(donor.call_count, 2);
        assert_eq!(donor.last_called_date, Some(Timestamp(250)));
    }

    #[tokio::test]
    async fn test_donated_moves_to_cooldown() {
        let backend = InMemoryDonorBackend::with_clock(Rc::new(|| Timestamp(0)));
        let id = backend.add_donor(&details("Kamal", BloodGroup::APositive)).await.unwrap();

        assert!(backend.mark_donor_as_donated(id).await.is_err());

        backend
            .update_donor_status(
                id,
                &DonorStatus::Appointed {
                    appointment_date: Timestamp(5),
                    patient_name: "Patient".to_string(),
                },
            )
            .await
            .unwrap();
        backend.mark_donor_as_donated(id).await.unwrap();

        let donor = backend.get_donor(id).await.unwrap();
        assert_eq!(
            donor.status,
            DonorStatus::TemporarilyRejected {
                available_date: Timestamp(0).plus_days(DONATION_COOLDOWN_DAYS)
            }
        );
        assert_eq!(backend.get_all_temp_rejected_donors().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_permanent_rejection_is_final() {
        let backend = InMemoryDonorBackend::new();
        let id = backend.add_donor(&details("Kamal", BloodGroup::APositive)).await.unwrap();
        backend
            .update_donor_status(id, &DonorStatus::PermanentlyRejected)
            .await
            .unwrap();

        let err = backend
            .update_donor_status(id, &DonorStatus::Active)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Rejected { .. }));
    }

    #[tokio::test]
    async fn test_missing_donor_errors() {
        let backend = InMemoryDonorBackend::new();
        assert_eq!(
            backend.delete_donor(DonorId(9)).await,
            Err(ClientError::NotFound { id: 9 })
        );
        assert_eq!(backend.request_count(), 1);
    }
}
