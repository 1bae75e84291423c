use async_trait::async_trait;

use super::errors::ClientResult;
use super::types::{BloodGroup, Donor, DonorDetails, DonorId, DonorStatus};

/// RPC surface of the remote donor service.
///
/// Every mutation and every status transition is decided by the service;
/// implementations only carry requests across.
#[async_trait(?Send)] // Allow non-Send futures for WASM compatibility
pub trait DonorBackend {
    async fn add_donor(&self, details: &DonorDetails) -> ClientResult<DonorId>;

    async fn edit_donor(&self, id: DonorId, details: &DonorDetails) -> ClientResult<()>;

    async fn delete_donor(&self, id: DonorId) -> ClientResult<()>;

    async fn get_all_donors(&self) -> ClientResult<Vec<Donor>>;

    async fn get_donor(&self, id: DonorId) -> ClientResult<Donor>;

    async fn get_donors_by_blood_group(&self, blood_group: BloodGroup) -> ClientResult<Vec<Donor>>;

    async fn get_all_appointed_donors(&self) -> ClientResult<Vec<Donor>>;

    async fn get_all_temp_rejected_donors(&self) -> ClientResult<Vec<Donor>>;

    async fn get_all_permanently_rejected_donors(&self) -> ClientResult<Vec<Donor>>;

    async fn update_donor_status(&self, id: DonorId, new_status: &DonorStatus) -> ClientResult<()>;

    async fn mark_donor_as_donated(&self, id: DonorId) -> ClientResult<()>;

    async fn mark_donor_as_not_donated(&self, id: DonorId) -> ClientResult<()>;

    /// Increments the call count and stamps the last-called date
    async fn record_call(&self, id: DonorId) -> ClientResult<()>;
}
