use std::future::Future;
use std::sync::Arc;
use tracing::{error, info};

use super::cache::{QueryCache, QueryKey, DONORS_PREFIX};
use crate::services::client::{
    BloodGroup, ClientError, ClientResult, Donor, DonorBackend, DonorDetails, DonorId, DonorStatus,
};

/// Cached queries and invalidating mutations over a [`DonorBackend`].
///
/// Reads are served from the cache when present. Every successful write
/// drops all `donors` keys, so every list refetches on its next read.
#[derive(Clone)]
pub struct DonorQueries {
    backend: Arc<dyn DonorBackend>,
    cache: QueryCache,
}

/// Two handles are equal when they share a backend
impl PartialEq for DonorQueries {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.backend, &other.backend)
    }
}

impl DonorQueries {
    pub fn new(backend: Arc<dyn DonorBackend>, cache: QueryCache) -> Self {
        Self { backend, cache }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Current cache generation; changes after every successful mutation
    pub fn generation(&self) -> u64 {
        self.cache.generation()
    }

    /// Donors for any key; [`QueryKey::Donor`] yields a one-element list.
    ///
    /// A reply that arrives after a mutation invalidated the cache is
    /// returned to the caller but not cached.
    pub async fn fetch_list(&self, key: QueryKey) -> ClientResult<Vec<Donor>> {
        if let Some(donors) = self.cache.get(&key) {
            return Ok(donors);
        }

        let generation = self.cache.generation();
        let donors = match key {
            QueryKey::AllDonors => self.backend.get_all_donors().await,
            QueryKey::ByBloodGroup(group) => self.backend.get_donors_by_blood_group(group).await,
            QueryKey::Appointed => self.backend.get_all_appointed_donors().await,
            QueryKey::TempRejected => self.backend.get_all_temp_rejected_donors().await,
            QueryKey::PermanentlyRejected => {
                self.backend.get_all_permanently_rejected_donors().await
            }
            QueryKey::Donor(id) => self.backend.get_donor(id).await.map(|donor| vec![donor]),
        }
        .inspect_err(|e| error!("Query {:?} failed: {}", key.segments(), e))?;

        self.cache.put_if_current(key, donors.clone(), generation);
        Ok(donors)
    }

    pub async fn get_all_donors(&self) -> ClientResult<Vec<Donor>> {
        self.fetch_list(QueryKey::AllDonors).await
    }

    pub async fn get_donors_by_blood_group(&self, blood_group: BloodGroup) -> ClientResult<Vec<Donor>> {
        self.fetch_list(QueryKey::ByBloodGroup(blood_group)).await
    }

    pub async fn get_all_appointed_donors(&self) -> ClientResult<Vec<Donor>> {
        self.fetch_list(QueryKey::Appointed).await
    }

    pub async fn get_all_temp_rejected_donors(&self) -> ClientResult<Vec<Donor>> {
        self.fetch_list(QueryKey::TempRejected).await
    }

    pub async fn get_all_permanently_rejected_donors(&self) -> ClientResult<Vec<Donor>> {
        self.fetch_list(QueryKey::PermanentlyRejected).await
    }

    pub async fn get_donor(&self, id: DonorId) -> ClientResult<Donor> {
        self.fetch_list(QueryKey::Donor(id))
            .await?
            .pop()
            .ok_or(ClientError::NotFound { id: id.0 })
    }

    pub async fn add_donor(&self, details: &DonorDetails) -> ClientResult<DonorId> {
        self.mutate("addDonor", self.backend.add_donor(details)).await
    }

    pub async fn edit_donor(&self, id: DonorId, details: &DonorDetails) -> ClientResult<()> {
        self.mutate("editDonor", self.backend.edit_donor(id, details))
            .await
    }

    pub async fn delete_donor(&self, id: DonorId) -> ClientResult<()> {
        self.mutate("deleteDonor", self.backend.delete_donor(id)).await
    }

    pub async fn update_donor_status(&self, id: DonorId, new_status: &DonorStatus) -> ClientResult<()> {
        self.mutate(
            "updateDonorStatus",
            self.backend.update_donor_status(id, new_status),
        )
        .await
    }

    pub async fn mark_donor_as_donated(&self, id: DonorId) -> ClientResult<()> {
        self.mutate("markDonorAsDonated", self.backend.mark_donor_as_donated(id))
            .await
    }

    pub async fn mark_donor_as_not_donated(&self, id: DonorId) -> ClientResult<()> {
        self.mutate(
            "markDonorAsNotDonated",
            self.backend.mark_donor_as_not_donated(id),
        )
        .await
    }

    pub async fn record_call(&self, id: DonorId) -> ClientResult<()> {
        self.mutate("recordCall", self.backend.record_call(id)).await
    }

    async fn mutate<T>(
        &self,
        operation: &str,
        request: impl Future<Output = ClientResult<T>>,
    ) -> ClientResult<T> {
        match request.await {
            Ok(value) => {
                let removed = self.cache.invalidate_prefix(DONORS_PREFIX);
                info!("{} succeeded; {} cached queries invalidated", operation, removed);
                Ok(value)
            }
            Err(e) => {
                error!("{} failed: {}", operation, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::services::client::{InMemoryDonorBackend, Timestamp};

    /// Holds `get_all_donors` replies until the gate opens
    struct GatedBackend {
        inner: InMemoryDonorBackend,
        gate: Arc<Notify>,
    }

    #[async_trait(?Send)]
    impl DonorBackend for GatedBackend {
        async fn add_donor(&self, details: &DonorDetails) -> ClientResult<DonorId> {
            self.inner.add_donor(details).await
        }

        async fn edit_donor(&self, id: DonorId, details: &DonorDetails) -> ClientResult<()> {
            self.inner.edit_donor(id, details).await
        }

        async fn delete_donor(&self, id: DonorId) -> ClientResult<()> {
            self.inner.delete_donor(id).await
        }

        async fn get_all_donors(&self) -> ClientResult<Vec<Donor>> {
            let snapshot = self.inner.get_all_donors().await;
            self.gate.notified().await;
            snapshot
        }

        async fn get_donor(&self, id: DonorId) -> ClientResult<Donor> {
            self.inner.get_donor(id).await
        }

        async fn get_donors_by_blood_group(&self, blood_group: BloodGroup) -> ClientResult<Vec<Donor>> {
            self.inner.get_donors_by_blood_group(blood_group).await
        }

        async fn get_all_appointed_donors(&self) -> ClientResult<Vec<Donor>> {
            self.inner.get_all_appointed_donors().await
        }

        async fn get_all_temp_rejected_donors(&self) -> ClientResult<Vec<Donor>> {
            self.inner.get_all_temp_rejected_donors().await
        }

        async fn get_all_permanently_rejected_donors(&self) -> ClientResult<Vec<Donor>> {
            self.inner.get_all_permanently_rejected_donors().await
        }

        async fn update_donor_status(&self, id: DonorId, new_status: &DonorStatus) -> ClientResult<()> {
            self.inner.update_donor_status(id, new_status).await
        }

        async fn mark_donor_as_donated(&self, id: DonorId) -> ClientResult<()> {
            self.inner.mark_donor_as_donated(id).await
        }

        async fn mark_donor_as_not_donated(&self, id: DonorId) -> ClientResult<()> {
            self.inner.mark_donor_as_not_donated(id).await
        }

        async fn record_call(&self, id: DonorId) -> ClientResult<()> {
            self.inner.record_call(id).await
        }
    }

    fn setup() -> (Arc<InMemoryDonorBackend>, DonorQueries) {
        let backend = Arc::new(InMemoryDonorBackend::new());
        let queries = DonorQueries::new(backend.clone(), QueryCache::new(32));
        (backend, queries)
    }

    fn details(name: &str, blood_group: BloodGroup) -> DonorDetails {
        DonorDetails {
            name: name.to_string(),
            blood_group,
            phone_number: "0770000000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_reads_are_cached() {
        let (backend, queries) = setup();
        queries.add_donor(&details("Ruwan", BloodGroup::BPositive)).await.unwrap();
        let before = backend.request_count();

        assert_eq!(queries.get_all_donors().await.unwrap().len(), 1);
        assert_eq!(queries.get_all_donors().await.unwrap().len(), 1);
        assert_eq!(backend.request_count(), before + 1);
    }

    #[tokio::test]
    async fn test_blood_group_queries_are_keyed_separately() {
        let (backend, queries) = setup();
        queries.add_donor(&details("Ruwan", BloodGroup::BPositive)).await.unwrap();
        queries.add_donor(&details("Sita", BloodGroup::ONegative)).await.unwrap();
        let before = backend.request_count();

        let b_pos = queries.get_donors_by_blood_group(BloodGroup::BPositive).await.unwrap();
        let o_neg = queries.get_donors_by_blood_group(BloodGroup::ONegative).await.unwrap();
        assert_eq!(b_pos[0].name, "Ruwan");
        assert_eq!(o_neg[0].name, "Sita");
        assert_eq!(backend.request_count(), before + 2);
    }

    #[tokio::test]
    async fn test_mutation_invalidates_every_donor_view() {
        let (_backend, queries) = setup();
        let id = queries.add_donor(&details("Ruwan", BloodGroup::BPositive)).await.unwrap();

        assert_eq!(queries.get_all_donors().await.unwrap()[0].status, DonorStatus::Active);
        assert!(queries.get_all_appointed_donors().await.unwrap().is_empty());
        assert!(queries.get_donors_by_blood_group(BloodGroup::BPositive).await.is_ok());
        let generation = queries.generation();

        queries
            .update_donor_status(
                id,
                &DonorStatus::Appointed {
                    appointment_date: Timestamp(1),
                    patient_name: "Patient".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(queries.cache().is_empty());
        assert!(queries.generation() > generation);
        assert_eq!(queries.get_all_appointed_donors().await.unwrap().len(), 1);
        assert!(matches!(
            queries.get_all_donors().await.unwrap()[0].status,
            DonorStatus::Appointed { .. }
        ));
    }

    #[tokio::test]
    async fn test_read_overtaken_by_mutation_is_not_cached() {
        let gate = Arc::new(Notify::new());
        let backend = Arc::new(GatedBackend {
            inner: InMemoryDonorBackend::new(),
            gate: gate.clone(),
        });
        let queries = DonorQueries::new(backend, QueryCache::new(32));
        let id = queries.add_donor(&details("Ruwan", BloodGroup::BPositive)).await.unwrap();

        let (in_flight, updated) = tokio::join!(queries.get_all_donors(), async {
            let result = queries
                .update_donor_status(id, &DonorStatus::PermanentlyRejected)
                .await;
            gate.notify_one();
            result
        });
        updated.unwrap();
        // The caller still gets its reply, taken before the write
        assert_eq!(in_flight.unwrap()[0].status, DonorStatus::Active);
        assert!(!queries.cache().contains(&QueryKey::AllDonors));

        gate.notify_one();
        let donors = queries.get_all_donors().await.unwrap();
        assert_eq!(donors[0].status, DonorStatus::PermanentlyRejected);
        assert!(queries.cache().contains(&QueryKey::AllDonors));
    }

    #[tokio::test]
    async fn test_single_donor_shares_list_cache() {
        let (backend, queries) = setup();
        let id = queries.add_donor(&details("Ruwan", BloodGroup::BPositive)).await.unwrap();
        let before = backend.request_count();

        let listed = queries.fetch_list(QueryKey::Donor(id)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(queries.get_donor(id).await.unwrap(), listed[0]);
        assert_eq!(backend.request_count(), before + 1);

        assert_eq!(
            queries.get_donor(DonorId(404)).await,
            Err(ClientError::NotFound { id: 404 })
        );
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_cache() {
        let (_backend, queries) = setup();
        queries.add_donor(&details("Ruwan", BloodGroup::BPositive)).await.unwrap();
        queries.get_all_donors().await.unwrap();
        let generation = queries.generation();

        assert!(queries.delete_donor(DonorId(404)).await.is_err());
        assert!(queries.cache().contains(&QueryKey::AllDonors));
        assert_eq!(queries.generation(), generation);
    }

    #[tokio::test]
    async fn test_record_call_refreshes_counts() {
        let (_backend, queries) = setup();
        let id = queries.add_donor(&details("Ruwan", BloodGroup::BPositive)).await.unwrap();
        assert_eq!(queries.get_donor(id).await.unwrap().call_count, 0);

        queries.record_call(id).await.unwrap();

        let donor = queries.get_donor(id).await.unwrap();
        assert_eq!(donor.call_count, 1);
        assert!(donor.last_called_date.is_some());
    }
}
