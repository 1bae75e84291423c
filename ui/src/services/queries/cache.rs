use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::services::client::{BloodGroup, Donor, DonorId};

/// Prefix shared by every donor query key
pub const DONORS_PREFIX: &str = "donors";

/// Cache key: operation name, plus the blood group or id for parameterised queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    AllDonors,
    ByBloodGroup(BloodGroup),
    Appointed,
    TempRejected,
    PermanentlyRejected,
    Donor(DonorId),
}

impl QueryKey {
    /// Path-like segments, e.g. `["donors", "bloodGroup", "A_pos"]`
    pub fn segments(&self) -> Vec<String> {
        let mut segments = vec![DONORS_PREFIX.to_string(), self.operation().to_string()];
        match self {
            QueryKey::ByBloodGroup(group) => segments.push(group.as_wire().to_string()),
            QueryKey::Donor(id) => segments.push(id.to_string()),
            _ => {}
        }
        segments
    }

    pub fn operation(&self) -> &'static str {
        match self {
            QueryKey::AllDonors => "all",
            QueryKey::ByBloodGroup(_) => "bloodGroup",
            QueryKey::Appointed => "appointed",
            QueryKey::TempRejected => "tempRejected",
            QueryKey::PermanentlyRejected => "permanentlyRejected",
            QueryKey::Donor(_) => "donor",
        }
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.segments().first().is_some_and(|first| first == prefix)
    }
}

/// Shared query cache; the only state visible to every view.
///
/// Invalidation removes entries and bumps a generation counter that views
/// watch to know when to refetch. A single donor is stored as a one-element
/// list under [`QueryKey::Donor`].
#[derive(Clone)]
pub struct QueryCache {
    entries: Arc<Mutex<LruCache<QueryKey, Vec<Donor>>>>,
    generation: Arc<AtomicU64>,
}

impl QueryCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Arc::new(Mutex::new(LruCache::new(capacity))),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<QueryKey, Vec<Donor>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &QueryKey) -> Option<Vec<Donor>> {
        self.lock().get(key).cloned()
    }

    pub fn put(&self, key: QueryKey, donors: Vec<Donor>) {
        self.lock().put(key, donors);
    }

    /// Stores a reply fetched at `generation`. Replies that raced an
    /// invalidation are dropped; returns whether the entry was stored.
    pub fn put_if_current(&self, key: QueryKey, donors: Vec<Donor>, generation: u64) -> bool {
        let mut entries = self.lock();
        if self.generation() != generation {
            debug!("Dropping stale reply for {:?}", key.segments());
            return false;
        }
        entries.put(key, donors);
        true
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry whose key starts with `prefix`; returns how many went
    pub fn invalidate_prefix(&self, prefix: &str) -> usize {
        let (removed, generation) = {
            let mut entries = self.lock();
            let stale: Vec<QueryKey> = entries
                .iter()
                .filter(|(key, _)| key.has_prefix(prefix))
                .map(|(key, _)| *key)
                .collect();
            for key in &stale {
                entries.pop(key);
            }
            // Bumped under the lock so `put_if_current` sees it
            (stale.len(), self.generation.fetch_add(1, Ordering::SeqCst) + 1)
        };

        debug!(
            "Invalidated {} cached queries under '{}' (generation {})",
            removed, prefix, generation
        );
        removed
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
