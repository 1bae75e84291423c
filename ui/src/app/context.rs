use dioxus::prelude::*;

use crate::features::donors::{RegistryAction, RegistryState, ToastMessage};
use crate::services::client::{ClientResult, Donor};
use crate::services::config::RegistryConfig;
use crate::services::queries::{DonorQueries, QueryKey};

/// Shared by every view below the auth gate
#[derive(Clone)]
pub struct RegistryContext {
    pub queries: DonorQueries,
    pub config: RegistryConfig,
    pub state: Signal<RegistryState>,
    pub dispatch: EventHandler<RegistryAction>,
    /// Mirrors the query cache generation; list resources subscribe to it
    pub epoch: Signal<u64>,
}

impl RegistryContext {
    pub fn notify(&self, message: ToastMessage) {
        self.dispatch.call(RegistryAction::PushToast(message));
    }

    /// Picks up an invalidation so every mounted list refetches
    pub fn refresh(&self) {
        let mut epoch = self.epoch;
        epoch.set(self.queries.generation());
    }
}

pub fn use_registry() -> RegistryContext {
    use_context::<RegistryContext>()
}

/// Loads a donor list through the cache.
///
/// `key` may read signals; the resource reruns when they change and after
/// every mutation. A `None` key leaves the list idle.
pub fn use_donor_list(
    key: impl Fn() -> Option<QueryKey> + 'static,
) -> Resource<Option<ClientResult<Vec<Donor>>>> {
    let ctx = use_registry();
    let epoch = ctx.epoch;
    use_resource(move || {
        // Subscribe to invalidations
        let _generation = epoch();
        let key = key();
        let queries = ctx.queries.clone();
        async move {
            match key {
                Some(key) => Some(queries.fetch_list(key).await),
                None => None,
            }
        }
    })
}
