//! Data-access layer: cached donor queries and invalidating mutations

pub mod cache;
pub mod donor_queries;

pub use cache::{QueryCache, QueryKey, DONORS_PREFIX};
pub use donor_queries::DonorQueries;

use crate::services::client::ClientResult;

/// What a view should render for a query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Query not enabled yet (e.g. no blood group picked)
    Idle,
    Loading,
    Failed(String),
    Ready(T),
}

impl<T: Clone> QueryState<T> {
    /// Maps the value slot of a resource that yields `None` while disabled
    pub fn from_resource(value: Option<&Option<ClientResult<T>>>) -> Self {
        match value {
            None => QueryState::Loading,
            Some(None) => QueryState::Idle,
            Some(Some(Ok(data))) => QueryState::Ready(data.clone()),
            Some(Some(Err(e))) => QueryState::Failed(e.user_message()),
        }
    }
}
