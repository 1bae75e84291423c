use gloo_storage::{SessionStorage, Storage};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::errors::ClientError;

/// Principal reported by the identity layer for unauthenticated callers
pub const ANONYMOUS_PRINCIPAL: &str = "2vxsx-fae";

pub const SESSION_STORAGE_KEY: &str = "donor_registry_session";

/// Signed-in operator of this single-tenant admin client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OperatorIdentity {
    pub principal: String,
}

impl OperatorIdentity {
    pub fn new(principal: &str) -> Self {
        Self {
            principal: principal.trim().to_string(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.principal.is_empty() || self.principal == ANONYMOUS_PRINCIPAL
    }
}

/// Keeps the operator identity in sessionStorage for the lifetime of the tab
#[derive(Clone, Debug, PartialEq)]
pub struct SessionManager {
    storage_key: String,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(SESSION_STORAGE_KEY)
    }
}

impl SessionManager {
    pub fn new(storage_key: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
        }
    }

    pub fn store_identity(&self, identity: &OperatorIdentity) -> Result<(), ClientError> {
        if identity.is_anonymous() {
            return Err(ClientError::Unauthenticated);
        }

        let identity_json =
            serde_json::to_string(identity).map_err(|e| ClientError::Serialization {
                message: format!("Failed to serialize identity: {}", e),
            })?;

        SessionStorage::set(&self.storage_key, identity_json).map_err(|e| {
            ClientError::Storage {
                message: format!("Failed to store identity in sessionStorage: {:?}", e),
            }
        })?;

        info!("Operator {} signed in", identity.principal);
        Ok(())
    }

    /// Stored identity, if any. Anonymous or unreadable entries are dropped.
    pub fn get_identity(&self) -> Option<OperatorIdentity> {
        let identity_json = SessionStorage::get::<String>(&self.storage_key).ok()?;

        match serde_json::from_str::<OperatorIdentity>(&identity_json) {
            Ok(identity) if !identity.is_anonymous() => Some(identity),
            Ok(_) => {
                self.clear();
                None
            }
            Err(e) => {
                warn!("Discarding unreadable stored identity: {}", e);
                self.clear();
                None
            }
        }
    }

    pub fn clear(&self) {
        SessionStorage::delete(&self.storage_key);
        info!("Session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_principals() {
        assert!(OperatorIdentity::new("").is_anonymous());
        assert!(OperatorIdentity::new("  2vxsx-fae ").is_anonymous());
        assert!(!OperatorIdentity::new("rrkah-fqaaa-aaaaa-aaaaq-cai").is_anonymous());
    }
}
