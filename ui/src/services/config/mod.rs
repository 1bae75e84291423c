use anyhow::{Context, Result};
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::warn;

/// LocalStorage key holding an optional JSON override of [`RegistryConfig`]
pub const CONFIG_STORAGE_KEY: &str = "donor_registry_config";

/// Where donor RPCs are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    /// JSON-RPC against `backend_url`
    Http,
    /// Process-local demo store; nothing leaves the browser
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub backend: BackendMode,
    pub backend_url: String,
    pub user_agent: String,
    pub cache_capacity: usize,
    /// Lower bound, in days from today, of the "Donated" inference window
    pub donated_window_min_days: i64,
    /// Upper bound, in days from today, of the "Donated" inference window
    pub donated_window_max_days: i64,
    /// How long toasts stay visible
    pub toast_duration_ms: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            backend: BackendMode::Http,
            backend_url: "/api".to_string(),
            user_agent: "donor-registry-admin/1.0".to_string(),
            cache_capacity: 64,
            donated_window_min_days: 85,
            donated_window_max_days: 95,
            toast_duration_ms: 4000,
        }
    }
}

impl RegistryConfig {
    /// Parses an override document; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RegistryConfig =
            serde_json::from_str(json).context("Invalid registry configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend == BackendMode::Http && self.backend_url.trim().is_empty() {
            anyhow::bail!("backend_url is required for the http backend");
        }
        if self.donated_window_min_days > self.donated_window_max_days {
            anyhow::bail!(
                "donated window is empty: {}..={}",
                self.donated_window_min_days,
                self.donated_window_max_days
            );
        }
        Ok(())
    }

    pub fn donated_window(&self) -> RangeInclusive<i64> {
        self.donated_window_min_days..=self.donated_window_max_days
    }

    /// Defaults, overridden by the LocalStorage document when one is present and valid
    pub fn load() -> Self {
        match LocalStorage::get::<String>(CONFIG_STORAGE_KEY) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                warn!("Ignoring stored configuration: {:#}", e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}
