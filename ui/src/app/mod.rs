pub mod context;
pub mod donor_registry;

pub use context::{use_donor_list, use_registry, RegistryContext};
pub use donor_registry::DonorRegistry;
