//! Shared UI for the blood donor registry admin client.

pub mod app;
pub use app::DonorRegistry;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
