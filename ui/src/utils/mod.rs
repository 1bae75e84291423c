//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped `console_*!` macros over gloo-console
//! - **formatting**: date, phone link and count labels shared by the views
//! - **platform**: browser-only helpers (local date, dialer)

pub mod console_macros;
pub mod formatting;
pub mod platform;

pub use formatting::*;
pub use platform::*;
