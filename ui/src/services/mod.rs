//! Infrastructure Services
//!
//! - **client**: RPC surface of the donor service, its HTTP and in-memory
//!   implementations, and the operator session
//! - **queries**: cached queries and invalidating mutations used by the views
//! - **config**: runtime configuration with a LocalStorage override
//!
//! Async traits here are `?Send`; everything runs on the browser's single thread.

pub mod client;
pub mod config;
pub mod queries;
